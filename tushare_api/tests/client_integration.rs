use serde_json::json;
use tushare_api::{Client, DailyQuery, Error, Query};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn client_for(server: &MockServer) -> Client {
    Client::with_base_url(&server.uri(), "test-token".to_string()).unwrap()
}

#[tokio::test]
async fn query_sends_envelope() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("daily.json");

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(json!({
            "api_name": "daily",
            "token": "test-token",
            "params": {
                "ts_code": "000001.SZ",
                "start_date": "20230103",
                "end_date": "20230104"
            },
            "fields": "ts_code,trade_date,close"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let query = DailyQuery::new("000001.SZ")
        .with_start_date("20230103")
        .with_end_date("20230104")
        .with_fields(&["ts_code", "trade_date", "close"]);
    let table = client_for(&mock_server).query(&query).await.unwrap();
    assert_eq!(table.len(), 2);
}

#[tokio::test]
async fn daily_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("daily.json");

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let bars = client_for(&mock_server)
        .daily(&DailyQuery::new("000001.SZ"))
        .await
        .unwrap();
    assert_eq!(bars.len(), 2);
    assert_eq!(bars[0].trade_date, "20230103");
    assert_eq!(bars[1].close, 14.32);
}

#[tokio::test]
async fn daily_empty() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("daily_empty.json");

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let bars = client_for(&mock_server)
        .daily(&DailyQuery::new("000001.SZ"))
        .await
        .unwrap();
    assert!(bars.is_empty());
}

#[tokio::test]
async fn invalid_token_returns_api_error() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("token_invalid.json");

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server)
        .daily(&DailyQuery::new("000001.SZ"))
        .await;
    match result {
        Err(Error::Api { code, msg }) => {
            assert_eq!(code, 40101);
            assert!(msg.contains("token"));
        }
        other => panic!("expected Api error, got {:?}", other.map(|b| b.len())),
    }
}

#[tokio::test]
async fn server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server)
        .daily(&DailyQuery::new("000001.SZ"))
        .await;
    match result {
        Err(Error::HttpStatus { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "Internal Server Error");
        }
        other => panic!("expected HttpStatus, got {:?}", other.map(|b| b.len())),
    }
}

#[tokio::test]
async fn malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server)
        .daily(&DailyQuery::new("000001.SZ"))
        .await;
    assert!(matches!(result, Err(Error::ParseFailed(_))));
}

#[tokio::test]
async fn row_with_wrong_type_is_parse_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "msg": "",
            "data": {
                "fields": ["ts_code", "trade_date", "open", "high", "low", "close", "vol"],
                "items": [["000001.SZ", "20230103", "13.2", 13.77, 13.01, 13.77, 100.0]]
            }
        })))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server)
        .daily(&DailyQuery::new("000001.SZ"))
        .await;
    match result {
        Err(Error::ParseFailed(msg)) => assert!(msg.starts_with("row 0:")),
        other => panic!("expected ParseFailed, got {:?}", other.map(|b| b.len())),
    }
}
