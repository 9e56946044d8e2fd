use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::Error;

/// Response envelope shared by every Tushare interface.
#[derive(Serialize, Deserialize, Debug)]
pub struct ApiResponse {
    #[serde(default)]
    pub request_id: Option<String>,
    pub code: i64,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub data: Option<TableData>,
}

impl ApiResponse {
    /// Returns the table on success (`code == 0`), or the provider's error.
    ///
    /// A successful response without `data` is treated as an empty table.
    pub fn into_table(self) -> Result<TableData, Error> {
        if self.code != 0 {
            return Err(Error::Api {
                code: self.code,
                msg: self.msg.unwrap_or_default(),
            });
        }
        Ok(self.data.unwrap_or_default())
    }
}

/// Column-oriented table: `fields` names the columns, each entry of `items`
/// is one row with values in the same positions.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct TableData {
    pub fields: Vec<String>,
    pub items: Vec<Vec<Value>>,
    #[serde(default)]
    pub has_more: bool,
}

/// A row that could not be deserialized into the requested type.
#[derive(thiserror::Error, Debug)]
#[error("row {row}: {source}")]
pub struct RowError {
    pub row: usize,
    #[source]
    pub source: serde_json::Error,
}

impl TableData {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the table holds no rows, whether or not columns are present.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Position of the named column, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f == name)
    }

    /// Each row as a map from column name to value, in row order.
    ///
    /// Values missing at the end of a short row are left out of its map.
    pub fn records(&self) -> Vec<Map<String, Value>> {
        self.items
            .iter()
            .map(|row| {
                self.fields
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned())
                    .collect::<Map<String, Value>>()
            })
            .collect()
    }

    /// Deserializes every row into `T` by column name, preserving row order.
    pub fn deserialize_rows<T: DeserializeOwned>(&self) -> Result<Vec<T>, RowError> {
        self.records()
            .into_iter()
            .enumerate()
            .map(|(row, record)| {
                serde_json::from_value(Value::Object(record))
                    .map_err(|source| RowError { row, source })
            })
            .collect()
    }
}
