mod common;
pub use self::common::{Query, QueryCommon};

mod daily;
pub use self::daily::DailyQuery;
