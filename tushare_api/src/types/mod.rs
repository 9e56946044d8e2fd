mod envelope;
pub use self::envelope::{ApiResponse, RowError, TableData};

mod daily;
pub use self::daily::DailyBar;
