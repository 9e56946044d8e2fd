//! Shared query infrastructure: the [`Query`] trait and [`QueryCommon`] fields.

use serde_json::{Map, Value};

/// Trait implemented by all query builders. Provides the pieces of the
/// request envelope plus shared builder methods.
pub trait Query {
    /// Name of the Tushare interface, e.g. `daily`.
    fn api_name(&self) -> &'static str;

    /// Interface parameters, keyed by name. Only parameters that were set are included.
    fn params(&self) -> Map<String, Value>;

    /// Returns a reference to the common query fields.
    fn common(&self) -> &QueryCommon;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Comma-separated column list. Empty means the interface's default columns.
    fn fields(&self) -> String {
        self.common().fields.join(",")
    }

    /// Restricts the returned columns to `fields`.
    fn with_fields(mut self, fields: &[&str]) -> Self
    where
        Self: Sized,
    {
        self.get_common().fields = fields.iter().map(|f| f.to_string()).collect();
        self
    }
}

/// Fields shared by all query types.
#[derive(Clone, Debug, Default)]
pub struct QueryCommon {
    /// Requested columns. Empty uses the API default set.
    pub fields: Vec<String>,
}
