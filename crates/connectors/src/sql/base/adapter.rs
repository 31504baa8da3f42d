use crate::sql::base::error::DbError;
use async_trait::async_trait;
use model::{core::value::Value, records::row::Row};

/// The connection seam the dialect drives. Implemented by the `hdbconnect`
/// adapter and by in-memory doubles in tests.
#[async_trait]
pub trait SqlAdapter: Send + Sync {
    /// Runs a statement without parameters.
    async fn exec(&self, query: &str) -> Result<(), DbError>;

    /// Runs a parameterized statement and returns the affected row count.
    async fn exec_params(&self, query: &str, params: Vec<Value>) -> Result<usize, DbError>;

    async fn query_rows(&self, sql: &str) -> Result<Vec<Row>, DbError> {
        self.query_params(sql, Vec::new()).await
    }

    /// Runs a parameterized query and returns every row.
    async fn query_params(&self, sql: &str, params: Vec<Value>) -> Result<Vec<Row>, DbError>;

    /// The user name the connection authenticated with.
    fn user(&self) -> &str;

    /// True once the connection has been closed.
    fn is_closed(&self) -> bool;

    async fn close(&self) -> Result<(), DbError>;
}
