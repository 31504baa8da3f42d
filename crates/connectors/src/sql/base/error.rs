use compiler::error::CompileError;
use model::{core::value::ValueError, records::row::RowError};
use thiserror::Error;

/// All errors coming from the database/query layer.
#[derive(Debug, Error)]
pub enum DbError {
    /// Any driver error, passed through untranslated.
    #[error("SQL error: {0}")]
    Sql(#[from] hdbconnect::HdbError),

    /// A statement could not be compiled for the dialect.
    #[error("Compile error: {0}")]
    Compile(#[from] CompileError),

    /// A result row did not have the expected shape.
    #[error("Row error: {0}")]
    Row(#[from] RowError),

    /// A scalar could not be coerced to the requested type.
    #[error("Value error: {0}")]
    Value(#[from] ValueError),

    /// The connection was closed before the call.
    #[error("Connection is closed")]
    Closed,

    /// A blocking driver task failed to complete.
    #[error("Driver task failed: {0}")]
    Task(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

/// Errors happening during adapter or connection setup.
#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("Invalid connection URL: {0}")]
    InvalidUrl(String),

    #[error("HANA connection failed: {0}")]
    Driver(#[from] hdbconnect::HdbError),

    #[error("Driver task failed: {0}")]
    Task(String),
}
