use connectors::sql::base::error::{ConnectorError, DbError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Connection failed: {0}")]
    Connector(#[from] ConnectorError),

    #[error("Database error: {0}")]
    Db(#[from] DbError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No connection URL: pass --url or set HANA_URL")]
    MissingUrl,

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}
