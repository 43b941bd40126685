// error.rs - typed errors for the database layer

use mongodb::error::ErrorKind;
use thiserror::Error;

// Callers that answer HTTP requests map every variant to the same generic
// server error; the split only matters for logs.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("failed to reach the database: {0}")]
    Connection(#[source] mongodb::error::Error),
    #[error("query failed: {0}")]
    Query(#[source] mongodb::error::Error),
    #[error("configuration {0:?} already exists in database")]
    Duplicate(String),
}

impl From<mongodb::error::Error> for QueryError {
    fn from(err: mongodb::error::Error) -> Self {
        match err.kind.as_ref() {
            ErrorKind::ServerSelection { .. }
            | ErrorKind::Io(..)
            | ErrorKind::Authentication { .. }
            | ErrorKind::DnsResolve { .. } => QueryError::Connection(err),
            _ => QueryError::Query(err),
        }
    }
}
