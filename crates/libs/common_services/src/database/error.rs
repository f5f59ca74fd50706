use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("Database error: {0}")]
    Sqlx(sqlx::Error),

    #[error("{operation} did not finish within {after:?}")]
    Timeout {
        operation: &'static str,
        after: Duration,
    },

    /// A step of the album reassignment failed after earlier steps ran. The
    /// surrounding transaction has been rolled back by the time this is seen.
    #[error("Album reassignment failed at step '{step}': {source}")]
    PartialUpdate {
        step: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        Self::Sqlx(err)
    }
}
