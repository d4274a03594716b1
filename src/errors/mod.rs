use thiserror::Error;

use crate::swiss::types::PlayerId;

pub type Result<T> = std::result::Result<T, TournamentError>;

type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum TournamentError {
    /// The store could not be reached or a statement failed
    #[error("Store unavailable: failed to {operation}")]
    StoreUnavailable {
        operation: String,
        transient: bool,
        #[source]
        source: BoxedError,
    },
    /// A match referenced a player id that is not registered
    #[error("Unknown player id: {0}")]
    InvalidReference(PlayerId),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl TournamentError {
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            TournamentError::StoreUnavailable {
                transient: true,
                ..
            }
        )
    }
}

/// Wrap a rusqlite result as a store failure for `operation`
pub fn with_sql_context<T>(result: rusqlite::Result<T>, operation: &str) -> Result<T> {
    result.map_err(|e| TournamentError::StoreUnavailable {
        operation: operation.to_string(),
        transient: is_transient_sql_error(&e),
        source: Box::new(e),
    })
}

/// Wrap a pool checkout result as a store failure for `operation`
pub fn with_pool_context<T>(result: std::result::Result<T, r2d2::Error>, operation: &str) -> Result<T> {
    // r2d2 reports checkout timeouts only
    result.map_err(|e| TournamentError::StoreUnavailable {
        operation: operation.to_string(),
        transient: true,
        source: Box::new(e),
    })
}

fn is_transient_sql_error(error: &rusqlite::Error) -> bool {
    matches!(
        error.sqlite_error_code(),
        Some(rusqlite::ErrorCode::DatabaseBusy) | Some(rusqlite::ErrorCode::DatabaseLocked)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sql_error_becomes_store_unavailable() {
        let result: rusqlite::Result<()> = Err(rusqlite::Error::QueryReturnedNoRows);
        let err = with_sql_context(result, "count players").unwrap_err();

        assert!(matches!(err, TournamentError::StoreUnavailable { .. }));
        assert!(!err.is_transient());
        assert_eq!(err.to_string(), "Store unavailable: failed to count players");
    }

    #[test]
    fn test_busy_database_is_transient() {
        let busy = rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_BUSY),
            None,
        );
        let err = with_sql_context::<()>(Err(busy), "insert match").unwrap_err();

        assert!(err.is_transient());
    }
}
