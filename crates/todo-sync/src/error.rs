//! Error types for remote calls, cache access and synchronization.

use thiserror::Error;

use crate::cache::QueryKey;

/// Failures reported by the remote collection service or its transport
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// The request never produced a usable HTTP response
    #[error("Request failed: {0}")]
    Transport(String),

    /// The service answered with one or more errors
    #[error("Service error: {}", .0.join("; "))]
    Service(Vec<String>),

    /// The response body did not have the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// The service acknowledged the mutation with `false`
    #[error("Service rejected {operation}")]
    Rejected { operation: &'static str },
}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RemoteError::Decode(err.to_string())
        } else {
            RemoteError::Transport(err.to_string())
        }
    }
}

/// Local cache access failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// The signature was read before anything was written under it
    #[error("No cached result for query '{0}'")]
    NotLoaded(QueryKey),
}

/// Errors surfaced by the synchronization entry points
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error(transparent)]
    Cache(#[from] CacheError),
}

pub type SyncResult<T> = Result<T, SyncError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_errors_are_joined() {
        let err = RemoteError::Service(vec!["bad id".to_string(), "not found".to_string()]);
        assert_eq!(err.to_string(), "Service error: bad id; not found");
    }

    #[test]
    fn test_sync_error_is_transparent() {
        let err = SyncError::from(CacheError::NotLoaded(QueryKey::AllTodos));
        assert_eq!(err.to_string(), "No cached result for query 'todos'");
    }
}
