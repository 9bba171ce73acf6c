//! Remote Collection Service - Core Trait
//!
//! Abstract interface to the service owning the todo collection.
//! The concrete transport lives in `graphql`.

mod graphql;

use async_trait::async_trait;

use crate::error::RemoteError;
use crate::model::{Todo, TodoId};

pub use graphql::GraphqlRemote;

/// Remote todo collection operations
///
/// Futures are not required to be `Send`: browser fetches never are.
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait TodoRemote {
    /// List every todo
    async fn list(&self) -> Result<Vec<Todo>, RemoteError>;

    /// Create a todo; the service assigns its id
    async fn create(&self, text: &str) -> Result<Todo, RemoteError>;

    /// Set the completion flag of a todo
    async fn update_complete(&self, id: &TodoId, complete: bool) -> Result<(), RemoteError>;

    /// Delete a todo
    async fn remove(&self, id: &TodoId) -> Result<(), RemoteError>;
}
