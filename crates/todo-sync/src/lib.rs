//! Todo Cache Synchronization
//!
//! Keeps a locally cached todo collection consistent with a remote
//! query/mutation API.
//!
//! Layered architecture:
//! - model: the `Todo` entity
//! - remote: the remote collection service contract and its GraphQL client
//! - cache: the local snapshot cache contract and an in-memory cache
//! - sync: create / toggle / remove entry points applying pure transforms
//!   to the cache after each successful remote call
//! - config: client configuration

pub mod cache;
pub mod config;
pub mod error;
pub mod model;
pub mod remote;
pub mod sync;

pub use cache::{MemoryCache, QueryKey, Snapshot, TodoCache};
pub use config::ClientConfig;
pub use error::{CacheError, RemoteError, SyncError, SyncResult};
pub use model::{Todo, TodoId};
pub use remote::{GraphqlRemote, TodoRemote};
pub use sync::TodoSync;
