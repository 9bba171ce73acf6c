//! Client configuration.

use serde::{Deserialize, Serialize};

/// Endpoint used when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "http://localhost:4000";

/// Remote collection service client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// GraphQL endpoint receiving all queries and mutations
    pub endpoint: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Configuration baked in at compile time.
    ///
    /// A browser bundle has no process environment, so the endpoint is read
    /// from `TODO_GRAPHQL_ENDPOINT` when the crate is built.
    pub fn from_env() -> Self {
        Self::from_endpoint(option_env!("TODO_GRAPHQL_ENDPOINT"))
    }

    fn from_endpoint(endpoint: Option<&str>) -> Self {
        match endpoint.map(str::trim) {
            Some(endpoint) if !endpoint.is_empty() => Self {
                endpoint: endpoint.to_string(),
            },
            _ => Self::default(),
        }
    }
}
