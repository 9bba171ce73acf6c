//! Todo Model
//!
//! Data structures matching the remote service's entities.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque todo identifier, assigned by the remote service
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TodoId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TodoId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Todo data structure (matches remote)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    pub complete: bool,
}

impl Todo {
    pub fn new(id: impl Into<TodoId>, text: impl Into<String>, complete: bool) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            complete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_wire_shape() {
        let todo: Todo =
            serde_json::from_str(r#"{"id":"5c1a","text":"milk","complete":true}"#).unwrap();
        assert_eq!(todo, Todo::new("5c1a", "milk", true));

        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], "5c1a");
    }
}
