//! GraphQL Remote
//!
//! Talks to the todo service over a single GraphQL endpoint.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::TodoRemote;
use crate::config::ClientConfig;
use crate::error::RemoteError;
use crate::model::{Todo, TodoId};

// ========================
// Documents
// ========================

const TODOS_QUERY: &str = "query { todos { id text complete } }";

const CREATE_TODO_MUTATION: &str =
    "mutation($text: String!) { createTodo(text: $text) { id text complete } }";

const UPDATE_TODO_MUTATION: &str =
    "mutation($id: ID!, $complete: Boolean!) { updateTodo(id: $id, complete: $complete) }";

const REMOVE_TODO_MUTATION: &str = "mutation($id: ID!) { removeTodo(id: $id) }";

// ========================
// Envelope
// ========================

#[derive(Serialize)]
struct GraphqlRequest<'a, V> {
    query: &'a str,
    variables: V,
}

#[derive(Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphqlErrorMessage>>,
}

#[derive(Deserialize)]
struct GraphqlErrorMessage {
    message: String,
}

impl<T> GraphqlResponse<T> {
    fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|errors| !errors.is_empty())
    }

    fn into_data(self) -> Result<T, RemoteError> {
        if let Some(errors) = self.errors.filter(|errors| !errors.is_empty()) {
            return Err(RemoteError::Service(
                errors.into_iter().map(|e| e.message).collect(),
            ));
        }
        self.data
            .ok_or_else(|| RemoteError::Decode("response carries no data".to_string()))
    }
}

/// Outcome of a request from its HTTP status and decoded body.
///
/// Service errors in the body win over the status, so validation failures
/// answered with 4xx keep their messages.
fn settle<T>(
    status: StatusCode,
    body: Result<GraphqlResponse<T>, RemoteError>,
) -> Result<T, RemoteError> {
    match body {
        Ok(envelope) if status.is_success() || envelope.has_errors() => envelope.into_data(),
        Ok(_) => Err(RemoteError::Transport(format!("HTTP {status}"))),
        Err(_) if !status.is_success() => Err(RemoteError::Transport(format!("HTTP {status}"))),
        Err(err) => Err(err),
    }
}

// ========================
// Variables
// ========================

#[derive(Serialize)]
struct NoVariables {}

#[derive(Serialize)]
struct TextVariables<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct IdVariables<'a> {
    id: &'a TodoId,
}

#[derive(Serialize)]
struct UpdateVariables<'a> {
    id: &'a TodoId,
    complete: bool,
}

// ========================
// Payloads
// ========================

#[derive(Deserialize)]
struct TodosData {
    todos: Vec<Todo>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateTodoData {
    create_todo: Todo,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateTodoData {
    update_todo: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoveTodoData {
    remove_todo: bool,
}

fn acknowledged(operation: &'static str, ack: bool) -> Result<(), RemoteError> {
    if ack {
        Ok(())
    } else {
        Err(RemoteError::Rejected { operation })
    }
}

// ========================
// Client
// ========================

/// `TodoRemote` over GraphQL-on-HTTP
#[derive(Debug, Clone)]
pub struct GraphqlRemote {
    client: reqwest::Client,
    endpoint: String,
}

impl GraphqlRemote {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn execute<V, T>(&self, query: &str, variables: V) -> Result<T, RemoteError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        debug!(endpoint = %self.endpoint, query, "sending graphql request");
        let response = self
            .client
            .post(&self.endpoint)
            .json(&GraphqlRequest { query, variables })
            .send()
            .await?;
        let status = response.status();
        let body = response.json::<GraphqlResponse<T>>().await.map_err(RemoteError::from);
        settle(status, body)
    }
}

#[async_trait(?Send)]
impl TodoRemote for GraphqlRemote {
    async fn list(&self) -> Result<Vec<Todo>, RemoteError> {
        let data: TodosData = self.execute(TODOS_QUERY, NoVariables {}).await?;
        Ok(data.todos)
    }

    async fn create(&self, text: &str) -> Result<Todo, RemoteError> {
        let data: CreateTodoData = self
            .execute(CREATE_TODO_MUTATION, TextVariables { text })
            .await?;
        Ok(data.create_todo)
    }

    async fn update_complete(&self, id: &TodoId, complete: bool) -> Result<(), RemoteError> {
        let data: UpdateTodoData = self
            .execute(UPDATE_TODO_MUTATION, UpdateVariables { id, complete })
            .await?;
        acknowledged("updateTodo", data.update_todo)
    }

    async fn remove(&self, id: &TodoId) -> Result<(), RemoteError> {
        let data: RemoveTodoData = self
            .execute(REMOVE_TODO_MUTATION, IdVariables { id })
            .await?;
        acknowledged("removeTodo", data.remove_todo)
    }
}
