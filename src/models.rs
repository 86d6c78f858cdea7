use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Todo {
    pub id: i32,
    pub status: bool,
    pub body: String,
}

/// A missing `body` field decodes to an empty string, so presence-checking
/// happens in one place in the handler.
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub body: String,
}
