use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: String,
}

/// Creation payload. Any `id` sent by the client is ignored; the store
/// assigns one. Absent fields deserialize to their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTodoRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

/// Full-replacement payload for PUT. All three mutable fields are
/// applied field-by-field; an omitted field is applied as its default,
/// so callers must send the complete record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodoRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}
