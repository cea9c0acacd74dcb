//! Request types for the TodoList tools

use serde::Deserialize;

/// Request to register a new account
#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    /// Account email, already checked against the schema's `email` format
    pub email: String,
    /// Account password
    pub password: String,
    /// Display name
    pub nickname: String,
}

/// Request to sign in and obtain a token
#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

/// Request carrying only the caller's token
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    /// Token issued by sign in
    pub token: String,
}

/// Request to create a todo
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    /// Token issued by sign in
    pub token: String,
    /// Todo text
    pub content: String,
}

/// Request to replace a todo's text
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoRequest {
    /// Token issued by sign in
    pub token: String,
    /// Identifier of the todo
    pub todo_id: String,
    /// New todo text
    pub content: String,
}

/// Request addressing one todo (delete, toggle)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoIdRequest {
    /// Token issued by sign in
    pub token: String,
    /// Identifier of the todo
    pub todo_id: String,
}
