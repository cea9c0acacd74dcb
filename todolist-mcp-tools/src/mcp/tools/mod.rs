//! Tool implementations for MCP operations
//!
//! Tools are grouped by the part of the API they wrap:
//!
//! - `users` - account registration, sign in/out and token checks
//! - `todos` - listing and editing todo items
//!
//! Each tool lives in its own module with a `description.md` alongside. All of
//! them share the request executor in [`crate::mcp::ToolContext::call_api`]
//! and the text rendering in [`reply`].

pub mod reply;
pub mod todos;
pub mod users;

/// Schema for tools whose only argument is the token
pub(crate) fn token_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "token": {
                "type": "string",
                "description": "Token returned by hexschool_todolist_sign_in"
            }
        },
        "required": ["token"]
    })
}

/// Schema for tools addressing a single todo
pub(crate) fn todo_id_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "token": {
                "type": "string",
                "description": "Token returned by hexschool_todolist_sign_in"
            },
            "todoId": {
                "type": "string",
                "description": "Identifier of the todo"
            }
        },
        "required": ["token", "todoId"]
    })
}
