//! Todo item tools
//!
//! All of these require the token from `hexschool_todolist_sign_in`.

pub mod create;
pub mod delete;
pub mod list;
pub mod toggle;
pub mod update;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all todo tools with the registry
pub fn register_todo_tools(registry: &mut ToolRegistry) {
    registry.register(list::ListTodoTool::new());
    registry.register(create::CreateTodoTool::new());
    registry.register(update::UpdateTodoTool::new());
    registry.register(delete::DeleteTodoTool::new());
    registry.register(toggle::ToggleTodoTool::new());
}
