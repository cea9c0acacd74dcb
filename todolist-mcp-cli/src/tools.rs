//! `todolist-mcp tools` - list the registered tools.

use rmcp::model::Tool;
use todolist_mcp_tools::McpServer;

use crate::table::{new_table, truncate_str};

const DESCRIPTION_WIDTH: usize = 60;

/// Run the tools command.
pub fn run_tools(server: &McpServer, json: bool) -> anyhow::Result<()> {
    let tools = server.list_tools();
    if json {
        println!("{}", render_json(&tools)?);
    } else {
        println!("{}", render_table(&tools));
    }
    Ok(())
}

/// Tool names, descriptions and input schemas as pretty JSON
pub fn render_json(tools: &[Tool]) -> anyhow::Result<String> {
    let entries: Vec<serde_json::Value> = tools
        .iter()
        .map(|tool| {
            serde_json::json!({
                "name": tool.name,
                "description": tool.description,
                "inputSchema": tool.input_schema.as_ref(),
            })
        })
        .collect();
    Ok(serde_json::to_string_pretty(
        &serde_json::json!({ "tools": entries }),
    )?)
}

/// One row per tool: name, required arguments and the first description line
pub fn render_table(tools: &[Tool]) -> String {
    let mut table = new_table();
    table.set_header(vec!["Tool", "Arguments", "Description"]);

    for tool in tools {
        let summary = tool
            .description
            .as_deref()
            .and_then(|d| d.lines().next())
            .unwrap_or_default();
        table.add_row(vec![
            tool.name.to_string(),
            required_arguments(tool).join(", "),
            truncate_str(summary, DESCRIPTION_WIDTH),
        ]);
    }

    table.to_string()
}

fn required_arguments(tool: &Tool) -> Vec<String> {
    tool.input_schema
        .get("required")
        .and_then(|required| required.as_array())
        .map(|names| {
            names
                .iter()
                .filter_map(|name| name.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use todolist_mcp_tools::ApiConfig;

    fn tools() -> Vec<Tool> {
        McpServer::new(ApiConfig::default()).unwrap().list_tools()
    }

    #[test]
    fn test_render_json_lists_every_tool() {
        let rendered = render_json(&tools()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        let entries = parsed["tools"].as_array().unwrap();

        assert_eq!(entries.len(), 9);
        let sign_up = entries
            .iter()
            .find(|e| e["name"] == "hexschool_todolist_sign_up")
            .unwrap();
        assert_eq!(
            sign_up["inputSchema"]["required"],
            serde_json::json!(["email", "password", "nickname"])
        );
    }

    #[test]
    fn test_render_table_shows_required_arguments() {
        let rendered = render_table(&tools());
        assert!(rendered.contains("hexschool_todolist_update_todo_status"));
        assert!(rendered.contains("token, todoId"));
    }
}
