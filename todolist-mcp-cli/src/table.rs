//! Terminal-aware table utilities.

use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

/// Create a table sized to the terminal, falling back to 120 columns when
/// not connected to a TTY.
pub fn new_table() -> Table {
    let width = crossterm::terminal::size().map(|(w, _)| w).unwrap_or(120);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_width(width);
    table
}

/// Truncate a string to `max` characters, appending "..." if truncated.
///
/// Safe for multi-byte (UTF-8) strings.
pub fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_str("註冊", 10), "註冊");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate_str("註冊一個帳號並登入", 6), "註冊一...");
    }
}
