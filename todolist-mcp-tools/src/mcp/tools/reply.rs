//! Text rendering of API outcomes.
//!
//! Each tool declares a [`ReplyFormat`]: which response fields appear in the
//! success text and which label prefixes the failure text.

use crate::api::ApiError;

/// How a response field is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Render {
    /// Strings verbatim, anything else as JSON
    Plain,
    /// Always serialized as JSON
    Json,
}

/// One `key: value` pair of the success text.
#[derive(Debug, Clone, Copy)]
pub struct ReplyField {
    key: &'static str,
    render: Render,
}

/// Field rendered with [`Render::Plain`]
pub const fn plain(key: &'static str) -> ReplyField {
    ReplyField {
        key,
        render: Render::Plain,
    }
}

/// Field rendered with [`Render::Json`]
pub const fn json(key: &'static str) -> ReplyField {
    ReplyField {
        key,
        render: Render::Json,
    }
}

/// Success and failure rendering for one tool.
#[derive(Debug, Clone, Copy)]
pub struct ReplyFormat {
    failure_label: &'static str,
    fields: &'static [ReplyField],
}

impl ReplyFormat {
    /// Create a reply format
    pub const fn new(failure_label: &'static str, fields: &'static [ReplyField]) -> Self {
        Self {
            failure_label,
            fields,
        }
    }

    /// Label that prefixes failure text
    pub fn failure_label(&self) -> &'static str {
        self.failure_label
    }

    /// Render the documented fields of a success body.
    ///
    /// A missing field renders as `null`.
    pub fn success_text(&self, body: &serde_json::Value) -> String {
        self.fields
            .iter()
            .map(|field| {
                let value = body.get(field.key).unwrap_or(&serde_json::Value::Null);
                format!("{}: {}", field.key, render_value(value, field.render))
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Render a failure: the label followed by the remote message, or a
    /// generic description when the API sent none.
    pub fn failure_text(&self, error: &ApiError) -> String {
        format!("{}，錯誤訊息: {}", self.failure_label, error.detail())
    }
}

fn render_value(value: &serde_json::Value, render: Render) -> String {
    match (render, value) {
        (Render::Plain, serde_json::Value::String(s)) => s.clone(),
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SAMPLE: ReplyFormat = ReplyFormat::new("取得 Todo 失敗", &[plain("status"), json("data")]);

    #[test]
    fn test_success_text_renders_fields_in_order() {
        let body = json!({
            "status": true,
            "data": [{"content": "buy milk", "id": "t1", "status": false}]
        });

        assert_eq!(
            SAMPLE.success_text(&body),
            r#"status: true, data: [{"content":"buy milk","id":"t1","status":false}]"#
        );
    }

    #[test]
    fn test_plain_strings_are_not_quoted() {
        const FORMAT: ReplyFormat = ReplyFormat::new("登入失敗", &[plain("status"), plain("token")]);
        let text = FORMAT.success_text(&json!({"status": true, "token": "abc.def"}));
        assert_eq!(text, "status: true, token: abc.def");
    }

    #[test]
    fn test_json_strings_are_quoted() {
        const FORMAT: ReplyFormat = ReplyFormat::new("x", &[json("data")]);
        assert_eq!(FORMAT.success_text(&json!({"data": "s"})), r#"data: "s""#);
    }

    #[test]
    fn test_missing_field_renders_null() {
        let text = SAMPLE.success_text(&json!({"status": true}));
        assert_eq!(text, "status: true, data: null");
    }

    #[test]
    fn test_failure_text_uses_remote_message() {
        let error = ApiError::from_status(401, Some("驗證錯誤，請重新登入".to_string()));
        assert_eq!(
            SAMPLE.failure_text(&error),
            "取得 Todo 失敗，錯誤訊息: 驗證錯誤，請重新登入"
        );
    }

    #[test]
    fn test_failure_text_without_message() {
        let error = ApiError::from_status(500, None);
        assert_eq!(SAMPLE.failure_text(&error), "取得 Todo 失敗，錯誤訊息: HTTP 500");
    }
}
