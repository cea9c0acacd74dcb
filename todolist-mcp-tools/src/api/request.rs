//! Description of one outbound API call.

use reqwest::Method;

/// A single request against the TodoList API.
///
/// Tools build one of these per invocation; [`super::TodolistClient::send`]
/// turns it into exactly one HTTP request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    method: Method,
    path: String,
    token: Option<String>,
    body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// Create a request with no token and no body
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            token: None,
            body: None,
        }
    }

    /// `GET` request
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// `POST` request
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// `PUT` request
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// `PATCH` request
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    /// `DELETE` request
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attach the caller's token.
    ///
    /// The token is sent verbatim as the `Authorization` header value, without
    /// a `Bearer` scheme, which is what the TodoList API expects.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Attach a JSON body
    pub fn with_json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Attach an empty JSON object as the body
    pub fn with_empty_body(self) -> Self {
        self.with_json(serde_json::json!({}))
    }

    /// HTTP method
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Endpoint path, starting with `/`
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Authorization token, if the endpoint is authenticated
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// JSON body, if any
    pub fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }
}

/// Build `/todos/{id}` with `id` encoded as one path segment
pub fn todo_path(todo_id: &str) -> String {
    format!("/todos/{}", urlencoding::encode(todo_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_sets_all_parts() {
        let request = ApiRequest::post("/todos")
            .with_token("T")
            .with_json(json!({"content": "buy milk"}));

        assert_eq!(request.method(), &Method::POST);
        assert_eq!(request.path(), "/todos");
        assert_eq!(request.token(), Some("T"));
        assert_eq!(request.body(), Some(&json!({"content": "buy milk"})));
    }

    #[test]
    fn test_unauthenticated_request_has_no_token() {
        let request = ApiRequest::get("/users/checkout");
        assert_eq!(request.token(), None);
        assert_eq!(request.body(), None);
    }

    #[test]
    fn test_empty_body_is_empty_object() {
        let request = ApiRequest::patch("/todos/1/toggle").with_empty_body();
        assert_eq!(request.body(), Some(&json!({})));
    }

    #[test]
    fn test_todo_path_encodes_segment() {
        assert_eq!(todo_path("123"), "/todos/123");
        assert_eq!(todo_path("a/b c"), "/todos/a%2Fb%20c");
    }
}
