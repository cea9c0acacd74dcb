//! Client and types for the Hexschool TodoList API.

pub mod client;
pub mod error;
pub mod request;

pub use client::TodolistClient;
pub use error::{ApiError, ApiErrorKind, ApiResult};
pub use request::ApiRequest;
