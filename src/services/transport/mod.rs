/// HTTP transport abstraction
///
/// The controller builds `ApiRequest` values and hands them to a `Transport`.
/// A transport only moves bytes: any response the server sends back, error
/// statuses included, is returned as an `ApiResponse`. Only failures to get a
/// response at all are reported as errors.
use std::fmt::Display;

use reqwest::Method;

use crate::{error::AppResult, models::RecommendationRecord};

pub mod http;

pub use http::HttpTransport;

/// One request against the recommendations service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the service base URL, already percent-encoded
    pub path: String,
    /// Pre-built query string without the leading `?`
    pub query: Option<String>,
    /// JSON body; requests that carry one always send the full record
    pub body: Option<RecommendationRecord>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: None,
            body: None,
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        self.query = if query.is_empty() { None } else { Some(query) };
        self
    }

    pub fn with_body(mut self, record: RecommendationRecord) -> Self {
        self.body = Some(record);
        self
    }

    /// Path plus query, as sent on the wire
    pub fn target(&self) -> String {
        match &self.query {
            Some(query) => format!("{}?{}", self.path, query),
            None => self.path.clone(),
        }
    }
}

impl Display for ApiRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method, self.target())
    }
}

/// Raw response from the recommendations service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for sending requests to the recommendations service
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Sends one request and returns whatever the server answered
    async fn send(&self, request: ApiRequest) -> AppResult<ApiResponse>;
}
