/// reqwest-backed transport
///
/// Sends requests to the recommendations service at `api_url`. No timeout is
/// configured; a request lives as long as the server keeps it open.
use reqwest::Client as HttpClient;

use crate::{
    error::AppResult,
    services::transport::{ApiRequest, ApiResponse, Transport},
};

#[derive(Clone)]
pub struct HttpTransport {
    http_client: HttpClient,
    api_url: String,
}

impl HttpTransport {
    pub fn new(api_url: &str) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, request: &ApiRequest) -> String {
        format!("{}{}", self.api_url, request.target())
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> AppResult<ApiResponse> {
        let url = self.url(&request);

        let mut builder = self.http_client.request(request.method.clone(), &url);
        if let Some(record) = &request.body {
            // Sets Content-Type: application/json
            builder = builder.json(record);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        tracing::debug!(
            method = %request.method,
            url = %url,
            status = status,
            "Recommendations API responded"
        );

        Ok(ApiResponse { status, body })
    }
}
