//! HttpBackend - reqwest implementation of the control-plane API client.
//!
//! Every call is a single request against `base_url + path` carrying the
//! session's authorization header. There are no retries and no timeout: a hung
//! backend holds the inbound request until it answers.

use async_trait::async_trait;
use panel_core::backend::{Backend, BackendRequest, BackendResponse, Method, RequestBody};
use panel_core::error::{PanelError, Result};
use reqwest::Client;

/// Backend client talking HTTP to a fixed base URL.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Creates a client for the API rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a path suffix.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn method(method: Method) -> reqwest::Method {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn send(&self, request: BackendRequest) -> Result<BackendResponse> {
        let url = self.url_for(&request.path);

        let mut builder = self.client.request(Self::method(request.method), &url);

        if let Some(token) = request.authorization.value() {
            builder = builder.header(request.authorization.name(), token);
        }

        builder = match request.body {
            RequestBody::None => builder,
            RequestBody::Text(text) => builder.body(text),
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Form(pairs) => builder.form(&pairs),
        };

        let response = builder.send().await.map_err(|e| {
            tracing::error!(
                method = %request.method,
                path = %request.path,
                "Backend request failed: {}",
                e
            );
            PanelError::backend(format!("{} {} failed: {}", request.method, url, e))
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| PanelError::backend(format!("Failed to read response body: {}", e)))?;

        tracing::debug!(
            method = %request.method,
            path = %request.path,
            status,
            "Backend call completed"
        );

        Ok(BackendResponse { status, body })
    }
}
