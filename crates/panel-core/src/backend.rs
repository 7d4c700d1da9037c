//! Control-plane API client contract.
//!
//! Defines the request/response pair exchanged with the Tsuru API and the
//! `Backend` trait the views depend on. The reqwest implementation lives in
//! `panel-infrastructure`; tests substitute an in-memory mock.

use crate::error::Result;
use crate::session::Authorization;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;

/// HTTP verbs the dashboard issues against the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }

    /// Whether the verb changes backend state.
    pub fn is_mutating(&self) -> bool {
        !matches!(self, Method::Get)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outbound request body.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    None,
    /// Sent as-is (unit deltas, run commands, env assignments).
    Text(String),
    /// Serialized as `application/json`.
    Json(Value),
    /// Sent as `application/x-www-form-urlencoded`.
    Form(Vec<(String, String)>),
}

/// A single call against the control-plane API.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendRequest {
    pub method: Method,
    /// Path suffix appended to the configured base URL, query included.
    pub path: String,
    pub authorization: Authorization,
    pub body: RequestBody,
}

impl BackendRequest {
    pub fn new(method: Method, path: impl Into<String>, authorization: &Authorization) -> Self {
        Self {
            method,
            path: path.into(),
            authorization: authorization.clone(),
            body: RequestBody::None,
        }
    }

    pub fn get(path: impl Into<String>, authorization: &Authorization) -> Self {
        Self::new(Method::Get, path, authorization)
    }

    pub fn post(path: impl Into<String>, authorization: &Authorization) -> Self {
        Self::new(Method::Post, path, authorization)
    }

    pub fn put(path: impl Into<String>, authorization: &Authorization) -> Self {
        Self::new(Method::Put, path, authorization)
    }

    pub fn delete(path: impl Into<String>, authorization: &Authorization) -> Self {
        Self::new(Method::Delete, path, authorization)
    }

    pub fn with_text(mut self, body: impl Into<String>) -> Self {
        self.body = RequestBody::Text(body.into());
        self
    }

    pub fn with_json(mut self, body: Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    pub fn with_form(mut self, pairs: Vec<(String, String)>) -> Self {
        self.body = RequestBody::Form(pairs);
        self
    }
}

/// Status and raw body returned by the backend.
///
/// Callers branch on the status themselves: `204` is an empty collection,
/// `>= 400` a backend-reported failure whose body is shown verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendResponse {
    pub status: u16,
    pub body: String,
}

impl BackendResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// `200 OK`
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// `204 No Content`: the backend's way of saying "empty collection".
    pub fn is_empty_collection(&self) -> bool {
        self.status == 204
    }

    /// Backend-reported failure.
    pub fn is_failure(&self) -> bool {
        self.status >= 400
    }

    /// Raw body text.
    pub fn text(&self) -> &str {
        &self.body
    }

    /// Decodes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Decodes the body as JSON, treating `204` as the empty value.
    pub fn json_or_empty<T: DeserializeOwned + Default>(&self) -> Result<T> {
        if self.is_empty_collection() {
            return Ok(T::default());
        }
        self.json()
    }
}

/// Client for the control-plane API.
///
/// One call per invocation: no retries, no timeout, no backoff.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    /// Performs the call and returns status plus body.
    ///
    /// # Returns
    ///
    /// - `Ok(BackendResponse)`: the backend answered, whatever the status
    /// - `Err(PanelError::Backend)`: the backend could not be reached
    async fn send(&self, request: BackendRequest) -> Result<BackendResponse>;
}
