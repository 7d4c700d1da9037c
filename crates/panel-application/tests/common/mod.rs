//! Shared test doubles for view tests.

#![allow(dead_code)]

use async_trait::async_trait;
use panel_application::{Context, ViewContext};
use panel_core::backend::{Backend, BackendRequest, BackendResponse, Method};
use panel_core::error::Result;
use panel_core::session::Session;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Backend double: canned responses per `(method, path)`, every request logged.
///
/// Unregistered routes answer `404 not found`.
pub struct MockBackend {
    responses: Mutex<HashMap<(Method, String), BackendResponse>>,
    requests: Mutex<Vec<BackendRequest>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn respond(self, method: Method, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert((method, path.to_string()), BackendResponse::new(status, body));
        self
    }

    pub fn requests(&self) -> Vec<BackendRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn mutating_requests(&self) -> Vec<BackendRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method.is_mutating())
            .collect()
    }

    pub fn into_context(self) -> (Arc<MockBackend>, ViewContext) {
        let backend = Arc::new(self);
        let ctx = ViewContext::new(backend.clone());
        (backend, ctx)
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn send(&self, request: BackendRequest) -> Result<BackendResponse> {
        let key = (request.method, request.path.clone());
        self.requests.lock().unwrap().push(request);
        let response = self
            .responses
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_else(|| BackendResponse::new(404, "not found"));
        Ok(response)
    }
}

pub fn admin() -> Session {
    Session::authenticated("admin", true)
}

pub fn user() -> Session {
    Session::authenticated("bearer user-token", false)
}

pub fn ctx_value<'a>(context: &'a Context, key: &str) -> &'a serde_json::Value {
    context
        .get(key)
        .unwrap_or_else(|| panic!("missing context key {}", key))
}
