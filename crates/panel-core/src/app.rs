//! Application records as returned by the control-plane API.
//!
//! Only the fields the dashboard reads or rewrites are typed; everything else
//! the backend sends is carried through untouched in `extra` so templates see
//! the full payload.

use crate::service::ServiceInstance;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An application, sourced entirely from the backend and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct App {
    pub name: String,
    #[serde(default)]
    pub units: Vec<Unit>,
    /// Filled by the detail view from `/services/instances`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_instances: Option<Vec<ServiceInstance>>,
    /// Filled by the detail and metrics views from `/apps/{name}/env`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub envs: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl App {
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }
}

/// Name-only application reference for views that never fetch the app itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppRef {
    pub name: String,
}

impl AppRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// One running instance of a deployed application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "HostAddr", default, skip_serializing_if = "Option::is_none")]
    pub host_addr: Option<Value>,
    #[serde(rename = "HostPort", default, skip_serializing_if = "Option::is_none")]
    pub host_port: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Container placement as reported by the docker node endpoint (admin only).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Container {
    #[serde(rename = "ID", default)]
    pub id: String,
    #[serde(rename = "HostAddr", default)]
    pub host_addr: Option<Value>,
    #[serde(rename = "HostPort", default)]
    pub host_port: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Platform entry from `GET /platforms`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Platform {
    #[serde(rename = "Name")]
    pub name: String,
}

/// Team entry from `GET /teams`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Team {
    pub name: String,
}

/// Orders an app listing by name.
pub fn sort_apps_by_name(apps: &mut [App]) {
    apps.sort_by(|a, b| a.name.cmp(&b.name));
}
