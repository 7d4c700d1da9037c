//! Service bindings attached to an application.

use serde::{Deserialize, Serialize};

/// Entry of `GET /services/instances?app={name}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    pub service: String,
    #[serde(default)]
    pub instances: Vec<String>,
}

/// Flattened binding shown on the app detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInstance {
    pub name: String,
    pub servicename: String,
}
