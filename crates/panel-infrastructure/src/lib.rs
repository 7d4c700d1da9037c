pub mod config_service;
pub mod http_backend;
pub mod paths;

pub use crate::config_service::ConfigService;
pub use crate::http_backend::HttpBackend;
pub use crate::paths::PanelPaths;
