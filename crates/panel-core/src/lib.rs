pub mod app;
pub mod backend;
pub mod config;
pub mod deploy;
pub mod error;
pub mod forms;
pub mod service;
pub mod session;
pub mod shaping;

// Re-export common types
pub use backend::{Backend, BackendRequest, BackendResponse, Method, RequestBody};
pub use error::{PanelError, Result};
pub use session::{Authorization, Session};
