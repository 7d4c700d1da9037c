//! HTTP surface for Panel.
//!
//! Maps dashboard routes onto the application views, persists the session in
//! signed cookies and turns each `ViewOutcome` into an HTTP response.

pub mod cookies;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod response;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
