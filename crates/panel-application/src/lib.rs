//! Application layer for Panel.
//!
//! Views compose the session's authorization, one or more sequential backend
//! calls and the response shapers, then pick a template and its context. They
//! return a `ViewOutcome`; turning that into HTTP is the server's job.

pub mod context;
pub mod outcome;
pub mod routes;
pub mod templates;
pub mod views;

pub use context::{Context, ViewContext};
pub use outcome::{AuthOutcome, ViewOutcome};
pub use templates::Templates;
