//! Per-request session state and the authorization header derived from it.

use serde::{Deserialize, Serialize};

/// Session key holding the control-plane token.
pub const TOKEN_KEY: &str = "tsuru_token";

/// Session key holding the admin flag.
pub const ADMIN_KEY: &str = "is_admin";

/// Header name the control-plane API reads the token from.
pub const AUTHORIZATION_HEADER: &str = "authorization";

/// Session state for a single inbound request.
///
/// Views only ever read it; login and logout produce a new `Session` which the
/// HTTP layer persists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token, forwarded verbatim.
    pub token: Option<String>,
    /// Whether the user may see container placement details.
    #[serde(default)]
    pub is_admin: bool,
}

impl Session {
    pub fn new(token: Option<String>, is_admin: bool) -> Self {
        Self { token, is_admin }
    }

    /// Builds a session for a freshly issued token.
    pub fn authenticated(token: impl Into<String>, is_admin: bool) -> Self {
        Self {
            token: Some(token.into()),
            is_admin,
        }
    }

    /// Returns the single-entry header mapping sent with every backend call.
    ///
    /// No validation happens here: an absent token yields `None`, and the
    /// backend is responsible for rejecting the request.
    pub fn authorization(&self) -> Authorization {
        Authorization(self.token.clone())
    }
}

/// `{authorization: <token-or-None>}`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Authorization(Option<String>);

impl Authorization {
    pub fn new(token: Option<String>) -> Self {
        Self(token)
    }

    /// Header name, always `authorization`.
    pub fn name(&self) -> &'static str {
        AUTHORIZATION_HEADER
    }

    /// Header value, `None` when the session carries no token.
    pub fn value(&self) -> Option<&str> {
        self.0.as_deref()
    }
}
