use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use panel_application::{Templates, ViewContext};
use std::sync::Arc;

/// Shared per-process state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub views: ViewContext,
    pub templates: Arc<Templates>,
    /// Signs the session cookies.
    pub key: Key,
}

impl AppState {
    pub fn new(views: ViewContext, templates: Templates, key: Key) -> Self {
        Self {
            views,
            templates: Arc::new(templates),
            key,
        }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.key.clone()
    }
}

/// Minimum secret length accepted by [`signing_key`].
pub const MIN_SECRET_LEN: usize = 64;

/// Builds the cookie signing key from the configured secret.
///
/// Without a usable secret a random key is generated, so sessions do not
/// survive a restart.
pub fn signing_key(secret: Option<&str>) -> Key {
    match secret.map(str::as_bytes) {
        Some(bytes) if bytes.len() >= MIN_SECRET_LEN => Key::from(bytes),
        Some(_) => {
            tracing::warn!(
                "session_secret shorter than {} bytes, using a random signing key",
                MIN_SECRET_LEN
            );
            Key::generate()
        }
        None => {
            tracing::warn!("No session_secret configured, using a random signing key");
            Key::generate()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signing_key_is_stable_for_long_secret() {
        let secret = "s".repeat(MIN_SECRET_LEN);
        let a = signing_key(Some(&secret));
        let b = signing_key(Some(&secret));
        assert_eq!(a.master(), b.master());
    }

    #[test]
    fn test_short_secret_falls_back_to_random() {
        let a = signing_key(Some("short"));
        let b = signing_key(Some("short"));
        assert_ne!(a.master(), b.master());
    }
}
