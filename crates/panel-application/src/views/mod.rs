//! View Dispatcher: one async function per dashboard route.
//!
//! Every view reads the session's authorization, issues its backend calls one
//! after another, shapes the payload and returns a `ViewOutcome`. GET views
//! never mutate; POST-style views issue exactly one mutating call and then
//! either re-render or redirect.

pub mod apps;
pub mod auth;
pub mod deploys;
pub mod env;
pub mod teams;

use crate::context::ViewContext;
use crate::outcome::ViewOutcome;
use panel_core::backend::{BackendRequest, BackendResponse};
use panel_core::error::Result;
use panel_core::session::Authorization;
use serde::de::DeserializeOwned;
use std::borrow::Cow;

/// Percent-encodes one user-supplied path or query segment.
fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

async fn send(ctx: &ViewContext, request: BackendRequest) -> Result<BackendResponse> {
    ctx.backend.send(request).await
}

async fn get(ctx: &ViewContext, path: &str, auth: &Authorization) -> Result<BackendResponse> {
    send(ctx, BackendRequest::get(path, auth)).await
}

/// Fetches a secondary listing that should never break the page.
///
/// `204` and backend-reported failures both read as the empty value; the
/// failure is logged.
async fn get_or_default<T>(ctx: &ViewContext, path: &str, auth: &Authorization) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let response = get(ctx, path, auth).await?;
    if response.is_failure() {
        tracing::warn!(
            path,
            status = response.status,
            "Backend refused secondary fetch: {}",
            response.text()
        );
        return Ok(T::default());
    }
    response.json_or_empty()
}

/// Fetches a page's primary payload.
///
/// A backend-reported failure comes back as `Ok(Err(response))` so the view can
/// show the body verbatim; `204` reads as the empty value.
async fn fetch<T>(
    ctx: &ViewContext,
    path: &str,
    auth: &Authorization,
) -> Result<std::result::Result<T, BackendResponse>>
where
    T: DeserializeOwned + Default,
{
    let response = get(ctx, path, auth).await?;
    if response.is_failure() {
        tracing::warn!(path, status = response.status, "Backend refused fetch");
        return Ok(Err(response));
    }
    Ok(Ok(response.json_or_empty()?))
}

/// Passes a backend failure through with its status and body unchanged.
fn passthrough(response: BackendResponse) -> ViewOutcome {
    ViewOutcome::Raw {
        status: response.status,
        body: response.body,
    }
}
