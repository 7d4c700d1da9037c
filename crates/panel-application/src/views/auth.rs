//! Login, logout and password change.

use super::{segment, send};
use crate::context::{Context, ViewContext};
use crate::outcome::{AuthOutcome, ViewOutcome};
use crate::routes;
use crate::templates;
use panel_core::backend::BackendRequest;
use panel_core::error::Result;
use panel_core::forms::{BoundForm, ChangePasswordForm, LoginForm};
use panel_core::session::{Authorization, Session};
use serde::Deserialize;
use serde_json::json;

pub const PASSWORD_CHANGED_MESSAGE: &str = "Your password was successfully changed";

#[derive(Debug, Deserialize)]
struct IssuedToken {
    token: String,
    #[serde(default)]
    is_admin: bool,
}

/// `GET /auth/login/`
pub fn login_form() -> Result<ViewOutcome> {
    let context = Context::new().with("form", &BoundForm::unbound(LoginForm::default()))?;
    Ok(ViewOutcome::render(templates::LOGIN, context))
}

/// `POST /auth/login/`
///
/// Exchanges the credentials for a token. On success the new session carries
/// `bearer <token>` and the admin flag from the backend.
pub async fn login(ctx: &ViewContext, form: LoginForm) -> Result<AuthOutcome> {
    let form = BoundForm::bind(form);
    let mut context = Context::new().with("form", &form)?;
    if !form.is_valid() {
        return Ok(AuthOutcome::unchanged(ViewOutcome::render(templates::LOGIN, context)));
    }

    let email = form.data.email.trim();
    let path = format!("/users/{}/tokens", segment(email));
    let request = BackendRequest::post(path, &Authorization::default())
        .with_json(json!({ "password": form.data.password }));
    let response = send(ctx, request).await?;

    if !response.is_ok() {
        tracing::warn!(email = %email, status = response.status, "Login refused");
        context.insert("errors", response.text())?;
        return Ok(AuthOutcome::unchanged(ViewOutcome::render(templates::LOGIN, context)));
    }

    let issued: IssuedToken = response.json()?;
    tracing::info!(email = %email, is_admin = issued.is_admin, "Logged in");
    let session = Session::authenticated(format!("bearer {}", issued.token), issued.is_admin);
    Ok(AuthOutcome::replace(
        ViewOutcome::redirect(routes::app_list()),
        session,
    ))
}

/// `GET /auth/logout/`
pub fn logout() -> AuthOutcome {
    AuthOutcome::replace(ViewOutcome::redirect(routes::login()), Session::default())
}

/// `GET /auth/change-password/`
pub fn change_password_form() -> Result<ViewOutcome> {
    let context =
        Context::new().with("form", &BoundForm::unbound(ChangePasswordForm::default()))?;
    Ok(ViewOutcome::render(templates::CHANGE_PASSWORD, context))
}

/// `POST /auth/change-password/`
pub async fn change_password(
    ctx: &ViewContext,
    session: &Session,
    form: ChangePasswordForm,
) -> Result<ViewOutcome> {
    let form = BoundForm::bind(form);
    let mut context = Context::new().with("form", &form)?;
    if !form.is_valid() {
        return Ok(ViewOutcome::render(templates::CHANGE_PASSWORD, context));
    }

    let request = BackendRequest::put("/users/password", &session.authorization())
        .with_json(json!({ "old": form.data.old, "new": form.data.new }));
    let response = send(ctx, request).await?;

    if response.is_ok() {
        tracing::info!("Password changed");
        context.insert("message", PASSWORD_CHANGED_MESSAGE)?;
    } else {
        context.insert("errors", response.text())?;
    }
    Ok(ViewOutcome::render(templates::CHANGE_PASSWORD, context))
}
