mod common;

use common::{MockBackend, ctx_value, user};
use panel_application::templates;
use panel_application::views::auth;
use panel_core::backend::{Method, RequestBody};
use panel_core::forms::{ChangePasswordForm, LoginForm};
use panel_core::session::Session;
use serde_json::json;

fn credentials() -> LoginForm {
    LoginForm {
        email: "admin@example.com".to_string(),
        password: "secret".to_string(),
    }
}

#[tokio::test]
async fn test_login_stores_bearer_token() {
    let (backend, ctx) = MockBackend::new()
        .respond(
            Method::Post,
            "/users/admin%40example.com/tokens",
            200,
            r#"{"token": "abc123", "is_admin": true}"#,
        )
        .into_context();

    let result = auth::login(&ctx, credentials()).await.unwrap();

    assert_eq!(result.outcome.location(), Some("/apps/"));
    assert_eq!(
        result.session,
        Some(Session::authenticated("bearer abc123", true))
    );
    let requests = backend.requests();
    assert_eq!(requests[0].authorization.value(), None);
    assert_eq!(requests[0].body, RequestBody::Json(json!({"password": "secret"})));
}

#[tokio::test]
async fn test_login_failure_keeps_session() {
    let (_backend, ctx) = MockBackend::new()
        .respond(
            Method::Post,
            "/users/admin%40example.com/tokens",
            401,
            "Authentication failed, wrong password.",
        )
        .into_context();

    let result = auth::login(&ctx, credentials()).await.unwrap();

    assert!(result.session.is_none());
    assert_eq!(result.outcome.template_name(), Some(templates::LOGIN));
    let context = result.outcome.context().unwrap();
    assert_eq!(
        ctx_value(context, "errors"),
        "Authentication failed, wrong password."
    );
    assert!(ctx_value(context, "form")["data"].get("password").is_none());
}

#[tokio::test]
async fn test_login_requires_fields() {
    let (backend, ctx) = MockBackend::new().into_context();
    let result = auth::login(&ctx, LoginForm::default()).await.unwrap();
    assert!(result.session.is_none());
    assert!(backend.requests().is_empty());
}

#[test]
fn test_logout_clears_session() {
    let result = auth::logout();
    assert_eq!(result.outcome.location(), Some("/auth/login/"));
    assert_eq!(result.session, Some(Session::default()));
}

#[test]
fn test_change_password_get() {
    let outcome = auth::change_password_form().unwrap();
    assert_eq!(outcome.template_name(), Some(templates::CHANGE_PASSWORD));
}

#[tokio::test]
async fn test_change_password() {
    let (backend, ctx) = MockBackend::new()
        .respond(Method::Put, "/users/password", 200, "")
        .into_context();
    let form = ChangePasswordForm {
        old: "old".to_string(),
        new: "new".to_string(),
        confirm: "new".to_string(),
    };

    let outcome = auth::change_password(&ctx, &user(), form).await.unwrap();

    assert_eq!(
        ctx_value(outcome.context().unwrap(), "message"),
        auth::PASSWORD_CHANGED_MESSAGE
    );
    let requests = backend.requests();
    assert_eq!(requests[0].authorization.value(), Some("bearer user-token"));
    assert_eq!(
        requests[0].body,
        RequestBody::Json(json!({"old": "old", "new": "new"}))
    );
}

#[tokio::test]
async fn test_change_password_mismatch_skips_backend() {
    let (backend, ctx) = MockBackend::new().into_context();
    let form = ChangePasswordForm {
        old: "old".to_string(),
        new: "new".to_string(),
        confirm: "other".to_string(),
    };
    let outcome = auth::change_password(&ctx, &user(), form).await.unwrap();
    assert!(ctx_value(outcome.context().unwrap(), "form")["errors"]["confirm"].is_array());
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn test_change_password_shows_backend_error() {
    let (_backend, ctx) = MockBackend::new()
        .respond(Method::Put, "/users/password", 403, "the given password didn't match")
        .into_context();
    let form = ChangePasswordForm {
        old: "wrong".to_string(),
        new: "new".to_string(),
        confirm: "new".to_string(),
    };
    let outcome = auth::change_password(&ctx, &user(), form).await.unwrap();
    let context = outcome.context().unwrap();
    assert_eq!(
        ctx_value(context, "errors"),
        "the given password didn't match"
    );
    assert!(!context.contains_key("message"));
}
