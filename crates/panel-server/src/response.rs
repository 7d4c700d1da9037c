//! `ViewOutcome` and `PanelError` to HTTP.

use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use panel_application::{Templates, ViewOutcome};
use panel_core::error::PanelError;

/// Renders or forwards a view's decision.
pub fn outcome_response(outcome: ViewOutcome, templates: &Templates) -> Response {
    match outcome {
        ViewOutcome::Render { template, context } => match templates.render(template, &context) {
            Ok(html) => Html(html).into_response(),
            Err(e) => error_response(e),
        },
        ViewOutcome::Redirect(location) => {
            (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
        }
        ViewOutcome::Raw { status, body } => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            (status, body).into_response()
        }
        ViewOutcome::ServerError(message) => {
            (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
        }
    }
}

/// Plain-text failure page; transport problems with the backend are a 502.
pub fn error_response(error: PanelError) -> Response {
    tracing::error!("Request failed: {}", error);
    let status = if error.is_backend() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, error.to_string()).into_response()
}

/// Shorthand for handlers: map a view result straight to a response.
pub fn respond(result: panel_core::Result<ViewOutcome>, templates: &Templates) -> Response {
    match result {
        Ok(outcome) => outcome_response(outcome, templates),
        Err(e) => error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use panel_application::Context;

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn templates() -> Templates {
        Templates::new().unwrap()
    }

    #[tokio::test]
    async fn test_render_is_html() {
        let context = Context::new().with("apps", &Vec::<String>::new()).unwrap();
        let outcome = ViewOutcome::render(panel_application::templates::APP_LIST, context);
        let response = outcome_response(outcome, &templates());
        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            response.headers()[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/html")
        );
        assert!(body_text(response).await.contains("No apps yet."));
    }

    #[test]
    fn test_redirect_is_302() {
        let response = outcome_response(ViewOutcome::redirect("/apps/"), &templates());
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[header::LOCATION], "/apps/");
    }

    #[tokio::test]
    async fn test_raw_passes_status_and_body() {
        let outcome = ViewOutcome::Raw {
            status: 401,
            body: "forbidden".to_string(),
        };
        let response = outcome_response(outcome, &templates());
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_text(response).await, "forbidden");
    }

    #[tokio::test]
    async fn test_server_error() {
        let response = outcome_response(ViewOutcome::ServerError("NOT OK".to_string()), &templates());
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, "NOT OK");
    }

    #[test]
    fn test_error_status() {
        assert_eq!(
            error_response(PanelError::backend("connection refused")).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            error_response(PanelError::internal("bad")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
