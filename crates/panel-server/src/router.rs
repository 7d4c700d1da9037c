use crate::handlers;
use crate::middleware::request_tracing_middleware;
use crate::state::AppState;
use axum::Router;
use axum::middleware::from_fn;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/apps/", get(handlers::list_apps))
        .route(
            "/apps/create/",
            get(handlers::create_app_form).post(handlers::create_app),
        )
        .route("/apps/run/", get(handlers::run_form).post(handlers::run))
        .route("/apps/:name/", get(handlers::app_detail))
        .route("/apps/:name/remove/", get(handlers::remove_app))
        .route("/apps/:name/units/", post(handlers::change_units))
        .route("/apps/:name/deploys/", get(handlers::list_deploys))
        .route("/apps/:name/deploys/:deploy/", get(handlers::deploy_info))
        .route("/apps/:name/rollback/:image/", get(handlers::rollback))
        .route("/apps/:name/log/", get(handlers::app_log))
        .route("/apps/:name/metrics/", get(handlers::metrics))
        .route("/apps/:name/teams/", get(handlers::app_teams))
        .route(
            "/apps/:name/teams/add/",
            get(handlers::add_team_form).post(handlers::add_team),
        )
        .route("/apps/:name/teams/:team/remove/", get(handlers::revoke_team))
        .route(
            "/apps/:name/env/",
            get(handlers::app_env).post(handlers::set_env),
        )
        .route(
            "/auth/login/",
            get(handlers::login_form).post(handlers::login),
        )
        .route("/auth/logout/", get(handlers::logout))
        .route(
            "/auth/change-password/",
            get(handlers::change_password_form).post(handlers::change_password),
        )
        .layer(TraceLayer::new_for_http())
        .layer(from_fn(request_tracing_middleware))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::signing_key;
    use panel_application::{Templates, ViewContext};
    use panel_infrastructure::HttpBackend;
    use std::sync::Arc;

    #[test]
    fn test_route_table_builds() {
        let views = ViewContext::new(Arc::new(HttpBackend::new("http://127.0.0.1:1")));
        let state = AppState::new(views, Templates::new().unwrap(), signing_key(None));
        let _router = build_router(state);
    }
}
