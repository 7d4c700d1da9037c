//! Axum handlers: extract, call the view, map the outcome.

use crate::cookies::{read_session, write_session};
use crate::response::{error_response, outcome_response, respond};
use crate::state::AppState;
use axum::Form;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::SignedCookieJar;
use panel_application::routes;
use panel_application::views::{apps, auth, deploys, env, teams};
use panel_application::{AuthOutcome, ViewOutcome};
use panel_core::forms::{
    AppAddTeamForm, AppForm, ChangePasswordForm, LoginForm, RunForm, SetEnvForm,
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UnitsForm {
    #[serde(default)]
    pub units: String,
}

pub async fn index(State(state): State<AppState>) -> Response {
    outcome_response(ViewOutcome::redirect(routes::app_list()), &state.templates)
}

pub async fn list_apps(State(state): State<AppState>, jar: SignedCookieJar) -> Response {
    let session = read_session(&jar);
    respond(apps::list_apps(&state.views, &session).await, &state.templates)
}

pub async fn create_app_form(State(state): State<AppState>, jar: SignedCookieJar) -> Response {
    let session = read_session(&jar);
    respond(apps::create_app_form(&state.views, &session).await, &state.templates)
}

pub async fn create_app(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<AppForm>,
) -> Response {
    let session = read_session(&jar);
    respond(apps::create_app(&state.views, &session, form).await, &state.templates)
}

pub async fn remove_app(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(name): Path<String>,
) -> Response {
    let session = read_session(&jar);
    respond(apps::remove_app(&state.views, &session, &name).await, &state.templates)
}

pub async fn app_detail(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(name): Path<String>,
) -> Response {
    let session = read_session(&jar);
    respond(apps::app_detail(&state.views, &session, &name).await, &state.templates)
}

pub async fn change_units(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(name): Path<String>,
    Form(form): Form<UnitsForm>,
) -> Response {
    let session = read_session(&jar);
    respond(
        apps::change_units(&state.views, &session, &name, &form.units).await,
        &state.templates,
    )
}

pub async fn list_deploys(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(name): Path<String>,
    Query(query): Query<PageQuery>,
) -> Response {
    let session = read_session(&jar);
    respond(
        deploys::list_deploys(&state.views, &session, &name, query.page.as_deref()).await,
        &state.templates,
    )
}

pub async fn deploy_info(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path((name, deploy)): Path<(String, String)>,
) -> Response {
    let session = read_session(&jar);
    respond(
        deploys::deploy_info(&state.views, &session, &name, &deploy).await,
        &state.templates,
    )
}

pub async fn rollback(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path((name, image)): Path<(String, String)>,
) -> Response {
    let session = read_session(&jar);
    respond(
        deploys::rollback(&state.views, &session, &name, &image).await,
        &state.templates,
    )
}

pub async fn app_log(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(name): Path<String>,
) -> Response {
    let session = read_session(&jar);
    respond(apps::app_log(&state.views, &session, &name).await, &state.templates)
}

pub async fn metrics(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(name): Path<String>,
) -> Response {
    let session = read_session(&jar);
    respond(apps::metrics(&state.views, &session, &name).await, &state.templates)
}

pub async fn app_teams(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(name): Path<String>,
) -> Response {
    let session = read_session(&jar);
    respond(teams::app_teams(&state.views, &session, &name).await, &state.templates)
}

pub async fn add_team_form(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(name): Path<String>,
) -> Response {
    let session = read_session(&jar);
    respond(teams::add_team_form(&state.views, &session, &name).await, &state.templates)
}

pub async fn add_team(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(name): Path<String>,
    Form(form): Form<AppAddTeamForm>,
) -> Response {
    let session = read_session(&jar);
    respond(
        teams::add_team(&state.views, &session, &name, form).await,
        &state.templates,
    )
}

pub async fn revoke_team(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path((name, team)): Path<(String, String)>,
) -> Response {
    let session = read_session(&jar);
    respond(
        teams::revoke_team(&state.views, &session, &name, &team).await,
        &state.templates,
    )
}

pub async fn app_env(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(name): Path<String>,
) -> Response {
    let session = read_session(&jar);
    respond(env::app_env(&state.views, &session, &name).await, &state.templates)
}

pub async fn set_env(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(name): Path<String>,
    Form(form): Form<SetEnvForm>,
) -> Response {
    let session = read_session(&jar);
    respond(
        env::set_env(&state.views, &session, &name, form).await,
        &state.templates,
    )
}

pub async fn run_form(State(state): State<AppState>, jar: SignedCookieJar) -> Response {
    let session = read_session(&jar);
    respond(apps::run_form(&state.views, &session).await, &state.templates)
}

pub async fn run(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<RunForm>,
) -> Response {
    let session = read_session(&jar);
    respond(apps::run(&state.views, &session, form).await, &state.templates)
}

pub async fn login_form(State(state): State<AppState>) -> Response {
    respond(auth::login_form(), &state.templates)
}

/// Persists the replacement session, if any, alongside the response.
fn auth_response(state: &AppState, jar: SignedCookieJar, result: AuthOutcome) -> Response {
    let jar = match &result.session {
        Some(session) => write_session(jar, session),
        None => jar,
    };
    (jar, outcome_response(result.outcome, &state.templates)).into_response()
}

pub async fn login(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    match auth::login(&state.views, form).await {
        Ok(result) => auth_response(&state, jar, result),
        Err(e) => error_response(e),
    }
}

pub async fn logout(State(state): State<AppState>, jar: SignedCookieJar) -> Response {
    auth_response(&state, jar, auth::logout())
}

pub async fn change_password_form(State(state): State<AppState>) -> Response {
    respond(auth::change_password_form(), &state.templates)
}

pub async fn change_password(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<ChangePasswordForm>,
) -> Response {
    let session = read_session(&jar);
    respond(
        auth::change_password(&state.views, &session, form).await,
        &state.templates,
    )
}
