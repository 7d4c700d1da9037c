//! Team access management for an application.

use super::{get, get_or_default, passthrough, segment, send};
use crate::context::{Context, ViewContext};
use crate::outcome::ViewOutcome;
use crate::routes;
use crate::templates;
use panel_core::app::{App, Team};
use panel_core::backend::BackendRequest;
use panel_core::error::Result;
use panel_core::forms::{AppAddTeamForm, BoundForm};
use panel_core::session::Session;

pub const TEAM_ADDED_MESSAGE: &str = "The Team was successfully added";

/// `GET /apps/{name}/teams/`
pub async fn app_teams(ctx: &ViewContext, session: &Session, app_name: &str) -> Result<ViewOutcome> {
    let auth = session.authorization();
    let response = get(ctx, &format!("/apps/{}", segment(app_name)), &auth).await?;

    let context = if response.is_ok() {
        let app: App = response.json()?;
        Context::new().with("app", &app)?
    } else {
        Context::new().with("errors", response.text())?
    };
    Ok(ViewOutcome::render(templates::APP_TEAMS, context))
}

/// `GET /apps/{name}/teams/add/`
pub async fn add_team_form(ctx: &ViewContext, session: &Session, app_name: &str) -> Result<ViewOutcome> {
    let auth = session.authorization();
    let teams: Vec<Team> = get_or_default(ctx, "/teams", &auth).await?;
    let team_names: Vec<String> = teams.into_iter().map(|t| t.name).collect();

    let context = Context::new()
        .with("app_name", app_name)?
        .with("form", &BoundForm::unbound(AppAddTeamForm::default()))?
        .with("teams", &team_names)?;
    Ok(ViewOutcome::render(templates::APP_ADD_TEAM, context))
}

/// `POST /apps/{name}/teams/add/`
pub async fn add_team(
    ctx: &ViewContext,
    session: &Session,
    app_name: &str,
    form: AppAddTeamForm,
) -> Result<ViewOutcome> {
    let form = BoundForm::bind(form);
    let mut context = Context::new()
        .with("form", &form)?
        .with("app_name", app_name)?;
    if !form.is_valid() {
        return Ok(ViewOutcome::render(templates::APP_ADD_TEAM, context));
    }

    let auth = session.authorization();
    let path = format!("/apps/{}/{}", segment(app_name), segment(form.data.team.trim()));
    let response = send(ctx, BackendRequest::put(path, &auth)).await?;

    if response.is_ok() {
        tracing::info!(app = %app_name, team = %form.data.team, "Team granted");
        context.insert("message", TEAM_ADDED_MESSAGE)?;
    } else {
        context.insert("errors", response.text())?;
    }
    Ok(ViewOutcome::render(templates::APP_ADD_TEAM, context))
}

/// `GET /apps/{name}/teams/{team}/remove/`
///
/// A refused revoke is passed through with the backend's status.
pub async fn revoke_team(
    ctx: &ViewContext,
    session: &Session,
    app_name: &str,
    team: &str,
) -> Result<ViewOutcome> {
    let auth = session.authorization();
    let response = send(
        ctx,
        BackendRequest::delete(format!("/apps/{}/{}", segment(app_name), segment(team)), &auth),
    )
    .await?;
    if response.is_failure() {
        tracing::warn!(
            app = %app_name,
            team = %team,
            status = response.status,
            "Team revoke refused"
        );
        return Ok(passthrough(response));
    }
    Ok(ViewOutcome::redirect(routes::app_teams(app_name)))
}
