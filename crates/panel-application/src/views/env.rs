//! Environment variables of an application.
//!
//! The backend's env listing is shown as raw lines, one assignment per line.

use super::{get, segment, send};
use crate::context::{Context, ViewContext};
use crate::outcome::ViewOutcome;
use crate::templates;
use panel_core::backend::{BackendRequest, BackendResponse};
use panel_core::error::Result;
use panel_core::forms::{BoundForm, SetEnvForm};
use panel_core::session::{Authorization, Session};

fn env_path(app_name: &str) -> String {
    format!("/apps/{}/env", segment(app_name))
}

fn env_lines(response: &BackendResponse) -> Vec<String> {
    response.text().split('\n').map(str::to_string).collect()
}

async fn get_envs(ctx: &ViewContext, app_name: &str, auth: &Authorization) -> Result<BackendResponse> {
    get(ctx, &env_path(app_name), auth).await
}

/// `GET /apps/{name}/env/`
pub async fn app_env(ctx: &ViewContext, session: &Session, app_name: &str) -> Result<ViewOutcome> {
    let auth = session.authorization();
    let response = get_envs(ctx, app_name, &auth).await?;

    if !response.is_ok() {
        let context = Context::new().with("errors", response.text())?;
        return Ok(ViewOutcome::render(templates::APP_ENV, context));
    }

    let context = Context::new()
        .with("app", app_name)?
        .with("form", &BoundForm::unbound(SetEnvForm::default()))?
        .with("envs", &env_lines(&response))?;
    Ok(ViewOutcome::render(templates::APP_ENV, context))
}

/// `POST /apps/{name}/env/`
///
/// Reads the current listing first; the new assignment is only sent when that
/// read succeeded and the form is valid.
pub async fn set_env(
    ctx: &ViewContext,
    session: &Session,
    app_name: &str,
    form: SetEnvForm,
) -> Result<ViewOutcome> {
    let auth = session.authorization();
    let mut context = Context::new().with("app", app_name)?;

    let mut response = get_envs(ctx, app_name, &auth).await?;
    if response.is_ok() {
        let form = BoundForm::bind(form);
        context.insert("form", &form)?;
        if !form.is_valid() {
            return Ok(ViewOutcome::render(templates::APP_ENV, context));
        }

        let mut envs = env_lines(&response);
        envs.push(form.data.env.clone());
        context.insert("envs", &envs)?;

        let request = BackendRequest::post(env_path(app_name), &auth).with_text(form.data.env.clone());
        response = send(ctx, request).await?;

        if response.is_ok() {
            tracing::info!(app = %app_name, "Environment updated");
            context.insert("message", response.text())?;
            return Ok(ViewOutcome::render(templates::APP_ENV, context));
        }
    }

    context.insert("errors", response.text())?;
    Ok(ViewOutcome::render(templates::APP_ENV, context))
}
