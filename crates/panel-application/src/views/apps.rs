//! Application pages: listing, creation, removal, detail, scaling, logs,
//! metrics and one-off commands.

use super::{fetch, get, get_or_default, passthrough, segment, send};
use crate::context::{Context, ViewContext};
use crate::outcome::ViewOutcome;
use crate::routes;
use crate::templates;
use panel_core::app::{App, Container, Platform, sort_apps_by_name};
use panel_core::backend::{BackendRequest, BackendResponse};
use panel_core::error::Result;
use panel_core::forms::{AppForm, BoundForm, RunForm};
use panel_core::service::ServiceDescriptor;
use panel_core::session::{Authorization, Session};
use panel_core::shaping::{flatten_service_instances, merge_containers};
use serde_json::Value;

pub const CREATED_MESSAGE: &str = "App was successfully created";

fn app_path(app_name: &str) -> String {
    format!("/apps/{}", segment(app_name))
}

async fn fetch_app(
    ctx: &ViewContext,
    app_name: &str,
    auth: &Authorization,
) -> Result<std::result::Result<App, BackendResponse>> {
    fetch(ctx, &app_path(app_name), auth).await
}

/// Renders `template` with only the backend's failure body.
fn errors_page(template: &'static str, response: &BackendResponse) -> Result<ViewOutcome> {
    let context = Context::new().with("errors", response.text())?;
    Ok(ViewOutcome::render(template, context))
}

async fn platform_names(ctx: &ViewContext, auth: &Authorization) -> Result<Vec<String>> {
    let platforms: Vec<Platform> = get_or_default(ctx, "/platforms", auth).await?;
    Ok(platforms.into_iter().map(|p| p.name).collect())
}

async fn app_names(ctx: &ViewContext, auth: &Authorization) -> Result<Vec<String>> {
    let apps: Vec<App> = get_or_default(ctx, "/apps", auth).await?;
    Ok(apps.into_iter().map(|a| a.name).collect())
}

/// `GET /apps/`
pub async fn list_apps(ctx: &ViewContext, session: &Session) -> Result<ViewOutcome> {
    let auth = session.authorization();
    let response = get(ctx, "/apps", &auth).await?;

    let mut context = Context::new();
    if response.is_failure() {
        context.insert("apps", &Vec::<App>::new())?;
        context.insert("errors", response.text())?;
        return Ok(ViewOutcome::render(templates::APP_LIST, context));
    }

    let mut apps: Vec<App> = response.json_or_empty()?;
    sort_apps_by_name(&mut apps);
    context.insert("apps", &apps)?;
    Ok(ViewOutcome::render(templates::APP_LIST, context))
}

/// `GET /apps/create/`
pub async fn create_app_form(ctx: &ViewContext, session: &Session) -> Result<ViewOutcome> {
    let auth = session.authorization();
    let context = Context::new()
        .with("app_form", &BoundForm::unbound(AppForm::default()))?
        .with("platforms", &platform_names(ctx, &auth).await?)?;
    Ok(ViewOutcome::render(templates::APP_CREATE, context))
}

/// `POST /apps/create/`
pub async fn create_app(ctx: &ViewContext, session: &Session, form: AppForm) -> Result<ViewOutcome> {
    let auth = session.authorization();
    let form = BoundForm::bind(form);
    let mut context = Context::new();

    if form.is_valid() {
        let body = serde_json::to_value(&form.data)?;
        let response = send(ctx, BackendRequest::post("/apps", &auth).with_json(body)).await?;
        if response.is_ok() {
            tracing::info!(app = %form.data.name, "App created");
            context.insert("message", CREATED_MESSAGE)?;
        } else {
            context.insert("errors", response.text())?;
        }
    }

    context.insert("platforms", &platform_names(ctx, &auth).await?)?;
    context.insert("app_form", &form)?;
    Ok(ViewOutcome::render(templates::APP_CREATE, context))
}

/// `GET /apps/{name}/remove/`
pub async fn remove_app(ctx: &ViewContext, session: &Session, app_name: &str) -> Result<ViewOutcome> {
    let auth = session.authorization();
    let response = send(ctx, BackendRequest::delete(app_path(app_name), &auth)).await?;
    if response.is_failure() {
        return Ok(passthrough(response));
    }
    tracing::info!(app = %app_name, "App removed");
    Ok(ViewOutcome::redirect(routes::app_list()))
}

/// `GET /apps/{name}/`
///
/// Fetches the app, its service bindings, its environment and (for admins)
/// its containers, then folds them into one record.
pub async fn app_detail(ctx: &ViewContext, session: &Session, app_name: &str) -> Result<ViewOutcome> {
    let auth = session.authorization();
    let mut app = match fetch_app(ctx, app_name, &auth).await? {
        Ok(app) => app,
        Err(response) => return errors_page(templates::APP_DETAIL, &response),
    };

    let services: Vec<ServiceDescriptor> = get_or_default(
        ctx,
        &format!("/services/instances?app={}", segment(app_name)),
        &auth,
    )
    .await?;
    app.service_instances = Some(flatten_service_instances(&services));

    let envs: Value = get_or_default(ctx, &format!("{}/env", app_path(app_name)), &auth).await?;
    app.envs = Some(envs);

    let containers: Vec<Container> = if session.is_admin {
        get_or_default(
            ctx,
            &format!("/docker/node/apps/{}/containers", segment(app_name)),
            &auth,
        )
        .await?
    } else {
        Vec::new()
    };
    merge_containers(&mut app.units, &containers);

    let context = Context::new().with("app", &app)?;
    Ok(ViewOutcome::render(templates::APP_DETAIL, context))
}

/// `POST /apps/{name}/units/`
///
/// Scales the app to the requested unit count by adding or removing the
/// difference, then returns to the detail page. Backend failures pass through
/// with their status.
pub async fn change_units(
    ctx: &ViewContext,
    session: &Session,
    app_name: &str,
    units: &str,
) -> Result<ViewOutcome> {
    let Ok(wanted) = units.trim().parse::<usize>() else {
        return Ok(ViewOutcome::Raw {
            status: 400,
            body: format!("Invalid number of units: {}", units),
        });
    };

    let auth = session.authorization();
    let current = match fetch_app(ctx, app_name, &auth).await? {
        Ok(app) => app.unit_count(),
        Err(response) => return Ok(passthrough(response)),
    };
    let units_path = format!("{}/units", app_path(app_name));

    let request = if current < wanted {
        let delta = wanted - current;
        tracing::info!(app = %app_name, delta, "Adding units");
        BackendRequest::put(&units_path, &auth).with_text(delta.to_string())
    } else if current > wanted {
        let delta = current - wanted;
        tracing::info!(app = %app_name, delta, "Removing units");
        BackendRequest::delete(&units_path, &auth).with_text(delta.to_string())
    } else {
        return Ok(ViewOutcome::redirect(routes::app_detail(app_name)));
    };

    let response = send(ctx, request).await?;
    if response.is_failure() {
        tracing::warn!(app = %app_name, status = response.status, "Scaling refused");
        return Ok(passthrough(response));
    }
    Ok(ViewOutcome::redirect(routes::app_detail(app_name)))
}

/// `GET /apps/{name}/log/`
pub async fn app_log(ctx: &ViewContext, session: &Session, app_name: &str) -> Result<ViewOutcome> {
    let auth = session.authorization();
    let app = match fetch_app(ctx, app_name, &auth).await? {
        Ok(app) => app,
        Err(response) => return errors_page(templates::APP_LOG, &response),
    };
    let logs = match fetch::<Value>(ctx, &format!("{}/log?lines=100", app_path(app_name)), &auth).await? {
        Ok(logs) => logs,
        Err(response) => return errors_page(templates::APP_LOG, &response),
    };

    let context = Context::new()
        .with("logs", &logs_or_empty(logs))?
        .with("app", &app)?;
    Ok(ViewOutcome::render(templates::APP_LOG, context))
}

fn logs_or_empty(logs: Value) -> Value {
    if logs.is_null() {
        Value::Array(Vec::new())
    } else {
        logs
    }
}

/// `GET /apps/{name}/metrics/`
pub async fn metrics(ctx: &ViewContext, session: &Session, app_name: &str) -> Result<ViewOutcome> {
    let auth = session.authorization();
    let mut app = match fetch_app(ctx, app_name, &auth).await? {
        Ok(app) => app,
        Err(response) => return errors_page(templates::APP_METRICS, &response),
    };
    let envs = match fetch::<Value>(ctx, &format!("{}/env", app_path(app_name)), &auth).await? {
        Ok(envs) => envs,
        Err(response) => return errors_page(templates::APP_METRICS, &response),
    };
    app.envs = Some(envs);

    let context = Context::new().with("app", &app)?;
    Ok(ViewOutcome::render(templates::APP_METRICS, context))
}

/// `GET /apps/run/`
pub async fn run_form(ctx: &ViewContext, session: &Session) -> Result<ViewOutcome> {
    let auth = session.authorization();
    let context = Context::new()
        .with("form", &BoundForm::unbound(RunForm::default()))?
        .with("apps", &app_names(ctx, &auth).await?)?;
    Ok(ViewOutcome::render(templates::APP_RUN, context))
}

/// `POST /apps/run/`
pub async fn run(ctx: &ViewContext, session: &Session, form: RunForm) -> Result<ViewOutcome> {
    let form = BoundForm::bind(form);
    let mut context = Context::new();
    if !form.is_valid() {
        context.insert("form", &form)?;
        return Ok(ViewOutcome::render(templates::APP_RUN, context));
    }

    let auth = session.authorization();
    let request = BackendRequest::post(format!("{}/run", app_path(&form.data.app)), &auth)
        .with_text(form.data.command.clone());
    let response = send(ctx, request).await?;

    context.insert("form", &form)?;
    if response.is_ok() {
        context.insert("message", response.text())?;
    } else {
        context.insert("errors", response.text())?;
    }
    Ok(ViewOutcome::render(templates::APP_RUN, context))
}
