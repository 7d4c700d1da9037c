//! Deploy history, deploy detail and rollback.

use super::{fetch, get, segment, send};
use crate::context::{Context, ViewContext};
use crate::outcome::ViewOutcome;
use crate::routes;
use crate::templates;
use panel_core::app::AppRef;
use panel_core::backend::BackendRequest;
use panel_core::deploy::Deploy;
use panel_core::error::Result;
use panel_core::session::Session;
use panel_core::shaping::{PAGE_SIZE, Paginator};
use serde_json::Value;

/// `GET /apps/{name}/deploys/?page=N`
pub async fn list_deploys(
    ctx: &ViewContext,
    session: &Session,
    app_name: &str,
    page: Option<&str>,
) -> Result<ViewOutcome> {
    let auth = session.authorization();
    let response = get(ctx, &format!("/deploys?app={}", segment(app_name)), &auth).await?;

    let mut context = Context::new();
    let deploys: Vec<Value> = if response.is_failure() {
        context.insert("errors", response.text())?;
        Vec::new()
    } else {
        response.json_or_empty()?
    };

    let paginator = Paginator::new(deploys, PAGE_SIZE);
    let page = paginator.page_from_param(page);

    context.insert("deploys", &page)?;
    context.insert("paginator", &paginator.info())?;
    context.insert("is_paginated", &true)?;
    context.insert("app", &AppRef::new(app_name))?;
    Ok(ViewOutcome::render(templates::APP_DEPLOYS, context))
}

/// `GET /apps/{name}/deploys/{id}/`
pub async fn deploy_info(
    ctx: &ViewContext,
    session: &Session,
    app_name: &str,
    deploy_id: &str,
) -> Result<ViewOutcome> {
    let auth = session.authorization();
    let context = Context::new().with("app", &AppRef::new(app_name))?;
    let path = format!("/deploys/{}", segment(deploy_id));
    let context = match fetch::<Deploy>(ctx, &path, &auth).await? {
        Ok(deploy) => context.with("deploy", &deploy.highlighted())?,
        Err(response) => context.with("errors", response.text())?,
    };
    Ok(ViewOutcome::render(templates::APP_DEPLOY, context))
}

/// `GET /apps/{name}/rollback/{image}/`
pub async fn rollback(
    ctx: &ViewContext,
    session: &Session,
    app_name: &str,
    image: &str,
) -> Result<ViewOutcome> {
    let auth = session.authorization();
    let request = BackendRequest::post(format!("/apps/{}/deploy/rollback", segment(app_name)), &auth)
        .with_form(vec![("image".to_string(), image.to_string())]);
    let response = send(ctx, request).await?;

    if response.is_ok() {
        tracing::info!(app = %app_name, image = %image, "Rolled back");
        return Ok(ViewOutcome::redirect(routes::app_deploys(app_name)));
    }
    tracing::warn!(
        app = %app_name,
        status = response.status,
        "Rollback refused: {}",
        response.text()
    );
    Ok(ViewOutcome::ServerError("NOT OK".to_string()))
}
