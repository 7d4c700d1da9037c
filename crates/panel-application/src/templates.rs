//! Page templates.
//!
//! Templates are compiled into the binary and loaded into a minijinja
//! environment once at startup. Auto-escaping follows the `.html` suffix.

use crate::context::Context;
use minijinja::{Environment, UndefinedBehavior};
use panel_core::error::Result;

pub const APP_LIST: &str = "apps/list.html";
pub const APP_CREATE: &str = "apps/create.html";
pub const APP_DETAIL: &str = "apps/details.html";
pub const APP_DEPLOYS: &str = "apps/deploys.html";
pub const APP_DEPLOY: &str = "apps/deploy.html";
pub const APP_LOG: &str = "apps/app_log.html";
pub const APP_METRICS: &str = "apps/metrics.html";
pub const APP_TEAMS: &str = "apps/app_team.html";
pub const APP_ADD_TEAM: &str = "apps/app_add_team.html";
pub const APP_ENV: &str = "apps/app_env.html";
pub const APP_RUN: &str = "apps/run.html";
pub const LOGIN: &str = "auth/login.html";
pub const CHANGE_PASSWORD: &str = "auth/change_password.html";

const SOURCES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    (APP_LIST, include_str!("../templates/apps/list.html")),
    (APP_CREATE, include_str!("../templates/apps/create.html")),
    (APP_DETAIL, include_str!("../templates/apps/details.html")),
    (APP_DEPLOYS, include_str!("../templates/apps/deploys.html")),
    (APP_DEPLOY, include_str!("../templates/apps/deploy.html")),
    (APP_LOG, include_str!("../templates/apps/app_log.html")),
    (APP_METRICS, include_str!("../templates/apps/metrics.html")),
    (APP_TEAMS, include_str!("../templates/apps/app_team.html")),
    (APP_ADD_TEAM, include_str!("../templates/apps/app_add_team.html")),
    (APP_ENV, include_str!("../templates/apps/app_env.html")),
    (APP_RUN, include_str!("../templates/apps/run.html")),
    (LOGIN, include_str!("../templates/auth/login.html")),
    (CHANGE_PASSWORD, include_str!("../templates/auth/change_password.html")),
];

/// Compiled template set.
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Compiles every embedded template; a syntax error fails startup.
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        // Missing keys and attributes of missing values render as empty.
        env.set_undefined_behavior(UndefinedBehavior::Chainable);
        for &(name, source) in SOURCES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    pub fn render(&self, name: &str, context: &Context) -> Result<String> {
        let template = self.env.get_template(name)?;
        Ok(template.render(context)?)
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        SOURCES.iter().map(|(name, _)| *name)
    }
}
