//! Form payloads submitted by the dashboard pages.
//!
//! Validation runs before any backend call; a failing form is re-rendered with
//! its submitted values and the per-field messages.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const REQUIRED: &str = "This field is required.";

/// Field name to error messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    fn require(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.add(field, REQUIRED);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

/// Something a page can validate before talking to the backend.
pub trait Form {
    fn validate(&self) -> Result<(), FieldErrors>;
}

/// New application: name and platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub platform: String,
}

impl Form for AppForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name);
        errors.require("platform", &self.platform);
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppAddTeamForm {
    #[serde(default)]
    pub team: String,
}

impl Form for AppAddTeamForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("team", &self.team);
        errors.into_result()
    }
}

/// One-off command run inside an app's units.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunForm {
    #[serde(default)]
    pub app: String,
    #[serde(default)]
    pub command: String,
}

impl Form for RunForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("app", &self.app);
        errors.require("command", &self.command);
        errors.into_result()
    }
}

/// Environment assignment, `NAME=value`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetEnvForm {
    #[serde(default)]
    pub env: String,
}

impl Form for SetEnvForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("env", &self.env);
        if errors.is_empty() {
            match self.env.split_once('=') {
                Some((name, _)) if !name.trim().is_empty() => {}
                _ => errors.add("env", "Use the NAME=value format."),
            }
        }
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing)]
    pub password: String,
}

impl Form for LoginForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("email", &self.email);
        errors.require("password", &self.password);
        errors.into_result()
    }
}

/// Passwords are never echoed back into the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangePasswordForm {
    #[serde(default, skip_serializing)]
    pub old: String,
    #[serde(default, skip_serializing)]
    pub new: String,
    #[serde(default, skip_serializing)]
    pub confirm: String,
}

impl Form for ChangePasswordForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("old", &self.old);
        errors.require("new", &self.new);
        errors.require("confirm", &self.confirm);
        if errors.is_empty() && self.new != self.confirm {
            errors.add("confirm", "The two password fields didn't match.");
        }
        errors.into_result()
    }
}

/// A form together with its validation outcome, as handed to templates.
#[derive(Debug, Clone, Serialize)]
pub struct BoundForm<F: Serialize> {
    pub data: F,
    pub errors: FieldErrors,
}

impl<F: Form + Serialize> BoundForm<F> {
    /// An unsubmitted form.
    pub fn unbound(data: F) -> Self {
        Self {
            data,
            errors: FieldErrors::new(),
        }
    }

    /// Validates `data`, keeping the errors alongside it.
    pub fn bind(data: F) -> Self {
        let errors = data.validate().err().unwrap_or_default();
        Self { data, errors }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}
