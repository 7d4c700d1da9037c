use crate::context::Context;
use panel_core::session::Session;

/// What a view decided to do with the request.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewOutcome {
    /// Render `template` with `context`.
    Render {
        template: &'static str,
        context: Context,
    },
    /// Redirect to a canonical page.
    Redirect(String),
    /// Pass a backend status and body through unchanged.
    Raw { status: u16, body: String },
    /// Plain-text 500.
    ServerError(String),
}

impl ViewOutcome {
    pub fn render(template: &'static str, context: Context) -> Self {
        Self::Render { template, context }
    }

    pub fn redirect(location: impl Into<String>) -> Self {
        Self::Redirect(location.into())
    }

    pub fn template_name(&self) -> Option<&'static str> {
        match self {
            Self::Render { template, .. } => Some(*template),
            _ => None,
        }
    }

    pub fn context(&self) -> Option<&Context> {
        match self {
            Self::Render { context, .. } => Some(context),
            _ => None,
        }
    }

    pub fn location(&self) -> Option<&str> {
        match self {
            Self::Redirect(location) => Some(location),
            _ => None,
        }
    }
}

/// Outcome of a view that replaces the session (login, logout).
#[derive(Debug, Clone, PartialEq)]
pub struct AuthOutcome {
    pub outcome: ViewOutcome,
    /// New session to persist; `None` leaves the current one alone.
    pub session: Option<Session>,
}

impl AuthOutcome {
    pub fn unchanged(outcome: ViewOutcome) -> Self {
        Self {
            outcome,
            session: None,
        }
    }

    pub fn replace(outcome: ViewOutcome, session: Session) -> Self {
        Self {
            outcome,
            session: Some(session),
        }
    }
}
