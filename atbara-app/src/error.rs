use atbara_booking::{DashboardError, WizardError, WizardStep};
use atbara_core::CoreError;

use crate::context::AppContext;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Screen opened without what it needs; shown as a recovery view
    #[error("Missing precondition: {0}")]
    MissingPrecondition(String),

    #[error("Step {step} incomplete: {}", .missing.join(", "))]
    IncompleteInput {
        step: WizardStep,
        missing: Vec<&'static str>,
    },

    #[error("Access denied")]
    AccessDenied,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Message shown to the user, in the active locale
    pub fn render(&self, ctx: &AppContext) -> String {
        match self {
            AppError::MissingPrecondition(what) => {
                tracing::debug!(missing = %what, "Rendering recovery view");
                format!("{}. {}", ctx.t("no.train.selected"), ctx.t("back.to.search"))
            }
            AppError::IncompleteInput { missing, .. } => {
                let mut lines = Vec::new();
                let fields: Vec<String> = missing
                    .iter()
                    .filter(|key| !matches!(**key, "seat" | "agree.terms.conditions"))
                    .map(|key| ctx.t(key))
                    .collect();
                if !fields.is_empty() {
                    lines.push(format!("{}: {}", ctx.t("field.required"), fields.join(", ")));
                }
                if missing.contains(&"seat") {
                    lines.push(ctx.t("seat.required"));
                }
                if missing.contains(&"agree.terms.conditions") {
                    lines.push(ctx.t("terms.required"));
                }
                lines.join("\n")
            }
            AppError::AccessDenied => format!("{}: {}", ctx.t("access.denied"), ctx.t("no.permission")),
            AppError::NotFound(what) => format!("{}: {}", ctx.t("not.found"), what),
            AppError::Validation(msg) => msg.clone(),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal error".to_string()
            }
        }
    }
}

impl From<WizardError> for AppError {
    fn from(err: WizardError) -> Self {
        match err {
            WizardError::MissingPrecondition(what) => AppError::MissingPrecondition(what.to_string()),
            WizardError::IncompleteInput { step, missing } => AppError::IncompleteInput { step, missing },
            other => AppError::Validation(other.to_string()),
        }
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InternalError(msg) => AppError::Internal(msg),
            CoreError::IdentityError(msg) => AppError::NotFound(msg),
            other => AppError::Validation(other.to_string()),
        }
    }
}

impl From<DashboardError> for AppError {
    fn from(err: DashboardError) -> Self {
        match err {
            DashboardError::NotFound(reference) => AppError::NotFound(reference),
            other => AppError::Validation(other.to_string()),
        }
    }
}
