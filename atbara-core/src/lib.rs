pub mod identity;
pub mod locale;
pub mod payment;
pub mod repository;
pub mod search;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Unknown city: {0}")]
    UnknownCity(String),
    #[error("Identity lookup failed: {0}")]
    IdentityError(String),
    #[error("Internal service error: {0}")]
    InternalError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
