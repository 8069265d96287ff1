use thiserror::Error;

/// Errors raised around the prompt core
///
/// Building a prompt never fails; these cover registry maintenance,
/// multi-axis collapsing and catalog lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PromptError {
    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Template already registered: {0}")]
    DuplicateTemplate(String),

    #[error("Multi-axis template {0} must have at least one axis")]
    NoAxes(String),

    #[error("Unknown model provider: {0}")]
    UnknownProvider(String),
}

pub type PromptResult<T> = Result<T, PromptError>;
