use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("{0}")]
    Validation(String),

    #[error("Meal not found")]
    MealNotFound(usize),

    #[error("LLM output does not match the recipe schema: {0}")]
    InvalidLlmOutput(String),

    #[error("{0}")]
    Generation(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal server error")]
    InternalServerError,
}
