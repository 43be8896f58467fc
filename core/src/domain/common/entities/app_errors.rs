use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    Invalid(String),

    #[error("No text detected in the image.")]
    NoTextDetected,

    #[error("external service error: {0}")]
    ExternalServiceError(String),

    #[error("analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("internal server error")]
    InternalServerError,
}
