use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The caller sent an empty or missing image/text payload.
    #[error("{0}")]
    MissingInput(String),

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    /// OCR returned nothing usable.
    #[error("Could not extract text from image")]
    ExtractionFailed,

    #[error("{0}")]
    ExternalServiceError(String),

    /// The analysis model replied with something that is not JSON.
    #[error("Failed to parse analysis response: {0}")]
    MalformedAnalysis(String),

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    /// Whether the error was caused by the request itself rather than a downstream failure.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            CoreError::MissingInput(_) | CoreError::InvalidImage(_) | CoreError::ExtractionFailed
        )
    }
}
