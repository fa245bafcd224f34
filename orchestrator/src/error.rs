use inference::InferenceError;
use reviewlens_preprocessing::PreprocessingError;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Input text is empty")]
    EmptyInput,

    #[error("Input text is {length} characters, limit is {max}")]
    InputTooLong { length: usize, max: usize },

    #[error("Preprocessing failed: {0}")]
    Preprocessing(#[from] PreprocessingError),

    #[error("Inference failed: {0}")]
    Inference(#[from] InferenceError),

    #[error("Result assembly failed: {message}")]
    Assembly { message: String },

    #[error("Analysis timed out after {after:?} ({attempts} attempts)")]
    Timeout { after: Duration, attempts: u32 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PipelineError {
    pub fn assembly(message: impl Into<String>) -> Self {
        Self::Assembly {
            message: message.into(),
        }
    }

    /// Only timeouts are worth retrying; every other failure repeats.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;
