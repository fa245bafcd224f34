use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreprocessingError {
    #[error("Lemmatization error: {0}")]
    Lemmatization(String),
}

/// Result type alias for preprocessing operations
pub type Result<T> = std::result::Result<T, PreprocessingError>;
