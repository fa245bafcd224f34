use thiserror::Error;

#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("Invalid lexicon: {0}")]
    InvalidLexicon(String),

    #[error("Calibration error: {0}")]
    Calibration(String),
}

pub type Result<T> = std::result::Result<T, InferenceError>;
