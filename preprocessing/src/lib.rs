// Review text preprocessing library

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod models;
pub mod error;
pub mod lemmatizer;
pub mod processor;

pub use models::{PreprocessingTrace, Stage};
pub use error::{PreprocessingError, Result};
pub use lemmatizer::{IdentityLemmatizer, Lemmatizer};
pub use processor::{TextProcessor, STOPWORDS};
