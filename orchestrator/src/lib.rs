// ReviewLens sentiment pipeline

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod config;
pub mod result;
pub mod metrics;
pub mod pipeline;
pub mod client;
pub mod samples;
pub mod output;

pub use error::{PipelineError, Result};
pub use config::Config;
pub use result::{assemble, AnalysisReport, AnalysisResponse, AnalysisResult};
pub use metrics::{get_performance_metrics, PerformanceMetrics};
pub use pipeline::SentimentPipeline;
pub use client::AnalysisClient;

pub use inference::{PredictionResult, SentimentLabel, TokenScore};
pub use reviewlens_preprocessing::{PreprocessingTrace, Stage};
