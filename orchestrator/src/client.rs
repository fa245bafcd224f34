use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::pipeline::SentimentPipeline;
use crate::result::AnalysisResult;
use crate::{PipelineError, Result};

/// Caller-side wrapper around the pipeline: validates input at the boundary,
/// bounds each attempt with a timeout and retries timed-out attempts.
#[derive(Clone)]
pub struct AnalysisClient {
    pipeline: Arc<SentimentPipeline>,
    timeout: Duration,
    max_retries: u32,
    max_text_length: usize,
}

impl AnalysisClient {
    pub fn new(pipeline: Arc<SentimentPipeline>, config: &Config) -> Self {
        Self {
            pipeline,
            timeout: config.timeout(),
            max_retries: config.max_retries,
            max_text_length: config.max_text_length,
        }
    }

    pub async fn analyze(&self, text: &str) -> Result<AnalysisResult> {
        if text.trim().is_empty() {
            return Err(PipelineError::EmptyInput);
        }

        let length = text.chars().count();
        if length > self.max_text_length {
            return Err(PipelineError::InputTooLong {
                length,
                max: self.max_text_length,
            });
        }

        let attempts = self.max_retries + 1;
        for attempt in 1..=attempts {
            match tokio::time::timeout(self.timeout, self.pipeline.analyze(text)).await {
                Ok(result) => {
                    debug!("Attempt {}/{} finished", attempt, attempts);
                    return result;
                }
                Err(_) => {
                    warn!("Attempt {}/{}: analysis exceeded {:?}", attempt, attempts, self.timeout);
                    if attempt < attempts {
                        info!("Retrying analysis...");
                    }
                }
            }
        }

        Err(PipelineError::Timeout {
            after: self.timeout,
            attempts,
        })
    }
}
