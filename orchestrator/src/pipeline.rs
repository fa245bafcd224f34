use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::result::{assemble, AnalysisResult};
use crate::{PipelineError, Result};

use inference::{baseline, LexiconClassifier, SentimentClassifier};
use reviewlens_preprocessing::TextProcessor;

/// Raw text in, immutable [`AnalysisResult`] out.
///
/// Holds no per-request state, so one instance can serve concurrent
/// callers behind an `Arc`.
pub struct SentimentPipeline {
    processor: TextProcessor,
    classifier: Arc<dyn SentimentClassifier>,
    simulated_latency: Duration,
}

impl SentimentPipeline {
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        info!(
            "Initializing sentiment pipeline (latency: {}ms, contributions: {:?})",
            config.simulated_latency_ms, config.contribution_mode
        );

        Ok(Self::with_parts(
            TextProcessor::new(),
            Arc::new(LexiconClassifier::with_mode(config.contribution_mode)),
            config.simulated_latency(),
        ))
    }

    pub fn with_parts(
        processor: TextProcessor,
        classifier: Arc<dyn SentimentClassifier>,
        simulated_latency: Duration,
    ) -> Self {
        Self {
            processor,
            classifier,
            simulated_latency,
        }
    }

    pub fn classifier_name(&self) -> &str {
        self.classifier.name()
    }

    /// Runs the full pipeline on one text.
    ///
    /// Empty or whitespace-only text is rejected before any stage runs. The
    /// simulated inference delay is the only await point; dropping the
    /// future there abandons the request without partial output.
    #[instrument(
        skip(self, text),
        fields(request_id = %Uuid::new_v4(), chars = text.chars().count())
    )]
    pub async fn analyze(&self, text: &str) -> Result<AnalysisResult> {
        if text.trim().is_empty() {
            warn!("Rejecting empty input");
            return Err(PipelineError::EmptyInput);
        }

        let trace = self.processor.normalize(text)?;
        debug!("Preprocessing complete: '{}'", trace.lemmatized());

        if !self.simulated_latency.is_zero() {
            debug!("Simulating inference latency of {:?}", self.simulated_latency);
            tokio::time::sleep(self.simulated_latency).await;
        }

        let classification = self.classifier.classify(trace.lowercase())?;
        let baseline_prediction = baseline(&classification.prediction);

        let result = assemble(
            trace,
            classification.token_scores,
            classification.prediction,
            baseline_prediction,
        )?;

        info!(
            "Analysis complete: {} ({:.2}) vs baseline {:.2}, aggregate {}",
            result.final_prediction().label,
            result.final_prediction().confidence,
            result.baseline_prediction().confidence,
            classification.aggregate
        );

        Ok(result)
    }

    /// Analyzes each text independently; one failure does not affect the rest.
    pub async fn analyze_batch(&self, texts: &[&str]) -> Vec<Result<AnalysisResult>> {
        let mut results = Vec::with_capacity(texts.len());

        for text in texts {
            results.push(self.analyze(text).await);
        }

        let failed = results.iter().filter(|r| r.is_err()).count();
        info!("Batch analyzed: {}/{} texts successful", texts.len() - failed, texts.len());

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inference::{Classification, InferenceError, PredictionResult, SentimentLabel};
    use reviewlens_preprocessing::{Lemmatizer, PreprocessingError};

    fn instant_config() -> Config {
        Config {
            simulated_latency_ms: 0,
            ..Config::default()
        }
    }

    struct FailingClassifier;

    impl SentimentClassifier for FailingClassifier {
        fn name(&self) -> &str {
            "failing"
        }

        fn classify(&self, _lowercase: &str) -> inference::Result<Classification> {
            Err(InferenceError::InvalidLexicon("no entries loaded".to_string()))
        }
    }

    struct RejectingLemmatizer;

    impl Lemmatizer for RejectingLemmatizer {
        fn name(&self) -> &str {
            "rejecting"
        }

        fn lemmatize(&self, _tokens: &[&str]) -> reviewlens_preprocessing::Result<Vec<String>> {
            Err(PreprocessingError::Lemmatization("dictionary unavailable".to_string()))
        }
    }

    struct OverconfidentClassifier;

    impl SentimentClassifier for OverconfidentClassifier {
        fn name(&self) -> &str {
            "overconfident"
        }

        fn classify(&self, lowercase: &str) -> inference::Result<Classification> {
            Ok(Classification {
                aggregate: 1,
                prediction: PredictionResult {
                    label: SentimentLabel::Positive,
                    confidence: 1.0,
                },
                token_scores: lowercase
                    .split_whitespace()
                    .map(|t| inference::TokenScore {
                        token: t.to_string(),
                        contribution: 0.0,
                    })
                    .collect(),
            })
        }
    }

    #[tokio::test]
    async fn test_analyze_positive_review() {
        let pipeline = SentimentPipeline::new(&instant_config()).unwrap();
        let result = pipeline.analyze("Fantastic phone, I love it").await.unwrap();

        assert_eq!(result.final_prediction().label, SentimentLabel::Positive);
        assert!((result.final_prediction().confidence - 0.95).abs() < 1e-9);
        assert_eq!(pipeline.classifier_name(), "lexicon");
    }

    #[tokio::test]
    async fn test_whitespace_only_is_empty_input() {
        let pipeline = SentimentPipeline::new(&instant_config()).unwrap();
        for text in ["", " ", "\n\t  "] {
            let err = pipeline.analyze(text).await.unwrap_err();
            assert!(matches!(err, PipelineError::EmptyInput));
            assert!(!err.is_recoverable());
        }
    }

    #[tokio::test]
    async fn test_classifier_failure_is_not_partially_assembled() {
        let pipeline = SentimentPipeline::with_parts(
            TextProcessor::new(),
            Arc::new(FailingClassifier),
            Duration::ZERO,
        );

        let err = pipeline.analyze("great").await.unwrap_err();
        assert!(matches!(err, PipelineError::Inference(_)));
        assert!(!err.is_recoverable());
    }

    #[tokio::test]
    async fn test_first_failing_stage_is_reported() {
        // Both stages would fail; the earlier one wins and nothing is assembled.
        let pipeline = SentimentPipeline::with_parts(
            TextProcessor::with_lemmatizer(RejectingLemmatizer),
            Arc::new(FailingClassifier),
            Duration::ZERO,
        );

        let err = pipeline.analyze("great").await.unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Preprocessing(PreprocessingError::Lemmatization(_))
        ));
    }

    #[tokio::test]
    async fn test_substituted_classifier_still_bound_by_contract() {
        let pipeline = SentimentPipeline::with_parts(
            TextProcessor::new(),
            Arc::new(OverconfidentClassifier),
            Duration::ZERO,
        );

        let err = pipeline.analyze("great").await.unwrap_err();
        assert!(matches!(err, PipelineError::Assembly { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_latency_is_awaited() {
        let config = Config {
            simulated_latency_ms: 2000,
            ..Config::default()
        };
        let pipeline = SentimentPipeline::new(&config).unwrap();

        let start = tokio::time::Instant::now();
        pipeline.analyze("awesome").await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(2000));
    }

    #[tokio::test]
    async fn test_batch_keeps_failures_isolated() {
        let pipeline = SentimentPipeline::new(&instant_config()).unwrap();
        let results = pipeline.analyze_batch(&["great", "", "awful"]).await;

        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(PipelineError::EmptyInput)));
        assert_eq!(
            results[2].as_ref().unwrap().final_prediction().label,
            SentimentLabel::Negative
        );
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = Config {
            timeout_ms: 0,
            ..Config::default()
        };
        assert!(matches!(SentimentPipeline::new(&config), Err(PipelineError::Config(_))));
    }
}
