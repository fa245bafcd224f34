use crate::{
    calibrator::ConfidenceCalibrator,
    scorer::{ContributionMode, LexiconScorer},
    PredictionResult, Result, TokenScore,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub aggregate: i64,
    pub prediction: PredictionResult,
    pub token_scores: Vec<TokenScore>,
}

/// Seam for the scoring model. The lexicon classifier is the default; a
/// trained model can be dropped in as long as it honours the same output
/// contract (token scores in input order, confidence in [0, 1)).
pub trait SentimentClassifier: Send + Sync {
    fn name(&self) -> &str;

    /// Classifies the lowercase, unfiltered form of the input.
    fn classify(&self, lowercase: &str) -> Result<Classification>;
}

pub struct LexiconClassifier {
    scorer: LexiconScorer,
    calibrator: ConfidenceCalibrator,
}

impl LexiconClassifier {
    pub fn new() -> Self {
        Self::with_parts(LexiconScorer::new(), ConfidenceCalibrator::default())
    }

    pub fn with_mode(mode: ContributionMode) -> Self {
        Self::with_parts(LexiconScorer::with_mode(mode), ConfidenceCalibrator::default())
    }

    pub fn with_parts(scorer: LexiconScorer, calibrator: ConfidenceCalibrator) -> Self {
        Self { scorer, calibrator }
    }
}

impl Default for LexiconClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentClassifier for LexiconClassifier {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn classify(&self, lowercase: &str) -> Result<Classification> {
        let score = self.scorer.score(lowercase);
        let prediction = self.calibrator.calibrate(score.aggregate);

        tracing::debug!(
            "Lexicon classification for '{}': {} (aggregate: {}, confidence: {:.3}, mode: {:?})",
            lowercase.chars().take(50).collect::<String>(),
            prediction.label,
            score.aggregate,
            prediction.confidence,
            self.scorer.mode()
        );

        Ok(Classification {
            aggregate: score.aggregate,
            prediction,
            token_scores: score.token_scores,
        })
    }
}
