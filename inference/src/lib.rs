pub mod error;
pub mod lexicon;
pub mod scorer;
pub mod calibrator;
pub mod baseline;
pub mod classifier;

pub use error::{InferenceError, Result};
pub use lexicon::{Lexicon, LexiconSet, NEGATIVE_WORDS, POSITIVE_WORDS};
pub use scorer::{ContributionMode, LexiconScore, LexiconScorer};
pub use calibrator::ConfidenceCalibrator;
pub use baseline::baseline;
pub use classifier::{Classification, LexiconClassifier, SentimentClassifier};

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Fixed label order used by confusion matrices and reports.
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }

    /// Position of the label in [`SentimentLabel::ALL`].
    pub fn index(&self) -> usize {
        match self {
            SentimentLabel::Positive => 0,
            SentimentLabel::Negative => 1,
            SentimentLabel::Neutral => 2,
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub label: SentimentLabel,
    pub confidence: f64,         // 0.0 to 1.0, never reaches 1.0
}

/// Per-token attribution used for left-to-right highlighting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenScore {
    pub token: String,
    pub contribution: f64,       // -1.0 (negative) to 1.0 (positive)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_order_and_index_agree() {
        for (i, label) in SentimentLabel::ALL.iter().enumerate() {
            assert_eq!(label.index(), i);
        }
    }

    #[test]
    fn test_label_serializes_capitalized() {
        let json = serde_json::to_string(&SentimentLabel::Negative).unwrap();
        assert_eq!(json, "\"Negative\"");
        assert_eq!(SentimentLabel::Neutral.to_string(), "Neutral");
    }
}
