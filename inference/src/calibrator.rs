use crate::{InferenceError, PredictionResult, Result, SentimentLabel};

pub const BASE_CONFIDENCE: f64 = 0.75;
pub const CONFIDENCE_STEP: f64 = 0.1;
pub const MAX_CONFIDENCE: f64 = 0.95;

/// Maps an aggregate polarity score to a label and a saturating confidence.
///
/// A zero score is `Neutral` at exactly the base confidence. Any other score
/// gets `base + |score| * step`, capped at the ceiling, so confidence never
/// drops below the base nor reaches 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceCalibrator {
    base: f64,
    step: f64,
    ceiling: f64,
}

impl ConfidenceCalibrator {
    pub fn new(base: f64, step: f64, ceiling: f64) -> Result<Self> {
        if !(0.0..1.0).contains(&base) {
            return Err(InferenceError::Calibration(format!(
                "base confidence {} outside [0, 1)",
                base
            )));
        }
        if !(base..1.0).contains(&ceiling) {
            return Err(InferenceError::Calibration(format!(
                "ceiling {} must lie in [{}, 1)",
                ceiling, base
            )));
        }
        if step.is_nan() || step <= 0.0 {
            return Err(InferenceError::Calibration(format!("step {} must be positive", step)));
        }

        Ok(Self { base, step, ceiling })
    }

    pub fn calibrate(&self, aggregate: i64) -> PredictionResult {
        let label = match aggregate {
            a if a > 0 => SentimentLabel::Positive,
            a if a < 0 => SentimentLabel::Negative,
            _ => SentimentLabel::Neutral,
        };

        let confidence = if aggregate == 0 {
            self.base
        } else {
            self.ceiling.min(self.base + aggregate.unsigned_abs() as f64 * self.step)
        };

        PredictionResult { label, confidence }
    }
}

impl Default for ConfidenceCalibrator {
    fn default() -> Self {
        Self {
            base: BASE_CONFIDENCE,
            step: CONFIDENCE_STEP,
            ceiling: MAX_CONFIDENCE,
        }
    }
}
