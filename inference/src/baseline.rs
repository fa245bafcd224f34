use crate::PredictionResult;

/// Confidence gap between the final model and the baseline comparator.
pub const BASELINE_CONFIDENCE_GAP: f64 = 0.15;

/// Derives the baseline comparator's prediction from the final one.
///
/// The baseline keeps the final label and reports a confidence lowered by
/// [`BASELINE_CONFIDENCE_GAP`], floored at zero.
pub fn baseline(final_prediction: &PredictionResult) -> PredictionResult {
    PredictionResult {
        label: final_prediction.label,
        confidence: (final_prediction.confidence - BASELINE_CONFIDENCE_GAP).max(0.0),
    }
}
