use crate::metrics::PerformanceMetrics;
use crate::{PipelineError, Result};
use inference::{PredictionResult, SentimentLabel, TokenScore};
use reviewlens_preprocessing::PreprocessingTrace;
use serde::{Deserialize, Serialize};

/// Complete outcome of one analysis. Fields are fixed at assembly time.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    final_prediction: PredictionResult,
    baseline_prediction: PredictionResult,
    highlighted: Vec<TokenScore>,
    trace: PreprocessingTrace,
}

impl AnalysisResult {
    pub fn final_prediction(&self) -> &PredictionResult {
        &self.final_prediction
    }

    pub fn baseline_prediction(&self) -> &PredictionResult {
        &self.baseline_prediction
    }

    /// Token contributions in the order the tokens appear in the lowercase text.
    pub fn highlighted(&self) -> &[TokenScore] {
        &self.highlighted
    }

    pub fn trace(&self) -> &PreprocessingTrace {
        &self.trace
    }

    pub fn to_response(&self) -> AnalysisResponse {
        AnalysisResponse {
            final_prediction: self.final_prediction.label,
            final_confidence: self.final_prediction.confidence,
            baseline_prediction: self.baseline_prediction.label,
            baseline_confidence: self.baseline_prediction.confidence,
            highlighted_text: self
                .highlighted
                .iter()
                .map(|ts| (ts.token.clone(), ts.contribution))
                .collect(),
            preprocessing_steps: self.trace.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_response())?)
    }
}

/// Wire shape handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub final_prediction: SentimentLabel,
    pub final_confidence: f64,
    pub baseline_prediction: SentimentLabel,
    pub baseline_confidence: f64,
    pub highlighted_text: Vec<(String, f64)>,
    pub preprocessing_steps: PreprocessingTrace,
}

/// An analysis together with the model-quality figures, for callers that
/// want both in one JSON document.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport<'a> {
    pub analysis: AnalysisResponse,
    pub metrics: &'a PerformanceMetrics,
}

impl<'a> AnalysisReport<'a> {
    pub fn new(result: &AnalysisResult, metrics: &'a PerformanceMetrics) -> Self {
        Self {
            analysis: result.to_response(),
            metrics,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Composes the pipeline outputs into one result.
///
/// Upstream failures never reach here: the pipeline propagates them with `?`
/// in stage order, so nothing is assembled from a failed stage. Assembly
/// itself fails when the parts contradict each other.
pub fn assemble(
    trace: PreprocessingTrace,
    token_scores: Vec<TokenScore>,
    final_prediction: PredictionResult,
    baseline_prediction: PredictionResult,
) -> Result<AnalysisResult> {
    if baseline_prediction.label != final_prediction.label {
        return Err(PipelineError::assembly(format!(
            "baseline label {} disagrees with final label {}",
            baseline_prediction.label, final_prediction.label
        )));
    }

    if baseline_prediction.confidence > final_prediction.confidence {
        return Err(PipelineError::assembly(format!(
            "baseline confidence {:.3} exceeds final confidence {:.3}",
            baseline_prediction.confidence, final_prediction.confidence
        )));
    }

    for prediction in [&final_prediction, &baseline_prediction] {
        if !(0.0..1.0).contains(&prediction.confidence) {
            return Err(PipelineError::assembly(format!(
                "confidence {} outside [0, 1)",
                prediction.confidence
            )));
        }
    }

    let tokens_in_order = token_scores
        .iter()
        .map(|ts| ts.token.as_str())
        .eq(trace.lowercase().split_whitespace());
    if !tokens_in_order {
        return Err(PipelineError::assembly(
            "highlighted tokens do not follow the lowercase text",
        ));
    }

    if let Some(ts) = token_scores.iter().find(|ts| !(-1.0..=1.0).contains(&ts.contribution)) {
        return Err(PipelineError::assembly(format!(
            "contribution {} for '{}' outside [-1, 1]",
            ts.contribution, ts.token
        )));
    }

    Ok(AnalysisResult {
        final_prediction,
        baseline_prediction,
        highlighted: token_scores,
        trace,
    })
}
