use crate::metrics::PerformanceMetrics;
use crate::result::AnalysisResult;
use chrono::{DateTime, Utc};
use inference::{PredictionResult, SentimentLabel, TokenScore};

const BAR_WIDTH: usize = 30;

pub struct ResultFormatter {
    analysis_count: u64,
    start_time: DateTime<Utc>,
}

impl ResultFormatter {
    pub fn new() -> Self {
        Self {
            analysis_count: 0,
            start_time: Utc::now(),
        }
    }

    pub fn display_result(&mut self, result: &AnalysisResult) {
        self.analysis_count += 1;

        println!("\n{}", "=".repeat(80));
        println!("🔍 SENTIMENT ANALYSIS RESULT #{}", self.analysis_count);
        println!("{}", "=".repeat(80));

        let prediction = result.final_prediction();
        println!(
            "{} {}",
            self.sentiment_emoji(prediction.label),
            prediction.label.as_str().to_uppercase()
        );
        println!("   {}", self.format_prediction(prediction));

        println!("\n{}", "-".repeat(40));
        println!("🖍️  WORD IMPORTANCE");
        println!("{}", "-".repeat(40));
        println!("   {}", self.highlight_tokens(result.highlighted()));
        println!("   [+word] pushes positive, [-word] pushes negative");

        println!("\n{}", "-".repeat(40));
        println!("🧹 PREPROCESSING STEPS");
        println!("{}", "-".repeat(40));
        for (stage, output) in result.trace().stages() {
            println!("   {:<17} {}", format!("{}:", stage), self.truncate_text(output, 100));
        }

        println!("\n{}", "-".repeat(40));
        println!("⚖️  MODEL COMPARISON");
        println!("{}", "-".repeat(40));
        let baseline = result.baseline_prediction();
        println!("📦 Baseline: {} {}", baseline.label, self.format_prediction(baseline));
        println!("🤖 Final:    {} {}", prediction.label, self.format_prediction(prediction));
        println!(
            "   Improvement: +{:.0} points",
            (prediction.confidence - baseline.confidence) * 100.0
        );

        self.display_summary();
    }

    pub fn display_metrics(&self, metrics: &PerformanceMetrics) {
        println!("\n{}", "=".repeat(80));
        println!("📈 MODEL PERFORMANCE");
        println!("{}", "=".repeat(80));
        println!("   F1 Score:  {:.0}%", metrics.f1);
        println!("   Precision: {:.0}%", metrics.precision);
        println!("   Recall:    {:.0}%", metrics.recall);
        println!("   Accuracy:  {:.0}%", metrics.accuracy);

        println!("\n{}", "-".repeat(40));
        println!("CONFUSION MATRIX (rows = actual, columns = predicted)");
        println!("{}", "-".repeat(40));
        for line in self.confusion_matrix_lines(metrics) {
            println!("   {}", line);
        }
        println!("   Samples: {}", metrics.total_samples());
    }

    fn display_summary(&self) {
        let runtime = Utc::now().signed_duration_since(self.start_time);
        println!("\n{}", "-".repeat(40));
        println!("Analyses: {}  Runtime: {}s", self.analysis_count, runtime.num_seconds());
        println!("{}", "=".repeat(80));
    }

    pub fn display_error(&self, error: &anyhow::Error) {
        println!("\n{}", "❌".repeat(20));
        println!("💥 ANALYSIS FAILED");
        println!("{}", "❌".repeat(20));
        println!("Error: {}", error);
        println!("{}", "=".repeat(80));
    }

    pub fn format_prediction(&self, prediction: &PredictionResult) -> String {
        format!(
            "{} {:.0}% confident",
            self.confidence_bar(prediction.confidence, BAR_WIDTH),
            prediction.confidence * 100.0
        )
    }

    pub fn confidence_bar(&self, confidence: f64, width: usize) -> String {
        let filled = ((confidence.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
        format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
    }

    /// Marks tokens whose contribution clearly leans one way.
    pub fn highlight_tokens(&self, tokens: &[TokenScore]) -> String {
        tokens
            .iter()
            .map(|ts| match ts.contribution {
                c if c > 0.3 => format!("[+{}]", ts.token),
                c if c < -0.3 => format!("[-{}]", ts.token),
                _ => ts.token.clone(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn confusion_matrix_lines(&self, metrics: &PerformanceMetrics) -> Vec<String> {
        let mut lines = Vec::with_capacity(4);
        let header = metrics
            .labels()
            .iter()
            .map(|label| format!("{:>9}", label.as_str()))
            .collect::<String>();
        lines.push(format!("{:<9}{}", "", header));

        for actual in metrics.labels() {
            let row = metrics
                .labels()
                .iter()
                .map(|predicted| format!("{:>9}", metrics.cell(actual, *predicted)))
                .collect::<String>();
            lines.push(format!("{:<9}{}", actual.as_str(), row));
        }

        lines
    }

    fn sentiment_emoji(&self, label: SentimentLabel) -> &'static str {
        match label {
            SentimentLabel::Positive => "📈",
            SentimentLabel::Negative => "📉",
            SentimentLabel::Neutral => "➡️",
        }
    }

    fn truncate_text(&self, text: &str, max_len: usize) -> String {
        if text.chars().count() <= max_len {
            text.to_string()
        } else {
            format!("{}...", text.chars().take(max_len).collect::<String>())
        }
    }
}

impl Default for ResultFormatter {
    fn default() -> Self {
        Self::new()
    }
}
