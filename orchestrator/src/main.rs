use anyhow::Result;
use clap::Parser;
use std::io::Read;
use std::sync::Arc;
use tracing::info;

use orchestrator::config::{parse_contribution_mode, Config};
use orchestrator::output::ResultFormatter;
use orchestrator::{
    get_performance_metrics, samples, AnalysisClient, AnalysisReport, PipelineError,
    SentimentPipeline,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Lexicon-based review sentiment analyzer", long_about = None)]
struct Args {
    /// Review text to analyze (reads stdin when omitted)
    #[arg(long, conflicts_with = "sample")]
    text: Option<String>,

    /// Analyze a random built-in sample review
    #[arg(long)]
    sample: bool,

    /// Print the analysis as JSON
    #[arg(long)]
    json: bool,

    /// Show the model performance panel (with --json, adds a "metrics" field)
    #[arg(long)]
    metrics: bool,

    /// Simulated inference latency in milliseconds
    #[arg(long)]
    latency_ms: Option<u64>,

    /// Per-attempt timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Retries after a timed-out attempt
    #[arg(long)]
    retries: Option<u32>,

    /// Draw token contributions at random instead of hashing tokens
    #[arg(long)]
    random_contributions: bool,

    /// Seed for random contributions
    #[arg(long, requires = "random_contributions")]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::from_filename(".env").ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = build_config(&args)?;
    info!("Starting reviewlens v{}", orchestrator::VERSION);

    let mut formatter = ResultFormatter::new();
    let metrics = get_performance_metrics();

    if args.metrics && args.text.is_none() && !args.sample {
        if args.json {
            println!("{}", metrics.to_json()?);
        } else {
            formatter.display_metrics(metrics);
        }
        return Ok(());
    }

    let text = match (&args.text, args.sample) {
        (Some(text), _) => text.clone(),
        (None, true) => samples::random_sample().to_string(),
        (None, false) => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let pipeline = Arc::new(SentimentPipeline::new(&config)?);
    let client = AnalysisClient::new(pipeline, &config);

    match client.analyze(&text).await {
        Ok(result) => {
            if args.json && args.metrics {
                println!("{}", AnalysisReport::new(&result, metrics).to_json()?);
            } else if args.json {
                println!("{}", result.to_json()?);
            } else {
                formatter.display_result(&result);
                if args.metrics {
                    formatter.display_metrics(metrics);
                }
            }
            Ok(())
        }
        Err(PipelineError::EmptyInput) => {
            eprintln!("Please enter a review to analyze.");
            Err(PipelineError::EmptyInput.into())
        }
        Err(e) => {
            let error = anyhow::Error::from(e);
            formatter.display_error(&error);
            Err(error)
        }
    }
}

fn build_config(args: &Args) -> Result<Config> {
    let mut config = Config::from_env_or_default();

    if let Some(latency) = args.latency_ms {
        config.simulated_latency_ms = latency;
    }
    if let Some(timeout) = args.timeout_ms {
        config.timeout_ms = timeout;
    }
    if let Some(retries) = args.retries {
        config.max_retries = retries;
    }
    if args.random_contributions {
        config.contribution_mode = parse_contribution_mode("random", args.seed)?;
    }

    config.validate()?;
    Ok(config)
}
