use anyhow::Context;
use clap::Parser;
use denserank::{FeatureVector, InformationDensityRanker, PoolSnapshot, RankerConfig, ScoredUncertainty};
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Rank an unlabeled pool by density-weighted informativeness
#[derive(Parser, Debug)]
#[command(name = "denserank")]
#[command(about = "Pick the candidates most worth labeling next", long_about = None)]
struct Args {
    /// Pool snapshot (JSON) with training vectors and scored candidates
    #[arg(short, long)]
    input: PathBuf,

    /// Number of candidates to select
    #[arg(short, long, default_value_t = 10, allow_negative_numbers = true)]
    count: i64,

    /// Density weighting exponent (reserved, does not change rankings)
    #[arg(long, default_value_t = 1.0)]
    beta: f64,

    /// Pool size from which density is computed in parallel
    #[arg(long, default_value_t = 256)]
    parallel_threshold: usize,

    /// Pretty-print the JSON ranking
    #[arg(long)]
    pretty: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting denserank v{}", env!("CARGO_PKG_VERSION"));

    let snapshot = PoolSnapshot::load(&args.input)
        .with_context(|| format!("failed to load snapshot {:?}", args.input))?;
    info!(
        training = snapshot.training.len(),
        candidates = snapshot.candidates.len(),
        "Snapshot loaded"
    );

    let scores = snapshot.uncertainties();
    let candidates = snapshot.candidate_vectors();
    let training = snapshot.training;

    let config = RankerConfig {
        beta: args.beta,
        parallel_threshold: args.parallel_threshold,
    };
    if config.beta != RankerConfig::default().beta {
        warn!(beta = config.beta, "beta is accepted but does not affect the ranking");
    }

    let base = ScoredUncertainty::from_scores("snapshot", scores);
    let mut ranker: InformationDensityRanker<FeatureVector> =
        InformationDensityRanker::with_config(base, config)?;
    ranker.set_training_data(training);
    ranker.set_candidate_pool(candidates);

    let result = ranker
        .compute_ranking(args.count)
        .context("ranking failed")?;

    info!(
        selected = result.len(),
        "Remaining uncertainty: {:.6}", result.remaining_uncertainty
    );

    let output = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", output);

    Ok(())
}
