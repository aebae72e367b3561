//! Fits the Iris classifier on the embedded dataset and writes the artifact
//! the prediction service loads at startup. Overwrites any existing file.

use clap::Parser;
use iris_model::dataset::iris;
use iris_model::{ForestParams, LabelTable, SplitParams, TrainingScope, train_artifact};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "iris-trainer", version, about)]
struct Args {
    /// Where to write the model artifact
    #[arg(short, long, env = "MODEL_PATH", default_value = "iris_model.json")]
    output: PathBuf,

    /// Number of trees in the forest
    #[arg(long, default_value_t = 100)]
    trees: usize,

    /// Maximum tree depth; unlimited when omitted
    #[arg(long)]
    max_depth: Option<usize>,

    /// Seed for bootstrap sampling
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Train on the evaluation split's training partition only
    #[arg(long)]
    holdout: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(env_filter)
        .init();

    let params = ForestParams::default()
        .n_trees(args.trees)
        .max_depth(args.max_depth)
        .seed(args.seed);
    let scope = if args.holdout {
        TrainingScope::Holdout(SplitParams::EVALUATION)
    } else {
        TrainingScope::Full
    };

    let artifact = train_artifact(&iris(), &LabelTable::iris(), &params, scope)?;
    artifact.save(&args.output).inspect_err(|e| {
        tracing::error!(error = %e, "Could not write model artifact");
    })?;

    Ok(())
}
