use crate::artifact::{ModelArtifact, TrainingScope};
use crate::dataset::{LabelTable, Samples};
use crate::error::Result;
use crate::forest::ForestParams;

/// Fit a forest on `samples` (or on the training partition when `scope` is a
/// holdout) and wrap it with its labels into an artifact ready to be saved.
pub fn train_artifact(
    samples: &Samples,
    labels: &LabelTable,
    params: &ForestParams,
    scope: TrainingScope,
) -> Result<ModelArtifact> {
    let t0 = std::time::Instant::now();
    let (model, n_samples) = match scope {
        TrainingScope::Full => (params.fit(samples)?, samples.records().nrows()),
        TrainingScope::Holdout(split) => {
            let split = split.split(samples)?;
            (params.fit(&split.train)?, split.train.records().nrows())
        }
    };
    tracing::info!(
        n_samples,
        n_trees = model.n_trees(),
        %scope,
        elapsed = ?t0.elapsed(),
        "Fit model"
    );

    Ok(ModelArtifact::new(model, labels.clone(), scope, n_samples))
}
