//! On-disk model artifact
//!
//! The fitted forest is stored as a single JSON document together with the
//! label table it was trained against and a little provenance. The artifact is
//! written once by the trainer and only ever read afterwards.

use crate::dataset::{LabelTable, SplitParams};
use crate::error::{ModelError, Result};
use crate::forest::RandomForest;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

/// Which rows the model was fitted on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingScope {
    /// Every row of the dataset
    Full,
    /// Only the training partition of the given split
    Holdout(SplitParams),
}

impl fmt::Display for TrainingScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrainingScope::Full => write!(f, "full dataset"),
            TrainingScope::Holdout(split) => write!(
                f,
                "holdout (test_fraction={}, seed={})",
                split.test_fraction, split.seed
            ),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub format_version: u32,
    pub trained_at: DateTime<Utc>,
    pub scope: TrainingScope,
    /// Number of rows the model was fitted on
    pub n_samples: usize,
    pub classes: LabelTable,
    pub model: RandomForest,
}

#[derive(Deserialize)]
struct FormatProbe {
    format_version: u32,
}

impl ModelArtifact {
    pub fn new(
        model: RandomForest,
        classes: LabelTable,
        scope: TrainingScope,
        n_samples: usize,
    ) -> Self {
        Self {
            format_version: ARTIFACT_FORMAT_VERSION,
            trained_at: Utc::now(),
            scope,
            n_samples,
            classes,
            model,
        }
    }

    pub fn to_json_vec(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let probe: FormatProbe = serde_json::from_slice(bytes)?;
        if probe.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(ModelError::UnsupportedFormat(probe.format_version));
        }
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Write the artifact, replacing whatever is at `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let bytes = self.to_json_vec()?;
        std::fs::write(path, &bytes).map_err(|source| ModelError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "Saved model artifact");
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|source| ModelError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let artifact = Self::from_json_slice(&bytes)?;
        tracing::debug!(
            path = %path.display(),
            n_trees = artifact.model.n_trees(),
            scope = %artifact.scope,
            "Loaded model artifact"
        );
        Ok(artifact)
    }

    /// Fail unless the stored classes are exactly `expected`, in order.
    pub fn ensure_classes(&self, expected: &LabelTable) -> Result<()> {
        if &self.classes != expected || self.model.n_classes() > expected.len() {
            return Err(ModelError::ClassMismatch {
                expected: expected.names().to_vec(),
                found: self.classes.names().to_vec(),
            });
        }
        Ok(())
    }
}
