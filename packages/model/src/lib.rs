//! Iris classification model
//!
//! Everything the trainer and the prediction service share: the embedded Iris
//! dataset with its fixed evaluation split, the feature vector type, a bagged
//! decision tree ensemble built on [`linfa_trees`], evaluation metrics and the
//! on-disk model artifact.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use iris_model::{ForestParams, LabelTable, SplitParams, dataset};
//!
//! let samples = dataset::iris();
//! let split = SplitParams::EVALUATION.split(&samples)?;
//! let forest = ForestParams::default().fit(&split.train)?;
//! let evaluation = iris_model::metrics::evaluate(&forest, &split.test, &LabelTable::iris())?;
//! ```

pub mod artifact;
pub mod dataset;
pub mod error;
pub mod features;
pub mod forest;
pub mod metrics;
pub mod training;

pub use artifact::{ARTIFACT_FORMAT_VERSION, ModelArtifact, TrainingScope};
pub use dataset::{LabelTable, Samples, SplitParams, TrainTestSplit};
pub use error::{ModelError, Result};
pub use features::{FeatureError, FeatureVector, N_FEATURES};
pub use forest::{ForestParams, RandomForest};
pub use metrics::{AccuracyMetrics, ConfusionMatrix, Evaluation};
pub use training::train_artifact;
