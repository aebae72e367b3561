use chrono::{DateTime, Utc};
use iris_model::{SplitParams, TrainingScope};
use serde::{Deserialize, Serialize};

pub const WELCOME_MESSAGE: &str = "Welcome to the model API!";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WelcomeResponse {
    pub message: String,
}

impl Default for WelcomeResponse {
    fn default() -> Self {
        Self {
            message: WELCOME_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    pub features: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictResponse {
    pub class: String,
    pub accuracy: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelInfoResponse {
    pub kind: String,
    pub n_trees: usize,
    pub n_features: usize,
    pub classes: Vec<String>,
    pub trained_at: DateTime<Utc>,
    pub scope: TrainingScope,
    pub trained_samples: usize,
    pub evaluation_split: SplitParams,
    pub accuracy: f64,
    pub correct_count: usize,
    pub total_count: usize,
}
