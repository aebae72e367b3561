//! Plain-text rendering of a dashboard run.

use std::fmt;

use iris_model::FeatureVector;
use iris_model::features::FEATURE_NAMES;

use crate::client::Prediction;
use crate::reference::{SPECIES_MEANS, nearest_species};

pub const PREDICTION_UNAVAILABLE: &str =
    "Error: Could not get prediction. Please ensure the server is running.";

/// `0.9667` renders as `96.67%`; a missing figure renders as `N/A`.
pub fn format_accuracy(accuracy: Option<f64>) -> String {
    match accuracy {
        Some(value) => format!("{:.2}%", value * 100.0),
        None => "N/A".to_string(),
    }
}

/// Everything the dashboard prints for one set of measurements.
///
/// `prediction` is `None` when the service could not be reached; the summary
/// and the comparison are rendered either way.
#[derive(Debug, Clone)]
pub struct Report {
    pub features: FeatureVector,
    pub prediction: Option<Prediction>,
}

impl Report {
    pub fn new(features: FeatureVector, prediction: Option<Prediction>) -> Self {
        Self {
            features,
            prediction,
        }
    }

    fn write_prediction(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Prediction")?;
        match &self.prediction {
            Some(prediction) => {
                writeln!(f, "  Species:  {}", prediction.class)?;
                writeln!(f, "  Accuracy: {}", format_accuracy(prediction.accuracy))
            }
            None => writeln!(f, "  {PREDICTION_UNAVAILABLE}"),
        }
    }

    fn write_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Measurements")?;
        for (name, value) in FEATURE_NAMES.iter().zip(self.features.values()) {
            writeln!(f, "  {name:<14}{value:>6.2} cm")?;
        }
        Ok(())
    }

    fn write_comparison(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Comparison with species means")?;
        write!(f, "  {:<12}", "")?;
        for name in FEATURE_NAMES {
            write!(f, "{name:>14}")?;
        }
        writeln!(f, "{:>10}", "Distance")?;

        write!(f, "  {:<12}", "Input")?;
        for value in self.features.values() {
            write!(f, "{value:>14.2}")?;
        }
        writeln!(f)?;

        for mean in &SPECIES_MEANS {
            write!(f, "  {:<12}", mean.name)?;
            for value in mean.values {
                write!(f, "{value:>14.2}")?;
            }
            writeln!(f, "{:>10.2}", mean.distance(&self.features))?;
        }

        writeln!(
            f,
            "  Closest reference species: {}",
            nearest_species(&self.features).name
        )
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_prediction(f)?;
        writeln!(f)?;
        self.write_summary(f)?;
        writeln!(f)?;
        self.write_comparison(f)
    }
}
