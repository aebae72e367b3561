//! Client side of the Iris prediction service.
//!
//! [`PredictionClient`] talks to a running service; [`reference`] and
//! [`report`] turn a measurement and its prediction into the text the
//! dashboard prints.

pub mod client;
pub mod error;
pub mod reference;
pub mod report;

pub use client::{Health, Prediction, PredictionClient};
pub use error::ClientError;
pub use reference::{SPECIES_MEANS, SpeciesMean, nearest_species};
pub use report::{PREDICTION_UNAVAILABLE, Report, format_accuracy};
