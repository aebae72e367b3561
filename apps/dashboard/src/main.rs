//! Sends one set of flower measurements to the prediction service and prints
//! the result next to the reference species means.

use clap::Parser;
use iris_client::{PredictionClient, Report};
use iris_model::FeatureVector;
use std::ops::RangeInclusive;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const SEPAL_LENGTH: RangeInclusive<f64> = 4.0..=8.0;
const SEPAL_WIDTH: RangeInclusive<f64> = 2.0..=5.0;
const PETAL_LENGTH: RangeInclusive<f64> = 1.0..=6.9;
const PETAL_WIDTH: RangeInclusive<f64> = 0.0..=2.5;

fn in_range(value: &str, range: RangeInclusive<f64>) -> Result<f64, String> {
    let value: f64 = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(format!(
            "{value} is outside {:.1}..={:.1} cm",
            range.start(),
            range.end()
        ))
    }
}

#[derive(Debug, Parser)]
#[command(name = "iris-dashboard", version, about)]
struct Args {
    /// Sepal length in cm
    #[arg(long, default_value_t = 5.8, value_parser = |v: &str| in_range(v, SEPAL_LENGTH))]
    sepal_length: f64,

    /// Sepal width in cm
    #[arg(long, default_value_t = 3.0, value_parser = |v: &str| in_range(v, SEPAL_WIDTH))]
    sepal_width: f64,

    /// Petal length in cm
    #[arg(long, default_value_t = 4.3, value_parser = |v: &str| in_range(v, PETAL_LENGTH))]
    petal_length: f64,

    /// Petal width in cm
    #[arg(long, default_value_t = 1.2, value_parser = |v: &str| in_range(v, PETAL_WIDTH))]
    petal_width: f64,

    /// Base url of the prediction service
    #[arg(long, env = "IRIS_API_URL", default_value = "http://localhost:8000")]
    url: String,
}

impl Args {
    fn features(&self) -> Result<FeatureVector, iris_model::FeatureError> {
        FeatureVector::new([
            self.sepal_length,
            self.sepal_width,
            self.petal_length,
            self.petal_width,
        ])
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();

    let features = args.features()?;
    let client = PredictionClient::new(&args.url)?;

    let prediction = match client.predict(&features).await {
        Ok(prediction) => Some(prediction),
        Err(e) => {
            tracing::warn!(error = %e, url = %args.url, "Prediction request failed");
            None
        }
    };

    print!("{}", Report::new(features, prediction));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_slider_defaults() {
        let args = Args::try_parse_from(["iris-dashboard"]).unwrap();
        assert_eq!(args.features().unwrap().values(), &[5.8, 3.0, 4.3, 1.2]);
    }

    #[test]
    fn values_outside_slider_range_are_rejected() {
        assert!(Args::try_parse_from(["iris-dashboard", "--sepal-length", "9.5"]).is_err());
        assert!(Args::try_parse_from(["iris-dashboard", "--petal-width", "-0.1"]).is_err());
        assert!(Args::try_parse_from(["iris-dashboard", "--sepal-width", "wide"]).is_err());
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let args = Args::try_parse_from([
            "iris-dashboard",
            "--sepal-length",
            "8.0",
            "--petal-width",
            "0",
        ])
        .unwrap();
        assert_eq!(args.sepal_length, 8.0);
        assert_eq!(args.petal_width, 0.0);
    }

    #[test]
    fn range_messages_name_the_bounds() {
        assert_eq!(
            in_range("7.0", PETAL_LENGTH).unwrap_err(),
            "7 is outside 1.0..=6.9 cm"
        );
    }
}
