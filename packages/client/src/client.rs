use iris_model::FeatureVector;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ClientError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Health {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Prediction {
    pub class: String,
    /// Absent when the service omits it.
    #[serde(default)]
    pub accuracy: Option<f64>,
}

#[derive(Serialize)]
struct PredictBody<'a> {
    features: &'a [f64],
}

/// Thin wrapper over the prediction service. One request per call, no
/// retries, no client-side timeout.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    client: Client,
    base_url: Url,
}

impl PredictionClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET /`
    pub async fn health(&self) -> Result<Health, ClientError> {
        let response = self.client.get(self.base_url.clone()).send().await?;
        Ok(check(response).await?.json().await?)
    }

    /// `POST /predict/`
    pub async fn predict(&self, features: &FeatureVector) -> Result<Prediction, ClientError> {
        let url = self.base_url.join("predict/")?;
        tracing::debug!(%url, features = ?features.values(), "Requesting prediction");

        let response = self
            .client
            .post(url)
            .json(&PredictBody {
                features: features.values(),
            })
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }
}

async fn check(response: Response) -> Result<Response, ClientError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Status {
        status: status.as_u16(),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gains_trailing_slash() {
        let client = PredictionClient::new("http://localhost:8000/iris").unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:8000/iris/");
        assert_eq!(
            client.base_url().join("predict/").unwrap().as_str(),
            "http://localhost:8000/iris/predict/"
        );
    }

    #[test]
    fn rejects_unparseable_url() {
        assert!(matches!(
            PredictionClient::new("not a url"),
            Err(ClientError::InvalidUrl(_))
        ));
    }

    #[test]
    fn missing_accuracy_is_none() {
        let prediction: Prediction = serde_json::from_str(r#"{"class": "setosa"}"#).unwrap();
        assert_eq!(prediction.accuracy, None);
    }
}
