use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid service url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Request error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Response error ({status}): {body}")]
    Status { status: u16, body: String },
}
