use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Invalid contact request: {0}")]
    InvalidRequest(String),

    #[error("Failed to send email: {0}")]
    Mail(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),
}

impl RelayError {
    /// The underlying message without the variant prefix.
    ///
    /// This is what the relay echoes back in the `details` field of a 500.
    #[must_use]
    pub fn detail(&self) -> &str {
        match self {
            RelayError::InvalidRequest(msg)
            | RelayError::Mail(msg)
            | RelayError::Config(msg)
            | RelayError::HttpError(msg) => msg,
        }
    }
}

impl From<lettre::transport::smtp::Error> for RelayError {
    fn from(error: lettre::transport::smtp::Error) -> Self {
        RelayError::Mail(error.to_string())
    }
}

impl From<lettre::error::Error> for RelayError {
    fn from(error: lettre::error::Error) -> Self {
        RelayError::Mail(error.to_string())
    }
}

impl From<lettre::address::AddressError> for RelayError {
    fn from(error: lettre::address::AddressError) -> Self {
        RelayError::Mail(format!("Invalid address: {error}"))
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(error: reqwest::Error) -> Self {
        RelayError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(error: serde_json::Error) -> Self {
        RelayError::InvalidRequest(error.to_string())
    }
}

impl From<base64::DecodeError> for RelayError {
    fn from(error: base64::DecodeError) -> Self {
        RelayError::InvalidRequest(format!("Body is not valid base64: {error}"))
    }
}
