//! HTTP clients for the two content services and reverse geocoding.

pub mod aladhan;
pub mod geocode;
pub mod quran;

use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Non-2xx response from the service.
    Status(u16),
    /// Transport-level failure, including connection errors.
    Transport(String),
    /// The request did not complete in time.
    Timeout,
    /// The response body did not match the expected shape.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Status(code) => write!(f, "service returned status {code}"),
            ApiError::Transport(msg) => write!(f, "request failed: {msg}"),
            ApiError::Timeout => write!(f, "request timed out"),
            ApiError::Decode(msg) => write!(f, "unexpected response: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ureq::Error> for ApiError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(code, _) => ApiError::Status(code),
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::Io {
                    ApiError::Timeout
                } else {
                    ApiError::Transport(transport.to_string())
                }
            }
        }
    }
}

/// Shared HTTP agent with a bounded per-request timeout.
#[derive(Clone)]
pub struct Client {
    agent: ureq::Agent,
}

impl Client {
    pub fn new() -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(15))
            .user_agent(concat!("mihrab/", env!("CARGO_PKG_VERSION")))
            .build();
        Self { agent }
    }

    pub fn agent(&self) -> &ureq::Agent {
        &self.agent
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn decode<T: serde::de::DeserializeOwned>(
    response: ureq::Response,
) -> Result<T, ApiError> {
    response
        .into_json()
        .map_err(|e| ApiError::Decode(e.to_string()))
}
