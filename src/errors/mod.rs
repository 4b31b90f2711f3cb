use log::warn;
use reqwest::StatusCode;
use thiserror::Error;

/// Failures raised at the stats provider boundary
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{0} is not set. Put it in your .env or shell environment.")]
    MissingApiKey(&'static str),

    #[error("Failed to send request to {endpoint}: {source}")]
    Request {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned status: {status}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
    },

    #[error("Failed to decode response from {endpoint}: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

impl ProviderError {
    /// Missing configuration aborts the request; everything else degrades.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ProviderError::MissingApiKey(_))
    }
}

/// Swap a recoverable provider failure for `fallback`, keeping fatal ones.
pub fn recover<T>(result: Result<T, ProviderError>, fallback: T, what: &str) -> Result<T, ProviderError> {
    match result {
        Ok(value) => Ok(value),
        Err(e) if e.is_fatal() => Err(e),
        Err(e) => {
            warn!("{} unavailable, degrading: {}", what, e);
            Ok(fallback)
        }
    }
}
