use thiserror::Error;

/// Failures talking to the external backend.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("unexpected response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The sign-in provider answered and refused the credentials.
    #[error("{0}")]
    Rejected(String),
}
