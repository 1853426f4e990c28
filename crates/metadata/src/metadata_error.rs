//! Failures talking to the metadata providers.

use thiserror::Error;

/// Anything that goes wrong fetching or reading a provider response. None of these are retried.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("Request to the metadata provider failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Metadata provider returned {status} for {url}.")]
    Status { status: u16, url: String },
    #[error("Could not read the metadata provider response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}
