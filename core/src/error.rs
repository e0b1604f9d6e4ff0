//! Error types for the Zillow API client.
//!
//! # Design
//! Failures fall into two groups. Transport-level failures (`Transport`,
//! `Status`) mean no document was received; decode-level failures (`Decode`)
//! mean a body arrived but is not the document the operation expects. A
//! non-zero service `<message><code>` is not an error at all: it is returned
//! inside the decoded result for the caller to inspect.

use thiserror::Error;

/// Errors returned by `ZillowClient` parse methods and `Transport`
/// implementations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed: connection refused, DNS failure, timeout,
    /// or the body could not be read.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx HTTP status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The body is not well-formed XML or does not match the expected schema.
    #[error("decode failed: {0}")]
    Decode(String),
}

impl ApiError {
    /// True for failures where no response document was obtained.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_) | ApiError::Status { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, ApiError::Decode(_))
    }
}

/// Errors raised while assembling a `ClientConfig` from the environment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required setting {0}")]
    Missing(&'static str),

    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}
