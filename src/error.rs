//! Error types for citegraph.

use thiserror::Error;

/// Result type alias using citegraph's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building the graph.
///
/// "Not found" upstream is never an error: adapter lookups surface absence
/// as `Ok(None)` / an empty list and agents short-circuit on it. The
/// variants here are the hard failures that abort the current agent cycle.
#[derive(Error, Debug)]
pub enum Error {
    /// The works API was unreachable or the request timed out.
    #[error("Transport failure for {endpoint}: {message}")]
    Transport { endpoint: String, message: String },

    /// The works API answered with a body we could not decode.
    #[error("Malformed response from {endpoint}: {message}")]
    MalformedResponse { endpoint: String, message: String },

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Export/import file I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a transport error.
    pub fn transport(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// Create a malformed-response error.
    pub fn malformed(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }
}
