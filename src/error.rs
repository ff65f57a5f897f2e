//! Error types for pdustack

use thiserror::Error;

/// Result type alias for PDU operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for pdustack
#[derive(Error, Debug)]
pub enum Error {
    /// Parse buffer is shorter than a layer's fixed header
    #[error("malformed packet: header needs {needed} bytes, buffer has {available}")]
    MalformedPacket { needed: usize, available: usize },

    /// Serialization destination is smaller than the chain's total size
    #[error("destination buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },

    /// Raw send/receive invoked where the capability is absent
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// The receive loop exhausted the collaborator's timeout without a match.
    ///
    /// This is a normal, non-fatal outcome, distinct from a transport-level
    /// failure ([`Error::Io`]).
    #[error("no matching response received before the timeout expired")]
    NoMatchingResponse,

    /// Transport-level I/O error, propagated unchanged
    #[error("network I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Interface / channel error reported by the sender collaborator
    #[error("interface error: {0}")]
    Interface(String),

    /// Invalid textual address
    #[error("invalid address: {0}")]
    Address(String),
}

impl Error {
    /// Create an unsupported-operation error with a custom message
    pub fn unsupported<S: Into<String>>(msg: S) -> Self {
        Error::UnsupportedOperation(msg.into())
    }

    /// Create an interface error with a custom message
    pub fn interface<S: Into<String>>(msg: S) -> Self {
        Error::Interface(msg.into())
    }

    /// Create an address error with a custom message
    pub fn address<S: Into<String>>(msg: S) -> Self {
        Error::Address(msg.into())
    }
}
