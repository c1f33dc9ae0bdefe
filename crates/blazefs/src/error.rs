//! Error types for blazefs

use crate::client::RemoteError;
use thiserror::Error;

/// Errors surfaced on the propagated-failure channel.
///
/// Only operations without a sentinel return convention produce these;
/// `read_stream`, `copy`, and `rename` report failure through their return
/// value instead.
#[derive(Error, Debug)]
pub enum AdapterError {
    /// The remote client reported an error. The original error is carried
    /// unmodified; no retry or translation happens at this layer.
    #[error("remote client error: {0}")]
    Remote(RemoteError),

    /// Reading a caller-supplied stream failed before any upload started.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The generic interface asked for something B2 cannot express.
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),

    /// A location URL could not be parsed into a bucket name.
    #[error("invalid location: {0}")]
    InvalidLocation(String),
}

impl From<RemoteError> for AdapterError {
    fn from(err: RemoteError) -> Self {
        AdapterError::Remote(err)
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AdapterError>;
