//! Domain errors for key construction and configuration.

use thiserror::Error;

/// Errors raised while building or decoding a fixed-length key.
///
/// Keys are never silently truncated or padded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KeyError {
    /// Input does not have exactly the key's byte length.
    #[error("invalid data length: expected {expected} bytes, got {actual}")]
    InvalidDataLength { expected: usize, actual: usize },

    /// Input is not valid hexadecimal.
    #[error("invalid hex encoding: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Errors raised by configuration validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("bucket size must be at least 1, got {0}")]
    InvalidBucketSize(usize),
}
