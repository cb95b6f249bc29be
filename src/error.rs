//! Hexkey-specific errors
//!
//! There are only two ways this crate can fail: being asked for a key of an
//! impossible length, or the platform randomness source being unavailable.
use thiserror::Error;

/// An error that Hexkey could end up producing.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum KeyError {
    /// `{0}` is the requested length in bytes.
    #[error("key length must be at least 1 byte, got {0}")]
    InvalidLength(usize),
    /// `{0}` is the message reported by the platform source. There is no
    /// retry: a secure source that is truly unavailable cannot be worked
    /// around.
    #[error("randomness source unavailable: {0}")]
    InsufficientEntropy(String),
}
