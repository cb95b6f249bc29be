//! Hexkey: generate cryptographically secure random keys.
//!
//! The whole crate is a thin, testable wrapper around the operating system's
//! CSPRNG: ask for `n` bytes, get a [`Key`] back, render it as lowercase
//! hexadecimal. Nothing is persisted and the key bytes are wiped from memory
//! when the [`Key`] is dropped.
//!
//! The randomness source is an explicit argument so that callers (and tests)
//! decide where the bytes come from; anything that is both [`RngCore`] and
//! [`CryptoRng`] is accepted. Production code should pass
//! [`rand::rngs::OsRng`].
//!
//! # Example
//! ```
//! use hexkey::Key;
//! use rand::rngs::OsRng;
//!
//! let key = Key::random(16, &mut OsRng)?;
//! assert_eq!(key.to_hex().len(), 32);
//! # Ok::<(), hexkey::error::KeyError>(())
//! ```
use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::Zeroizing;

pub mod error;

use crate::error::KeyError;

/// the reference key length, a 128-bit key
pub const DEFAULT_KEY_LENGTH: usize = 16;

/// A fixed-length sequence of random bytes, suitable for use as key material
/// by an external cipher.
///
/// The backing buffer is zeroed when the [`Key`] is dropped.
pub struct Key(Zeroizing<Vec<u8>>);

impl Key {
    /// Draws exactly `length` bytes from `rng`.
    ///
    /// # Errors
    /// - [`KeyError::InvalidLength`] if `length` is zero
    /// - [`KeyError::InsufficientEntropy`] if the source fails to produce
    ///   bytes
    pub fn random(length: usize, rng: &mut (impl RngCore + CryptoRng)) -> Result<Self, KeyError> {
        if length == 0 {
            return Err(KeyError::InvalidLength(length));
        }

        debug!("drawing {} bytes from the secure source", length);
        let mut bytes = Zeroizing::new(vec![0u8; length]);
        rng.try_fill_bytes(&mut bytes)
            .map_err(|e| KeyError::InsufficientEntropy(e.to_string()))?;

        Ok(Self(bytes))
    }

    /// The length of the key in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Renders the key as lowercase hexadecimal, two characters per byte, no
    /// separators, no prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
