//! Error types shared across the crate.
//!
//! Field arithmetic, encoding and the Montgomery ladder are total functions
//! over 32-byte inputs and never fail. Errors only arise at the boundary
//! with the operating system (entropy) and from the optional contributory
//! check performed by [`crate::x25519::exchange`].

use thiserror::Error;

/// Errors that can occur in key generation and key exchange.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// No cryptographically secure entropy could be obtained.
    ///
    /// `backend` names the OS facility that failed and `code` carries the
    /// raw status it reported (`errno`, `NTSTATUS`, or `0` when the target
    /// has no entropy backend at all).
    #[error("entropy unavailable: {backend} failed with status {code}")]
    EntropyUnavailable { backend: &'static str, code: i64 },

    /// The peer public key produced an all-zero shared secret.
    #[error("peer public key is a low-order point")]
    LowOrderPoint,
}

/// Result type for fallible operations of this crate.
pub type Result<T> = core::result::Result<T, Error>;
