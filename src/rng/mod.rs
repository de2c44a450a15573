//! Random number generation module
//!
//! Key generation consumes randomness through the [`RandomSource`] trait,
//! passed in explicitly by the caller. Two implementations are provided:
//!
//! - [`OsRandom`]: stateless, reads operating system entropy on each call.
//! - [`Csprng`]: a ChaCha20 DRBG seeded once (from the OS or a caller seed)
//!   and rekeyed after every request for forward secrecy.
//!
//! Neither implementation falls back to a non-cryptographic generator.
//! Entropy failures surface as [`crate::Error::EntropyUnavailable`].

mod chacha20;
mod csprng;
mod source;

pub use csprng::Csprng;
pub use source::{OsRandom, RandomSource};
