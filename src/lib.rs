//! X25519 Diffie–Hellman key exchange over Curve25519.
//!
//! This crate implements the X25519 function of RFC 7748 from first
//! principles: arithmetic modulo `2²⁵⁵ − 19`, the constant-time Montgomery
//! ladder, and the byte encodings of scalars and u-coordinates.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level cryptographic API.
//!
//! # Module overview
//!
//! - `x25519`
//!   Field arithmetic, encoding, the Montgomery ladder, and the key
//!   exchange entry points ([`x25519::generate_keypair`],
//!   [`x25519::scalar_mult_base`], [`x25519::compute_shared_secret`]).
//!   The shared secret is raw: no KDF, authentication, or transport is
//!   provided.
//!
//! - `rng`
//!   The [`rng::RandomSource`] trait consumed by key generation, with an
//!   operating-system source and a ChaCha20-based CSPRNG. Randomness is
//!   always passed in explicitly; there is no global generator.
//!
//! - `os` (internal)
//!   Platform access to kernel entropy.
//!
//! # Design goals
//!
//! - No heap allocations
//! - Fixed work per operation, independent of secret values
//! - Total functions over 32-byte inputs; errors only at the entropy
//!   boundary and from opt-in peer-key checks
//! - Secret buffers wiped after use

mod error;
mod os;

pub mod rng;
pub mod x25519;

pub use error::{Error, Result};
