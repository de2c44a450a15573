//! X25519 key exchange.
//!
//! This module provides an implementation of the X25519 Diffie–Hellman
//! key exchange as specified in RFC 7748.
//!
//! ## Structure
//!
//! - `field`
//!   Arithmetic modulo `p = 2²⁵⁵ − 19` on 16 radix-2¹⁶ limbs: addition,
//!   subtraction, carry propagation, multiplication, inversion and the
//!   constant-time conditional swap.
//!
//! - `codec`
//!   Decoding of 32-byte u-coordinates into field elements and canonical
//!   encoding back to bytes.
//!
//! - `ladder`
//!   Scalar clamping and the Montgomery ladder.
//!
//! - `core`
//!   Key pairs, shared secrets and the public key exchange entry points.
//!
//! - `params`
//!   Optional peer-key policy for [`exchange`].
//!
//! Every function here except [`generate_keypair`] is pure and total over
//! its fixed-size inputs, and may be called concurrently from any thread.
//! Key generation draws from a caller-supplied [`crate::rng::RandomSource`].
//!
//! ## Example
//!
//! ```
//! use curvex::rng::OsRandom;
//! use curvex::x25519::{compute_shared_secret, generate_keypair};
//!
//! let mut rng = OsRandom;
//! let alice = generate_keypair(&mut rng)?;
//! let bob = generate_keypair(&mut rng)?;
//!
//! let alice_shared = compute_shared_secret(alice.private_key(), bob.public_key());
//! let bob_shared = compute_shared_secret(bob.private_key(), alice.public_key());
//!
//! assert_eq!(alice_shared, bob_shared);
//! # Ok::<(), curvex::Error>(())
//! ```

mod codec;
mod core;
pub mod ct;
mod field;
mod ladder;
mod params;

// Re-export the public API at the `x25519` level.
pub use self::core::*;
pub use ladder::{clamp_scalar, scalar_mult};
pub use params::ExchangeParams;
