//! ChaCha20-based CSPRNG
//!
//! This module implements a cryptographically secure pseudorandom number
//! generator (CSPRNG) built on top of the ChaCha20 block function.
//!
//! It:
//! - relies on the operating system for initial entropy
//! - uses ChaCha20 as a deterministic random bit generator (DRBG)
//! - avoids heap allocations
//! - provides forward secrecy via rekeying after every request
//!
//! The generator state is owned by its caller. There is no process-wide
//! instance and no lazy seeding.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::Result;
use crate::os::sys_random;
use crate::rng::RandomSource;
use crate::rng::chacha20::block;

/// Cryptographically secure pseudorandom number generator.
///
/// The generator is seeded once and then expands randomness using the
/// ChaCha20 block function. Internally, it maintains a secret key, a nonce,
/// and a block counter.
///
/// After generating output, the generator rekeys itself: compromise of the
/// internal state does not reveal past outputs. The key is wiped on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Csprng {
    /// Internal ChaCha20 key (256-bit)
    key: [u8; 32],

    /// Nonce value (96-bit, fixed to zero for DRBG usage)
    nonce: [u8; 12],

    /// Block counter
    counter: u32,
}

impl Csprng {
    /// Creates a new CSPRNG seeded from the operating system.
    ///
    /// Fails with [`crate::Error::EntropyUnavailable`] if the OS cannot
    /// provide secure entropy.
    pub fn from_os() -> Result<Self> {
        let mut seed = [0u8; 32];
        if let Err(err) = sys_random(&mut seed) {
            seed.zeroize();
            return Err(err);
        }

        let rng = Self::from_seed(seed);
        seed.zeroize();

        log::debug!("csprng seeded from operating system entropy");

        Ok(rng)
    }

    /// Creates a new CSPRNG from a caller-provided seed.
    ///
    /// The seed must be uniformly random and unpredictable for the output
    /// to be secure. Identical seeds produce identical streams, which makes
    /// this constructor suitable for reproducible tests.
    pub fn from_seed(mut seed: [u8; 32]) -> Self {
        let key = seed;
        seed.zeroize();

        Self {
            key,
            nonce: [0u8; 12],
            counter: 0,
        }
    }

    /// Fills the provided buffer with cryptographically secure random bytes.
    ///
    /// Randomness is generated in 64-byte blocks and copied into the output
    /// buffer. Once the buffer is filled, the generator rekeys itself.
    pub fn fill_bytes(&mut self, out: &mut [u8]) {
        for chunk in out.chunks_mut(64) {
            let mut keystream = block(&self.key, self.counter, &self.nonce);
            self.counter = self.counter.wrapping_add(1);

            chunk.copy_from_slice(&keystream[..chunk.len()]);
            keystream.zeroize();
        }

        self.rekey();
    }

    /// Replaces the key with the first half of a fresh keystream block.
    fn rekey(&mut self) {
        let mut keystream = block(&self.key, self.counter, &self.nonce);

        self.counter = self.counter.wrapping_add(1);
        self.key.copy_from_slice(&keystream[..32]);
        keystream.zeroize();
    }
}

impl RandomSource for Csprng {
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        self.fill_bytes(buf);
        Ok(())
    }
}
