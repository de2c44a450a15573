//! Entropy collaborator used by key generation.

use crate::error::Result;
use crate::os::sys_random;

/// A source of cryptographically secure random bytes.
///
/// Key generation takes its source as an explicit `&mut` dependency: the
/// caller owns the source and decides how (or whether) it is shared across
/// threads. Implementations must only ever return bytes from a CSPRNG and
/// must report failure instead of degrading to a weaker generator.
pub trait RandomSource {
    /// Fills `buf` entirely with secure random bytes.
    ///
    /// On error the contents of `buf` are unspecified and must not be used.
    fn fill(&mut self, buf: &mut [u8]) -> Result<()>;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        (**self).fill(buf)
    }
}

/// Stateless source reading operating system entropy on every call.
///
/// `OsRandom` holds no state, so a single value may be copied freely and
/// used concurrently from any number of threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        sys_random(buf)
    }
}
