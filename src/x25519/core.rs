use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::ct::ConstantTimeEq;
use super::ladder::scalar_mult;
use super::params::ExchangeParams;
use crate::error::{Error, Result};
use crate::rng::RandomSource;

/// Length in bytes of an X25519 private scalar.
pub const SCALAR_LENGTH: usize = 32;

/// Length in bytes of an encoded u-coordinate (public key or shared secret).
pub const POINT_LENGTH: usize = 32;

/// The Curve25519 base point, `u = 9`.
pub const BASE_POINT: [u8; POINT_LENGTH] = {
    let mut point = [0u8; POINT_LENGTH];
    point[0] = 9;
    point
};

/// An X25519 key pair.
///
/// The private scalar is stored as generated (unclamped); clamping is
/// applied every time it enters the ladder. It is wiped when the key pair
/// is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeyPair {
    private_key: [u8; SCALAR_LENGTH],

    #[zeroize(skip)]
    public_key: [u8; POINT_LENGTH],
}

impl KeyPair {
    /// Builds a key pair from existing private scalar bytes, deriving the
    /// matching public key.
    pub fn from_private(private_key: [u8; SCALAR_LENGTH]) -> Self {
        let public_key = scalar_mult_base(&private_key);

        Self {
            private_key,
            public_key,
        }
    }

    /// The 32-byte private scalar.
    pub fn private_key(&self) -> &[u8; SCALAR_LENGTH] {
        &self.private_key
    }

    /// The 32-byte public u-coordinate.
    pub fn public_key(&self) -> &[u8; POINT_LENGTH] {
        &self.public_key
    }

    /// Computes the shared secret with a peer public key.
    pub fn diffie_hellman(&self, peer_public: &[u8; POINT_LENGTH]) -> SharedSecret {
        SharedSecret(compute_shared_secret(&self.private_key, peer_public))
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair").finish_non_exhaustive()
    }
}

/// A raw X25519 shared secret, wiped on drop.
///
/// This is the u-coordinate produced by the ladder, not a uniformly random
/// key. Protocols should pass it through a KDF before use.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret([u8; POINT_LENGTH]);

impl SharedSecret {
    /// Borrows the secret bytes.
    pub fn as_bytes(&self) -> &[u8; POINT_LENGTH] {
        &self.0
    }

    /// Copies the secret bytes out. The copy is not wiped automatically.
    pub fn to_bytes(&self) -> [u8; POINT_LENGTH] {
        self.0
    }

    /// Returns `true` if the secret is all-zero, in constant time.
    ///
    /// An all-zero secret means the peer public key was a low-order point.
    pub fn is_zero(&self) -> bool {
        self.0.ct_eq(&[0u8; POINT_LENGTH])
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSecret(..)")
    }
}

/// Multiplies the base point `u = 9` by `scalar` (after clamping).
///
/// Applied to a private scalar, this yields the matching public key.
pub fn scalar_mult_base(scalar: &[u8; SCALAR_LENGTH]) -> [u8; POINT_LENGTH] {
    scalar_mult(scalar, &BASE_POINT)
}

/// Generates a fresh key pair.
///
/// 32 bytes are drawn from `rng` as the private scalar and the public key
/// is derived with [`scalar_mult_base`]. The only failure is the random
/// source being unable to supply secure entropy; nothing weaker is tried.
pub fn generate_keypair<R: RandomSource + ?Sized>(rng: &mut R) -> Result<KeyPair> {
    let mut private_key = [0u8; SCALAR_LENGTH];

    if let Err(err) = rng.fill(&mut private_key) {
        private_key.zeroize();
        return Err(err);
    }

    log::debug!("generated x25519 key pair");

    Ok(KeyPair::from_private(private_key))
}

/// X25519 key exchange (RFC 7748 compatible).
///
/// Returns `scalar_mult(private_key, peer_public)`. Total and
/// deterministic: every pair of 32-byte inputs is accepted.
///
/// **Note:** the output is all-zero when `peer_public` is a low-order
/// point. This function returns that value as-is; use [`exchange`] with
/// [`ExchangeParams::contributory`] to reject it.
pub fn compute_shared_secret(
    private_key: &[u8; SCALAR_LENGTH],
    peer_public: &[u8; POINT_LENGTH],
) -> [u8; POINT_LENGTH] {
    scalar_mult(private_key, peer_public)
}

/// Key exchange with configurable peer-key policy.
///
/// Behaves like [`compute_shared_secret`], then applies the checks enabled
/// in `params`. With `reject_low_order`, an all-zero shared secret is
/// wiped and reported as [`Error::LowOrderPoint`].
pub fn exchange(
    private_key: &[u8; SCALAR_LENGTH],
    peer_public: &[u8; POINT_LENGTH],
    params: &ExchangeParams,
) -> Result<SharedSecret> {
    let secret = SharedSecret(compute_shared_secret(private_key, peer_public));

    if params.reject_low_order && secret.is_zero() {
        log::warn!("rejected x25519 peer key: shared secret is all-zero");
        return Err(Error::LowOrderPoint);
    }

    Ok(secret)
}
