//! Configuration for the checked key exchange.

/// Options applied by [`super::exchange`].
///
/// The raw X25519 function never rejects a peer key. RFC 7748 §6.1 lets
/// protocols that need contributory behavior abort when the shared secret
/// is all-zero, which happens exactly when the peer sent a low-order
/// point. That check is opt-in here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExchangeParams {
    /// Reject peer keys that yield an all-zero shared secret with
    /// [`crate::Error::LowOrderPoint`]. Disabled by default.
    pub reject_low_order: bool,
}

impl ExchangeParams {
    /// Parameters that enforce the contributory check.
    pub fn contributory() -> Self {
        Self {
            reject_low_order: true,
        }
    }
}
