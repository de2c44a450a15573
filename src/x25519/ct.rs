/// Constant-time comparison utilities.
///
/// Implementations must not introduce data-dependent branches or early
/// exits: the running time may depend on the length of the inputs but
/// never on their contents.
pub trait ConstantTimeEq {
    /// Returns `true` if `self == other`, in constant time.
    fn ct_eq(&self, other: &Self) -> bool;
}

impl ConstantTimeEq for [u8; 32] {
    /// All bytes are XORed and accumulated before comparison, so the
    /// execution time does not depend on where the first difference occurs.
    #[inline(always)]
    fn ct_eq(&self, other: &Self) -> bool {
        let diff = self
            .iter()
            .zip(other)
            .map(|(a, b)| a ^ b)
            .fold(0u8, |acc, v| acc | v);

        // 0 -> 1, 1..=255 -> 0 without a branch on `diff`
        ((u32::from(diff).wrapping_sub(1) >> 31) & 1) == 1
    }
}
