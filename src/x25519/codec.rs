//! Conversion between field elements and their 32-byte wire encoding.
//!
//! The wire format is the little-endian encoding of an integer. Limb `i`
//! of a [`FieldElement`] maps directly to bytes `2i` (low) and `2i + 1`
//! (high). Bit 255 is ignored on decode, and any 255-bit value is
//! accepted, including non-canonical ones in `[p, 2²⁵⁵)`.

use super::field::{FieldElement, LIMBS};

// Limbs of p = 2^255 - 19 other than 0xffff
const P_LOW_LIMB: i64 = 0xffed;
const P_TOP_LIMB: i64 = 0x7fff;

impl FieldElement {
    /// Decodes a field element from 32 little-endian bytes.
    ///
    /// The most significant bit is masked off, as required for Curve25519
    /// u-coordinates. The result is not reduced.
    pub(crate) fn from_bytes(input: &[u8; 32]) -> FieldElement {
        let mut out = FieldElement::ZERO;

        for (limb, pair) in out.0.iter_mut().zip(input.chunks_exact(2)) {
            *limb = i64::from(pair[0]) | (i64::from(pair[1]) << 8);
        }
        out.0[LIMBS - 1] &= 0x7fff;

        out
    }

    /// Encodes this field element into its canonical 32-byte form.
    ///
    /// Three carry passes bring every limb into `[0, 2¹⁶)`, so the value is
    /// below `2²⁵⁶ = 2p + 38` and two rounds of conditional subtraction
    /// reach `[0, p)`. Each round computes `t − p` with borrow
    /// propagation and keeps it only when the subtraction did not
    /// underflow. Selection goes through [`FieldElement::swap`], so the
    /// work done does not depend on the value.
    pub(crate) fn to_bytes(&self) -> [u8; 32] {
        let mut t = *self;
        t.carry();
        t.carry();
        t.carry();

        let mut m = FieldElement::ZERO;
        for _ in 0..2 {
            m.0[0] = t.0[0] - P_LOW_LIMB;
            for index in 1..LIMBS - 1 {
                m.0[index] = t.0[index] - 0xffff - ((m.0[index - 1] >> 16) & 1);
                m.0[index - 1] &= 0xffff;
            }
            m.0[LIMBS - 1] = t.0[LIMBS - 1] - P_TOP_LIMB - ((m.0[LIMBS - 2] >> 16) & 1);
            m.0[LIMBS - 2] &= 0xffff;

            // 1 if t < p
            let underflow = ((m.0[LIMBS - 1] >> 16) & 1) as u32;
            t.swap(&mut m, 1 - underflow);
        }

        let mut out = [0u8; 32];
        for (pair, limb) in out.chunks_exact_mut(2).zip(t.0.iter()) {
            pair[0] = (limb & 0xff) as u8;
            pair[1] = ((limb >> 8) & 0xff) as u8;
        }

        out
    }
}
