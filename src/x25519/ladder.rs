//! Montgomery ladder scalar multiplication on the u-coordinate.

use zeroize::Zeroize;

use super::field::FieldElement;

/// Clamps a 32-byte scalar into the X25519 form.
///
/// - the three lowest bits are cleared, making the scalar a multiple of the
///   curve cofactor 8;
/// - bit 255 is cleared and bit 254 is set, fixing the bit length so the
///   ladder always runs the same 255 steps.
///
/// Every 32-byte string is accepted.
pub fn clamp_scalar(scalar: &[u8; 32]) -> [u8; 32] {
    let mut clamped = *scalar;
    clamped[0] &= 0xf8;
    clamped[31] = (clamped[31] & 0x7f) | 0x40;

    clamped
}

/// Computes the u-coordinate of `scalar · point` (RFC 7748 X25519).
///
/// ## Algorithm
///
/// 1. Clamp the scalar with [`clamp_scalar`].
/// 2. Decode `point` as a field element `x` (bit 255 ignored).
/// 3. Start from the projective pair `(a : c) = (1 : 0)` (identity) and
///    `(b : d) = (x : 1)` (the input point).
/// 4. For each bit from 254 down to 0, swap the pairs when the bit is set,
///    perform one differential addition and one doubling, then swap back.
/// 5. Return `encode(a / c)`.
///
/// ## Security
///
/// - Exactly 255 ladder steps, each with the same sequence of field
///   operations, regardless of the scalar.
/// - Scalar bits only reach the state through [`FieldElement::swap`],
///   which selects with a mask rather than a branch.
/// - The peer point is not validated. Low-order points yield an all-zero
///   output, which is returned as-is.
pub fn scalar_mult(scalar: &[u8; 32], point: &[u8; 32]) -> [u8; 32] {
    let mut clamped = clamp_scalar(scalar);
    let x = FieldElement::from_bytes(point);

    let mut a = FieldElement::ONE;
    let mut b = x;
    let mut c = FieldElement::ZERO;
    let mut d = FieldElement::ONE;

    for pos in (0..=254).rev() {
        let bit = ((clamped[pos >> 3] >> (pos & 7)) & 1) as u32;

        a.swap(&mut b, bit);
        c.swap(&mut d, bit);

        let mut e = a + c;
        a = a - c;
        c = b + d;
        b = b - d;
        d = e.square();
        let f = a.square();
        a = c * a;
        c = b * e;
        e = a + c;
        a = a - c;
        b = a.square();
        c = d - f;
        a = c * FieldElement::A24;
        a = a + d;
        c = c * a;
        a = d * f;
        d = b * x;
        b = e.square();

        a.swap(&mut b, bit);
        c.swap(&mut d, bit);
    }

    let out = (a * c.invert()).to_bytes();

    clamped.zeroize();
    for fe in [&mut a, &mut b, &mut c, &mut d] {
        fe.zeroize();
    }

    out
}
