//! Finite field arithmetic for Curve25519.
//!
//! This module implements arithmetic in the prime field
//!
//! ```text
//! 𝔽ₚ where p = 2²⁵⁵ − 19
//! ```
//!
//! ## Representation
//!
//! Field elements are represented as 16 signed 64-bit limbs in radix 2¹⁶:
//!
//! ```text
//! value = Σ limb[i] · 2^(16·i),   i = 0..16
//! ```
//!
//! Additions and subtractions are performed limb-wise without reduction,
//! so limbs may temporarily leave the 16-bit range (or become negative).
//! Multiplication accumulates up to 38-bit products per limb, which the
//! 64-bit limb type absorbs without overflow, and then folds the result
//! back into 16-bit limbs with [`FieldElement::carry`].
//!
//! The value held by a `FieldElement` is only congruent to the intended
//! integer modulo `p`. The unique representative in `[0, p)` is produced
//! by [`FieldElement::to_bytes`].
//!
//! ## Reduction identity
//!
//! The 16 limbs cover 256 bits. Anything carried past the top limb lands
//! at weight `2²⁵⁶ = 2 · 2²⁵⁵ ≡ 2 · 19 = 38 (mod p)`, which is why both
//! carry propagation and multiplication fold overflow back into limb 0
//! (or the corresponding low limb) multiplied by 38.
//!
//! ## Constant-time behavior
//!
//! No operation in this module branches on, or indexes memory with, the
//! value of a field element. [`FieldElement::swap`] selects with an
//! arithmetic mask.

use std::array;
use std::ops::{Add, Mul, Sub};

use zeroize::Zeroize;

/// Number of radix-2¹⁶ limbs in a field element.
pub(crate) const LIMBS: usize = 16;

/// Field element modulo `2^255 - 19`, represented in radix `2^16`.
#[derive(Clone, Copy, Debug, Zeroize)]
pub(crate) struct FieldElement(pub(crate) [i64; LIMBS]);

impl FieldElement {
    /// The additive identity (0).
    pub(crate) const ZERO: Self = FieldElement([0; LIMBS]);

    /// The multiplicative identity (1).
    pub(crate) const ONE: Self = FieldElement([1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

    /// The ladder constant `(A − 2) / 4 = 121665` for `A = 486662`.
    ///
    /// Stored as `0xDB41 + 1 · 2¹⁶`.
    pub(crate) const A24: Self = FieldElement([0xDB41, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

    /// Propagates carries so that every limb returns to 16 bits.
    ///
    /// Each limb keeps its low 16 bits and passes the (arithmetic, signed)
    /// excess to the next limb. The excess of limb 15 sits at weight 2²⁵⁶
    /// and is folded into limb 0 multiplied by 38.
    ///
    /// One pass may leave limb 0 slightly above 16 bits after the fold; a
    /// second pass settles it.
    pub(crate) fn carry(&mut self) {
        for index in 0..LIMBS {
            let carry = self.0[index] >> 16;
            self.0[index] -= carry << 16;

            if index < LIMBS - 1 {
                self.0[index + 1] += carry;
            } else {
                self.0[0] += 38 * carry;
            }
        }
    }

    /// Constant-time conditional swap of two field elements.
    ///
    /// If `condition == 1`, swaps `self` and `rhs`.
    /// If `condition == 0`, does nothing.
    ///
    /// The mask is `0` or all-ones and both elements are rewritten in
    /// either case, so the instruction sequence is identical for both
    /// values of `condition`.
    #[inline(always)]
    pub(crate) fn swap(&mut self, rhs: &mut Self, condition: u32) {
        let mask = -(condition as i64);

        for (s, r) in self.0.iter_mut().zip(rhs.0.iter_mut()) {
            let tmp = mask & (*s ^ *r);
            *s ^= tmp;
            *r ^= tmp;
        }
    }

    /// Squares this field element.
    #[inline(always)]
    pub(crate) fn square(self) -> Self {
        self * self
    }

    /// Computes the multiplicative inverse `self^(p − 2)`.
    ///
    /// By Fermat's little theorem `a^(p−1) ≡ 1`, so `a^(p−2) ≡ a⁻¹` for any
    /// non-zero `a`. Zero maps to zero.
    ///
    /// The exponent `p − 2 = 2²⁵⁵ − 21` has bits 254..0 all set except
    /// bits 4 and 2 (`21 − 1 = 0b10100` is subtracted from `2²⁵⁵ − 1`).
    /// Starting from `a` for bit 254, each remaining bit costs one squaring
    /// and, where the bit is set, one multiplication by `a`. The skipped
    /// positions depend only on the public exponent.
    pub(crate) fn invert(&self) -> Self {
        let mut result = *self;

        for bit in (0..=253).rev() {
            result = result.square();

            if bit != 2 && bit != 4 {
                result = result * *self;
            }
        }

        result
    }
}

impl Add for FieldElement {
    type Output = Self;

    /// Limb-wise addition without reduction.
    fn add(self, rhs: Self) -> Self::Output {
        FieldElement(array::from_fn(|index| self.0[index] + rhs.0[index]))
    }
}

impl Sub for FieldElement {
    type Output = Self;

    /// Limb-wise subtraction without reduction. Limbs may become negative.
    fn sub(self, rhs: Self) -> Self::Output {
        FieldElement(array::from_fn(|index| self.0[index] - rhs.0[index]))
    }
}

impl Mul for FieldElement {
    type Output = Self;

    /// Schoolbook multiplication followed by reduction modulo `p`.
    ///
    /// The 31-limb product `Σ a[i]·b[j]·2^(16(i+j))` is computed first.
    /// Limb `k ≥ 16` has weight `2^(16k) = 2²⁵⁶ · 2^(16(k−16))`, so it is
    /// added into limb `k − 16` multiplied by 38. Two carry passes then
    /// bring all limbs back to 16 bits.
    fn mul(self, rhs: Self) -> Self::Output {
        let mut product = [0i64; 2 * LIMBS - 1];

        for (i, a) in self.0.iter().enumerate() {
            for (j, b) in rhs.0.iter().enumerate() {
                product[i + j] += a * b;
            }
        }

        for index in 0..LIMBS - 1 {
            product[index] += 38 * product[index + LIMBS];
        }

        let mut out = FieldElement(array::from_fn(|index| product[index]));
        out.carry();
        out.carry();

        out
    }
}
