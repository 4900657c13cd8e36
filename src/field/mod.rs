//! Finite field arithmetic for Curve25519.
//!
//! This module implements arithmetic in the prime field
//!
//! ```text
//! 𝔽ₚ where p = 2²⁵⁵ − 19
//! ```
//!
//! underlying the Curve25519 Montgomery ladder. The same field backs the
//! Edwards-curve group arithmetic used for signatures, which is why the
//! type is exported even though scalar multiplication is its only consumer
//! inside this crate.
//!
//! ## Representation
//!
//! A field element is stored as 10 signed 32-bit limbs in a mixed radix
//! with alternating limb widths:
//!
//! ```text
//! [26, 25, 26, 25, 26, 25, 26, 25, 26, 25] bits
//! ```
//!
//! Limb `i` therefore carries the bits starting at offset `⌈25.5·i⌉` of the
//! 255-bit integer. Additions and subtractions are lazy: they may leave
//! limbs outside their nominal width, and the next multiplication, squaring
//! or encoding restores the invariant. All intermediate products are
//! accumulated in `i64`, which comfortably holds the worst-case sums of the
//! cross products.
//!
//! ## Constant-time behavior
//!
//! Every operation in this module executes the same instruction trace for
//! every input value. There are no data-dependent branches and no
//! data-dependent memory accesses; the conditional swap used by the ladder
//! is realized with an XOR mask.

use std::array;
use std::ops::{Add, Mul, Sub};

/// Bit offset of each limb inside the 255-bit little-endian integer.
const LIMB_OFFSETS: [usize; 10] = [0, 26, 51, 77, 102, 128, 153, 179, 204, 230];

/// Width in bits of limb `i`: 26 for even limbs, 25 for odd limbs.
#[inline(always)]
const fn limb_width(index: usize) -> u32 {
    if index & 1 == 0 { 26 } else { 25 }
}

/// Load 4 bytes from a little-endian byte slice into a `u32`.
#[inline(always)]
fn load_4(input: &[u8]) -> u32 {
    u32::from_le_bytes([input[0], input[1], input[2], input[3]])
}

/// Field element modulo `2^255 − 19` in radix `2^25.5`.
///
/// See the module documentation for the limb layout and reduction rules.
#[derive(Clone, Copy)]
pub struct FieldElement(pub(crate) [i32; 10]);

impl FieldElement {
    /// The additive identity (0).
    pub const ZERO: Self = FieldElement([0i32; 10]);

    /// The multiplicative identity (1).
    pub const ONE: Self = FieldElement([1, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

    /// Decode a field element from its 32-byte little-endian encoding.
    ///
    /// The input is read as a 255-bit integer: each limb is a windowed load
    /// at its bit offset, masked to the limb width, and the top bit of the
    /// last byte is ignored. No reduction is performed; the decoded value
    /// may be any integer in `[0, 2^255)`, including values at or above the
    /// modulus. `to_bytes` canonicalizes on the way out.
    pub fn from_bytes(input: &[u8; 32]) -> FieldElement {
        FieldElement(array::from_fn(|index| {
            let offset = LIMB_OFFSETS[index];
            let mask = (1u32 << limb_width(index)) - 1;

            ((load_4(&input[offset / 8..]) >> (offset % 8)) & mask) as i32
        }))
    }

    /// Encode this field element into its canonical 32-byte form.
    ///
    /// The encoding is the unique little-endian representative in
    /// `[0, 2^255 − 19)`. Reduction happens in two passes: the first chains
    /// the would-be carries through all ten limbs to recover the quotient by
    /// `p`, which is then folded back into limb 0 as `19·q`; the second is a
    /// plain sequential carry sweep whose final carry is discarded.
    pub fn to_bytes(self) -> [u8; 32] {
        let mut h = self.0.map(|limb| limb as i64);

        // First pass: determine how many times p divides the value.
        let mut q = (19 * h[9] + (1i64 << 24)) >> 25;
        for (index, limb) in h.iter().enumerate() {
            q = (limb + q) >> limb_width(index);
        }
        h[0] += 19 * q;

        // Second pass: sequential carry propagation. The carry out of the
        // top limb is exactly q·2^255 and is dropped.
        for index in 0..10 {
            let carry = h[index] >> limb_width(index);
            h[index] -= carry << limb_width(index);
            if index < 9 {
                h[index + 1] += carry;
            }
        }

        // Pack the normalized limbs back at their bit offsets.
        let mut output = [0u8; 32];
        for (index, &limb) in h.iter().enumerate() {
            let offset = LIMB_OFFSETS[index];
            let value = (limb as u64) << (offset % 8);

            for (k, byte) in output[offset / 8..].iter_mut().take(5).enumerate() {
                *byte |= (value >> (8 * k)) as u8;
            }
        }

        output
    }

    /// Constant-time conditional swap.
    ///
    /// If `condition == 1`, exchanges `self` and `rhs`; if `condition == 0`,
    /// leaves both untouched. The selection is an XOR mask, so the
    /// instruction trace is identical either way. This is the only
    /// data-movement primitive the Montgomery ladder is allowed to key on
    /// secret bits.
    pub fn swap(&mut self, rhs: &mut Self, condition: u32) {
        let mask = -(condition as i32);

        for (s, r) in self.0.iter_mut().zip(rhs.0.iter_mut()) {
            let diff = (*s ^ *r) & mask;
            *s ^= diff;
            *r ^= diff;
        }
    }

    /// Reduce a widened limb vector back into canonical limb widths.
    ///
    /// Applies the fixed carry chain `0,4,1,5,2,6,3,7,4,8,9,0` with rounding
    /// carries. The carry leaving limb 9 wraps into limb 0 scaled by 19,
    /// following `2^255 ≡ 19 (mod p)`. The chain order guarantees that every
    /// limb ends within one bit of its nominal width regardless of how large
    /// the accumulated products were.
    fn reduce(mut h: [i64; 10]) -> FieldElement {
        for &index in &[0, 4, 1, 5, 2, 6, 3, 7, 4, 8, 9, 0] {
            let width = limb_width(index);
            let carry = (h[index] + (1i64 << (width - 1))) >> width;

            h[index] -= carry << width;
            if index == 9 {
                h[0] += carry * 19;
            } else {
                h[index + 1] += carry;
            }
        }

        FieldElement(h.map(|limb| limb as i32))
    }

    /// Computes the square of this field element.
    ///
    /// Same cross-product expansion as multiplication, restricted to the
    /// upper triangle: off-diagonal products appear twice and are doubled
    /// instead of recomputed. Cheaper than `self * self`, identical result.
    pub fn square(self) -> FieldElement {
        let f = self.0;
        let mut h = [0i64; 10];

        for i in 0..10 {
            for j in i..10 {
                let mut product = (f[i] as i64) * (f[j] as i64);

                if i != j {
                    product *= 2;
                }
                if i & 1 == 1 && j & 1 == 1 {
                    product *= 2;
                }

                if i + j >= 10 {
                    h[i + j - 10] += product * 19;
                } else {
                    h[i + j] += product;
                }
            }
        }

        Self::reduce(h)
    }

    /// Repeatedly squares this field element `n` times, computing
    /// `self^(2ⁿ)`. The iteration count depends only on `n`, never on the
    /// value, so exponentiation chains built from it stay constant-time.
    pub fn n_square(self, n: usize) -> FieldElement {
        (0..n).fold(self, |acc, _| acc.square())
    }

    /// Multiplies this field element by the curve constant `121666`.
    ///
    /// The constant is `(A − 2) / 4` for the Montgomery curve
    /// `y² = x³ + 486662·x² + x` and shows up once per ladder step. A full
    /// multiplication would be wasted on it; each limb is scaled directly
    /// and the result goes through the ordinary carry chain.
    pub fn mul121666(self) -> Self {
        Self::reduce(self.0.map(|limb| limb as i64 * 121_666))
    }

    /// Computes the multiplicative inverse of this field element.
    ///
    /// By Fermat's little theorem the inverse of `x` is `x^(p−2)`, with
    /// `p − 2 = 2^255 − 21`. The exponent is realized by a fixed chain of
    /// squarings and multiplications; the chain shape depends only on the
    /// exponent, so the computation never branches on the operand. Inverting
    /// zero yields zero, which the ladder's final division tolerates.
    pub fn invert(&self) -> Self {
        let z = *self;

        let t0 = z.square();
        let mut t1 = t0.n_square(2);
        t1 = z * t1;
        let t0 = t0 * t1;

        let mut t2 = t0.square();
        t1 = t1 * t2;

        t2 = t1.n_square(5);
        t1 = t2 * t1;

        t2 = t1.n_square(10);
        t2 = t2 * t1;

        let mut t3 = t2.n_square(20);
        t2 = t3 * t2;

        t2 = t2.n_square(10);
        t1 = t2 * t1;

        t2 = t1.n_square(50);
        t2 = t2 * t1;

        t3 = t2.n_square(100);
        t2 = t3 * t2;

        t2 = t2.n_square(50);
        t1 = t2 * t1;

        t1 = t1.n_square(5);

        t1 * t0
    }
}

/// Limb-wise addition, unreduced.
///
/// Canonical limbs fit 26 bits, so the sum stays far below `i32` range; the
/// next multiplication, squaring or encoding absorbs the excess width.
impl Add for FieldElement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        FieldElement(array::from_fn(|index| self.0[index] + rhs.0[index]))
    }
}

/// Limb-wise subtraction, unreduced. Limbs may go negative; the signed
/// representation and the rounding carries in `reduce` are built for it.
impl Sub for FieldElement {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        FieldElement(array::from_fn(|index| self.0[index] - rhs.0[index]))
    }
}

/// Field multiplication.
///
/// Full cross-product expansion over the 10-limb representation. Two
/// corrections keep the products aligned with the mixed radix:
///
/// - a product of two odd-indexed limbs sits one bit short of its target
///   weight (`⌈25.5i⌉ + ⌈25.5j⌉ = ⌈25.5(i+j)⌉ + 1` exactly when both
///   indices are odd) and is doubled;
/// - a product whose index sum reaches past limb 9 wraps around scaled by
///   19, following `2^255 ≡ 19 (mod p)`.
///
/// Accumulation happens in `i64`: with operand limbs bounded by `2^27`
/// (one lazy addition on top of reduced values) the ten summed terms per
/// output limb stay below `2^63`. The shared carry chain in `reduce`
/// brings the result back to canonical widths.
impl Mul for FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: Self) -> Self::Output {
        let f = self.0;
        let g = rhs.0;
        let mut h = [0i64; 10];

        for i in 0..10 {
            for j in 0..10 {
                let mut product = (f[i] as i64) * (g[j] as i64);

                if i & 1 == 1 && j & 1 == 1 {
                    product *= 2;
                }

                if i + j >= 10 {
                    h[i + j - 10] += product * 19;
                } else {
                    h[i + j] += product;
                }
            }
        }

        Self::reduce(h)
    }
}
