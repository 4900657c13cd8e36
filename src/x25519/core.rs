use crate::field::FieldElement;

/// Canonical Curve25519 base point: the u-coordinate 9, little-endian.
pub const BASEPOINT: [u8; 32] = [
    9, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

/// Computes the X25519 scalar multiple of a point.
///
/// ## Inputs
///
/// - `scalar`: 32 bytes of secret key material. The value is clamped before
///   use: bits 0–2 and bit 255 are cleared and bit 254 is set, which pins
///   the scalar into the cofactor-safe range.
/// - `point`: the peer's public value as a 32-byte little-endian Montgomery
///   u-coordinate. Bit 255 is ignored during decoding.
///
/// ## Algorithm
///
/// The Montgomery ladder walks the clamped scalar from bit 254 down to
/// bit 0, maintaining two projective points `(x2:z2)` and `(x3:z3)` whose
/// difference is the input point. Each step conditionally swaps the pairs
/// with an XOR mask driven by the change in the current bit, then applies
/// one differential addition-and-doubling built from field add, sub, mul,
/// square and the `121666` scaling. After the loop one inversion converts
/// back to affine form.
///
/// ## Security
///
/// Constant-time with respect to both inputs: the bit of the scalar only
/// ever feeds the swap mask, and no branch or array index depends on
/// secret data.
pub fn scalarmult(scalar: &[u8; 32], point: &[u8; 32]) -> [u8; 32] {
    let mut e = *scalar;
    e[0] &= 248;
    e[31] &= 127;
    e[31] |= 64;

    let x1 = FieldElement::from_bytes(point);

    let mut x2 = FieldElement::ONE;
    let mut z2 = FieldElement::ZERO;
    let mut x3 = x1;
    let mut z3 = FieldElement::ONE;

    let mut swap = 0u32;

    for pos in (0..=254).rev() {
        let bit = ((e[pos >> 3] >> (pos & 7)) & 1) as u32;
        swap ^= bit;

        x2.swap(&mut x3, swap);
        z2.swap(&mut z3, swap);
        swap = bit;

        // Differential addition and doubling. With P2 = (x2:z2),
        // P3 = (x3:z3) and P3 − P2 equal to the base of the ladder:
        //
        //   a = x3 − z3      b = x2 − z2
        //   d = x3 + z3      c = x2 + z2
        //   da = a·c         cb = d·b
        //   bb = b²          cc = c²
        //
        //   2·P2     = (cc·bb : (cc − bb)·(bb + 121666·(cc − bb)))
        //   P2 + P3  = ((da + cb)² : x1·(da − cb)²)
        let a = x3 - z3;
        let b = x2 - z2;
        let c = x2 + z2;
        let d = x3 + z3;

        let da = a * c;
        let cb = d * b;

        let bb = b.square();
        let cc = c.square();
        let t = cc - bb;

        x3 = (da + cb).square();
        z3 = x1 * (da - cb).square();

        x2 = cc * bb;
        z2 = t * (bb + t.mul121666());
    }

    x2.swap(&mut x3, swap);
    z2.swap(&mut z3, swap);

    (x2 * z2.invert()).to_bytes()
}

/// Computes the X25519 scalar multiple of the canonical base point.
///
/// Equivalent to `scalarmult(scalar, &BASEPOINT)`. This is the public-key
/// derivation half of the key exchange.
pub fn scalarmult_base(scalar: &[u8; 32]) -> [u8; 32] {
    scalarmult(scalar, &BASEPOINT)
}
