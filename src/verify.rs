//! Constant-time byte-buffer comparison.
//!
//! Authentication decisions must not leak where two buffers diverge.
//! Every function here accumulates the XOR of all byte pairs into a single
//! word and only inspects it once at the end: there is no early exit, no
//! branch per byte, and the verdict is one boolean.

/// Compares two byte slices in constant time.
///
/// Returns `true` iff the slices have equal length and equal content. On a
/// length mismatch the result is `false`, the shorter slice is still
/// consumed in full, and no byte past either slice's length is read. The
/// lengths themselves are treated as public.
pub fn verify(x: &[u8], y: &[u8]) -> bool {
    let mut diff = (x.len() ^ y.len()) as u32;

    for (a, b) in x.iter().zip(y.iter()) {
        diff |= u32::from(a ^ b);
    }

    diff == 0
}

/// Constant-time equality of two 16-byte buffers (tag sized).
#[inline]
pub fn verify_16(x: &[u8; 16], y: &[u8; 16]) -> bool {
    verify(x, y)
}

/// Constant-time equality of two 32-byte buffers (key and point sized).
#[inline]
pub fn verify_32(x: &[u8; 32], y: &[u8; 32]) -> bool {
    verify(x, y)
}
