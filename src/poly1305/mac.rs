use super::Poly1305;
use crate::verify::verify_16;

/// Computes the Poly1305 tag for a message under a one-time key.
///
/// Convenience wrapper over the incremental context for callers that have
/// the whole message in memory.
pub fn authenticate(message: &[u8], key: &[u8; 32]) -> [u8; 16] {
    let mut mac = Poly1305::new(key);
    mac.update(message);
    mac.finish()
}

/// Checks a Poly1305 tag against a message and key.
///
/// The expected tag is recomputed and compared in constant time: both tags
/// are consumed in full, and the single boolean result is all the caller
/// learns. Returns `true` only for an exact match.
pub fn verify(tag: &[u8; 16], message: &[u8], key: &[u8; 32]) -> bool {
    verify_16(&authenticate(message, key), tag)
}
