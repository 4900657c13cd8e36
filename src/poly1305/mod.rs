//! Poly1305 one-time message authentication code (RFC 8439).
//!
//! Poly1305 evaluates a polynomial over the field `2^130 − 5` at a secret
//! point `r`, offset by a secret pad, producing a 16-byte tag. Its security
//! contract is strict: a key authenticates exactly one message. Keys are
//! therefore derived per message by the construction above this crate
//! (typically from a stream cipher block), never reused.
//!
//! The implementation is split into two layers:
//!
//! - `core`
//!   The incremental context: key clamping, block absorption with 26-bit
//!   limb accumulation, final reduction and tag serialization. The context
//!   wipes its key material and accumulator when it is consumed.
//!
//! - `mac`
//!   One-shot authenticate and verify wrappers over the context, including
//!   the constant-time tag check.

mod core;
pub mod mac;

pub use self::core::Poly1305;
