//! BLAKE2s cryptographic hash (RFC 7693).
//!
//! BLAKE2s is the 32-bit-word member of the BLAKE2 family, producing
//! digests of up to 32 bytes over 64-byte blocks with an optional key of up
//! to 32 bytes. The keyed mode makes it a MAC in its own right; the unkeyed
//! mode is a general-purpose cryptographic hash.
//!
//! ## Structure
//!
//! - `core`
//!   The incremental context (`Blake2s`) with the 10-round ARX compression
//!   function, plus one-shot convenience functions.
//!
//! This crate fixes the digest length at the 32-byte maximum and the
//! sequential mode of operation (fanout 1, depth 1); tree hashing is not
//! implemented.

mod core;

pub use self::core::{Blake2s, blake2s, blake2s_keyed};

/// Size of a compression-function input block in bytes.
pub const BLOCKBYTES: usize = 64;

/// Size of the produced digest in bytes.
pub const OUTBYTES: usize = 32;

/// Maximum key length in bytes; longer keys are truncated.
pub const KEYBYTES: usize = 32;
