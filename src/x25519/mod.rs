//! X25519 Diffie–Hellman scalar multiplication (RFC 7748).
//!
//! This module computes scalar multiples of points on Curve25519 given by
//! their Montgomery u-coordinate, the operation underlying X25519 key
//! agreement.
//!
//! ## Structure
//!
//! - `core`
//!   Scalar clamping, the constant-time Montgomery ladder, and the final
//!   projective-to-affine conversion, built exclusively on the field
//!   arithmetic in [`crate::field`].
//!
//! The split mirrors the other primitive modules in this crate: the
//! algorithm lives in an internal `core`, and the module re-exports a
//! small, explicit surface.
//!
//! ## Notes
//!
//! - Peer public keys are not validated beyond decoding; low-order inputs
//!   produce an all-zero output, which callers concerned about contributory
//!   behavior must check for themselves. This matches X25519 semantics.
//! - Signatures are out of scope here. The Edwards-curve group arithmetic
//!   used for signing shares the field but not this ladder.

mod core;

pub use self::core::{BASEPOINT, scalarmult, scalarmult_base};
