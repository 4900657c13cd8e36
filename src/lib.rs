//! Low-level cryptographic primitives.
//!
//! This crate provides from-scratch implementations of the three numeric
//! workhorses of the NaCl-style constructions: Curve25519 scalar
//! multiplication, the Poly1305 one-time authenticator, and the BLAKE2s
//! hash. The focus is on **bit-exact correctness, constant-time execution,
//! and auditability** rather than on a high-level protocol API: stream
//! ciphers, authenticated encryption, signing, and randomness live in the
//! layers built on top of this crate.
//!
//! # Module overview
//!
//! - `field`
//!   Arithmetic in the prime field 𝔽ₚ with `p = 2²⁵⁵ − 19`, using the
//!   10-limb radix-2²⁵·⁵ representation. This is the foundation of the
//!   Curve25519 ladder and is exported for Edwards-curve consumers that
//!   share the field.
//!
//! - `x25519`
//!   Constant-time X25519 Diffie–Hellman scalar multiplication over the
//!   Montgomery form of Curve25519 (RFC 7748), built solely on `field`.
//!
//! - `poly1305`
//!   The Poly1305 one-time message authentication code (RFC 8439), as an
//!   incremental context plus one-shot authenticate/verify helpers. The
//!   context wipes its secrets when consumed.
//!
//! - `blake2s`
//!   The BLAKE2s cryptographic hash (RFC 7693) with optional keying, as an
//!   incremental context plus one-shot helpers.
//!
//! - `verify`
//!   Constant-time byte-buffer comparison, the only equality primitive the
//!   layers above are expected to use on secret-derived data.
//!
//! # Design goals
//!
//! - No secret-dependent branches or memory accesses
//! - No heap allocations in any primitive
//! - Minimal, explicit APIs over fixed-size byte buffers
//! - Contexts that make misuse (double finalization, update after
//!   finalization) unrepresentable rather than merely documented
//!
//! Poly1305 and BLAKE2s are independent of the curve arithmetic and of
//! each other; nothing here performs I/O or holds process-wide state.

pub mod blake2s;
pub mod field;
pub mod poly1305;
pub mod verify;
pub mod x25519;
