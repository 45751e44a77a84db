//! # dow-core
//!
//! Core types and error definitions for dayofweek.
//!
//! This crate provides the building blocks shared by the other crates in the
//! workspace: integer aliases, the error type with its `ensure!` / `fail!`
//! macros, and small numeric helpers.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error type and the `ensure!` / `fail!` macros.
pub mod errors;

/// Miscellaneous numeric utilities.
pub mod utilities;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Integer type used for years.
pub type Integer = i32;

/// Large integer used for signed day counts.
pub type BigInteger = i64;

/// Large non-negative integer used for unsigned day counts.
pub type BigNatural = u64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use utilities::numeric::abs_int;
