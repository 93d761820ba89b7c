//! # dp-core
//!
//! Core types and error definitions for design-patterns-rs.
//!
//! This crate provides the building blocks shared across the pattern
//! crates in the workspace: the error hierarchy and the primitive type
//! aliases.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Value held by counters (the singleton's `count`).
pub type Count = i64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
