//! # design-patterns
//!
//! Creational design patterns and SOLID principles, expressed in Rust.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `dp-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use design_patterns::creational::get_instance;
//!
//! let counter = get_instance();
//! let next = counter.add_one();
//! assert_eq!(get_instance().add_one(), next + 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core aliases and error definitions.
pub use dp_core as core;

/// Creational patterns (singleton).
pub use dp_creational as creational;

/// SOLID principle demonstrations.
pub use dp_solid as solid;
