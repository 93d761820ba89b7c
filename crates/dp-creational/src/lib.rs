//! # dp-creational
//!
//! Creational design patterns. Currently the Singleton: a lazily-created,
//! process-wide counter reached through [`get_instance`] and used only via
//! the [`Singleton`] capability.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Singleton pattern (process-wide counter).
pub mod singleton;

pub use singleton::{get_instance, Singleton, INITIAL_COUNT};
