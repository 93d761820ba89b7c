//! # dp-solid
//!
//! Demonstrations of three SOLID principles:
//!
//! * [`open_closed`]: filtering products through composable specifications,
//!   so new criteria never require changes to the filter.
//! * [`interface_segregation`]: small `Printer` / `Scanner` traits instead
//!   of one fat `Machine` interface.
//! * [`single_responsibility`]: a `Journal` that only manages entries, with
//!   persistence moved to a separate type.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Open/closed principle (specification-based filtering).
pub mod open_closed;

/// Interface segregation principle (printers and scanners).
pub mod interface_segregation;

/// Single responsibility principle (journal and its persistence).
pub mod single_responsibility;

pub use interface_segregation::{Document, Printer, Scanner};
pub use open_closed::{BetterFilter, Filter, Product, Specification};
pub use single_responsibility::{Journal, PersistenceManager};
