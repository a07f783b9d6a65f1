//! # wd-core
//!
//! Core types shared across the workdays workspace: the error taxonomy,
//! the `ensure!` macro, and the loosely typed argument model used by the
//! work-week entry point.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Argument model and parsing helpers.
pub mod utilities;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Field, Result};
pub use utilities::arguments::{Arg, Number};
