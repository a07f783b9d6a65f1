//! Utilities sub-module: argument model and parsers.

/// `Arg` and `Number`.
pub mod arguments;
/// Strict integer parsing for text arguments.
pub mod data_parsers;
