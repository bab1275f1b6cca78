//! Rendering of JSON values for human inspection.
//!
//! Handles classified pretty-printing and colorized terminal output.

pub mod json_printer;
pub mod terminal;
