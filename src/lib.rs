//! Command-line option extraction.
//!
//! This crate provides a structured approach to splitting a raw argument
//! list into its recognized parts:
//!
//! ```text
//! Raw args → extract flags → extract assignments
//! ```
//!
//! Each stage is a pure function that can be unit-tested independently.
//! [`extract_flags`] splits recognized flag tokens (`-name` / `--name`) out
//! of an argument list; [`extract_assignments`] drops the leading token and
//! returns the remaining `key=value` strings untouched. [`extract`] runs
//! both stages in order.
//!
//! There is no parsing grammar here: flag matching is exact string
//! equality, and assignment strings are passed through raw. Callers that
//! need validation do it on the output.

mod assignments;
mod flags;
mod pipeline;

pub use assignments::extract_assignments;
pub use flags::{extract_flags, FlagExtraction};
pub use pipeline::{extract, Extraction};
