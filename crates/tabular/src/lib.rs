//! Column inference for whitespace-delimited tabular text.
//!
//! Given a block of text whose rows are meant to line up into columns
//! separated by runs of spaces, this crate works out where each column
//! begins and ends and splits every row into per-column fields. There is
//! no schema and no explicit delimiter: boundaries are inferred from the
//! statistics of space characters across all rows, which is what makes
//! embedded spaces ("NEW JERSEY"), ragged short rows, and right-justified
//! numeric fields survivable.
//!
//! # Architecture
//!
//! - `profile.rs`: per-column space counting over the whole block
//! - `table.rs`: threshold search, boundary scan, field extraction
//! - `error.rs`: the single reportable failure
//!
//! Input is expected to be pre-regularized by the `regular` crate: the
//! only whitespace this crate understands is the space character and the
//! `\n` row separator. Everything is synchronous and in-memory; a built
//! [`TableText`] is immutable and safe to query from multiple threads.

pub mod error;
pub mod profile;
pub mod table;

// Re-export commonly used types
pub use error::{TabulateError, TabulateResult};
pub use table::{RowColumnList, TableText};
