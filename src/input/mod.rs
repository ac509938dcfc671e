//! Accepted input shapes and their validation into [`Sample`](crate::Sample)s.
//!
//! Data can reach a buffer row-wise ([`Row`]) or column-wise ([`Columns`]).
//! Both are turned into a complete `Vec<Sample>` before anything is stored, so
//! a malformed batch never leaves a buffer half-filled.

mod columns;
mod rows;

pub use columns::{Columns, Series};
pub use rows::Row;
pub(crate) use rows::collect_rows;
