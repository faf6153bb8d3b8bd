//! Data models for loaded annotation files.
//!
//! - [`Record`] - One annotation entry: a JSON object with arbitrary keys
//! - [`LoadResult`] - The validated, read-only output of a load
//!
//! Records are kept as `serde_json` value trees; this crate does not interpret annotation
//! semantics.

pub mod annotation;

pub use annotation::{LoadResult, Record, json_type_name};
