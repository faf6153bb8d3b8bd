//! Loader for JSON annotation files
//!
//! # Error Handling Strategy
//!
//! Unlike a line-oriented log parser, an annotation file is accepted or rejected as a whole:
//!
//! - **Fail fast**: The first problem (missing path, unreadable file, bad JSON, wrong shape)
//!   aborts the load. There is no partial result and no retry.
//!
//! - **One error type**: Every failure is an [`AnnotationLoadError`](crate::AnnotationLoadError)
//!   whose message names the path and the cause. Lower-level `io`/`serde_json` errors are kept as
//!   the error's `source()`.
//!
//! - **No logging**: The loader prints nothing; the caller decides whether to skip the file,
//!   log it, or abort a larger job.

pub mod annotations;

pub use annotations::load_json_annotations;
