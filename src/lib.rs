//! annotqc - Load and validate JSON annotation files for QC pipelines
//!
//! This library is the ingestion boundary for annotation data. It reads a JSON file whose top
//! level is an array of objects and returns the records unchanged, or a descriptive error:
//!
//! - Expanding `~` in input paths
//! - Rejecting missing paths, directories, unreadable files and malformed JSON
//! - Checking that the file is an array and that every item is an object
//!
//! # Example
//!
//! ```no_run
//! use annotqc::load_json_annotations;
//!
//! let result = load_json_annotations("~/qc/annotations.json")?;
//! for record in result.records() {
//!     println!("{:?}", record.get("label"));
//! }
//! # Ok::<(), annotqc::AnnotationLoadError>(())
//! ```

pub mod cli;
pub mod error;
pub mod models;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use error::{AnnotationLoadError, LoadErrorKind, Result};
pub use models::{LoadResult, Record};
pub use parsers::load_json_annotations;
pub use utils::paths::{expand_tilde, format_path_with_tilde};
