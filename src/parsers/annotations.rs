use std::fs;
use std::io;
use std::path::Path;

use serde_json::Value;

use crate::error::{AnnotationLoadError, Result};
use crate::models::{LoadResult, Record, json_type_name};
use crate::utils::paths::expand_tilde_internal;

/// Load annotations from a JSON file
///
/// Expected format (v0): a top-level JSON array whose items are all JSON objects. Key names
/// and value types inside each object are not checked.
///
/// `~` at the start of `path` is expanded to the home directory; the expanded path is what
/// gets stored on the returned [`LoadResult`] and reported in errors.
///
/// # Errors
///
/// Returns an [`AnnotationLoadError`] if:
/// - The path does not exist
/// - The path exists but is not a regular file
/// - The file cannot be read (permissions, I/O failure, invalid UTF-8)
/// - The contents are not valid JSON (the error carries the parser's line and column)
/// - The top-level value is not an array
/// - Any item of the array is not an object (the first offending index is reported)
///
/// Validation stops at the first bad item; no partial result is returned.
///
/// # Examples
///
/// ```no_run
/// use annotqc::load_json_annotations;
///
/// let result = load_json_annotations("~/qc/annotations.json")?;
/// println!("Loaded {} records from {}", result.len(), result.path().display());
/// # Ok::<(), annotqc::AnnotationLoadError>(())
/// ```
pub fn load_json_annotations(path: impl AsRef<Path>) -> Result<LoadResult> {
    load_json_annotations_internal(path.as_ref(), dirs::home_dir().as_deref())
}

/// Internal loader with an explicit home directory for `~` expansion (for testing)
pub(crate) fn load_json_annotations_internal(
    path: &Path,
    home: Option<&Path>,
) -> Result<LoadResult> {
    let path = expand_tilde_internal(path, home);

    let metadata = match fs::metadata(&path) {
        Ok(metadata) => metadata,
        Err(e) if is_missing(&e) => return Err(AnnotationLoadError::NotFound { path }),
        Err(source) => return Err(AnnotationLoadError::Read { path, source }),
    };

    if !metadata.is_file() {
        return Err(AnnotationLoadError::NotAFile { path });
    }

    // Handle is opened and closed inside read_to_string
    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(source) => return Err(AnnotationLoadError::Read { path, source }),
    };

    let data: Value = match serde_json::from_str(&contents) {
        Ok(data) => data,
        Err(source) => return Err(AnnotationLoadError::invalid_json(path, source)),
    };

    let items = match data {
        Value::Array(items) => items,
        other => {
            return Err(AnnotationLoadError::UnexpectedTopLevel {
                path,
                found: json_type_name(&other),
            });
        }
    };

    let mut records: Vec<Record> = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match item {
            Value::Object(record) => records.push(record),
            other => {
                return Err(AnnotationLoadError::UnexpectedItem {
                    path,
                    index,
                    found: json_type_name(&other),
                });
            }
        }
    }

    Ok(LoadResult::new(path, records))
}

/// Metadata errors that mean "nothing usable at this path": missing entries, a regular file
/// used as a directory, and symlink loops
fn is_missing(e: &io::Error) -> bool {
    if matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory) {
        return true;
    }

    #[cfg(unix)]
    if e.raw_os_error() == Some(libc::ELOOP) {
        return true;
    }

    false
}
