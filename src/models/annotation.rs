use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

/// A single annotation entry: one JSON object from the loaded array
pub type Record = Map<String, Value>;

/// The normalized output of loading an annotation file
///
/// Fields are private; a `LoadResult` cannot be modified after the loader builds it.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadResult {
    path: PathBuf,
    records: Vec<Record>,
}

impl LoadResult {
    pub(crate) fn new(path: PathBuf, records: Vec<Record>) -> Self {
        Self { path, records }
    }

    /// Path the records were loaded from, after `~` expansion
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records in the order they appeared in the file
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    pub fn into_parts(self) -> (PathBuf, Vec<Record>) {
        (self.path, self.records)
    }
}

impl<'a> IntoIterator for &'a LoadResult {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Name of a JSON value's type, as used in validation errors
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
