//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::TempDir;

/// Builder for creating directories of test annotation files
pub struct AnnotationDirBuilder {
    temp_dir: TempDir,
}

impl AnnotationDirBuilder {
    /// Create a new builder with an empty directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a file with the given raw content
    pub fn with_file(self, name: &str, content: &str) -> Self {
        let file_path = self.temp_dir.path().join(name);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(file_path, content).expect("Failed to write annotation file");
        self
    }

    /// Add a file holding a JSON array of the given annotations
    pub fn with_annotations(self, name: &str, annotations: &[AnnotationBuilder]) -> Self {
        let content =
            serde_json::to_string_pretty(annotations).expect("Failed to serialize annotations");
        self.with_file(name, &content)
    }

    /// Add an empty subdirectory
    pub fn with_dir(self, name: &str) -> Self {
        fs::create_dir_all(self.temp_dir.path().join(name)).expect("Failed to create dir");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for AnnotationDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a single annotation record
#[derive(Debug, Clone, Serialize)]
pub struct AnnotationBuilder {
    id: u64,
    image: String,
    label: String,
    bbox: [f64; 4],
    #[serde(skip_serializing_if = "Option::is_none")]
    score: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tags: Vec<String>,
}

impl AnnotationBuilder {
    /// Create a new annotation with default values
    pub fn new(id: u64) -> Self {
        Self {
            id,
            image: format!("img_{:04}.png", id),
            label: "cell".to_string(),
            bbox: [0.0, 0.0, 10.0, 10.0],
            score: None,
            tags: Vec::new(),
        }
    }

    /// Set the label
    pub fn label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    /// Set the bounding box
    pub fn bbox(mut self, bbox: [f64; 4]) -> Self {
        self.bbox = bbox;
        self
    }

    /// Set the reviewer score
    pub fn score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    /// Add a tag
    pub fn tag(mut self, tag: &str) -> Self {
        self.tags.push(tag.to_string());
        self
    }
}

/// Path of a file inside a built directory
pub fn file_in(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

/// Directory with a mix of good and bad annotation files
pub fn realistic_annotation_dir() -> TempDir {
    AnnotationDirBuilder::new()
        .with_annotations(
            "batch1.json",
            &[
                AnnotationBuilder::new(1).label("nucleus").score(0.93).tag("reviewed"),
                AnnotationBuilder::new(2).label("cell").bbox([4.0, 8.0, 32.5, 40.0]),
                AnnotationBuilder::new(3).label("debris").score(0.12),
            ],
        )
        .with_file("empty.json", "[]")
        .with_file("top_level_object.json", r#"{"annotations": []}"#)
        .with_file("mixed_items.json", r#"[{"id": 1}, {"id": 2}, "three"]"#)
        .with_file("truncated.json", "[{\"id\": 1},\n{\"id\": 2")
        .with_dir("nested")
        .build()
}
