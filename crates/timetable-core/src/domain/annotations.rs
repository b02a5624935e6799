//! Teacher annotations
//!
//! Free-text notes keyed by class, then by subject. Never sent to the server.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ClassConfig;

/// `annotation key -> subject -> note`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeacherAnnotations(BTreeMap<String, BTreeMap<String, String>>);

impl TeacherAnnotations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the note for `subject` under `config`'s class.
    pub fn set(&mut self, config: &ClassConfig, subject: &str, note: &str) {
        self.0
            .entry(config.annotation_key())
            .or_default()
            .insert(subject.to_string(), note.to_string());
    }

    pub fn get(&self, config: &ClassConfig, subject: &str) -> Option<&str> {
        self.0
            .get(&config.annotation_key())
            .and_then(|notes| notes.get(subject))
            .map(String::as_str)
    }

    /// All notes visible for `config`.
    pub fn for_config(&self, config: &ClassConfig) -> BTreeMap<String, String> {
        self.0
            .get(&config.annotation_key())
            .cloned()
            .unwrap_or_default()
    }

    /// Number of classes that have at least one note.
    pub fn class_count(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
