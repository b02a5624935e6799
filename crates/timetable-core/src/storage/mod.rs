//! Persisted Local Storage
//!
//! A string key-value seam. Values are JSON documents; the store decides
//! what goes in them.

mod memory;

pub use memory::MemoryStore;

use crate::error::StorageError;

/// Entry holding the active `ClassConfig`.
pub const CLASS_CONFIG_KEY: &str = "classConfig";
/// Entry holding the full `TeacherAnnotations` map.
pub const TEACHER_INFO_KEY: &str = "teacherInfo";

/// Durable string storage that survives reloads.
///
/// Writes are treated as local and effectively synchronous.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}
