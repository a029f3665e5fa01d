//! Mapping store - description-pattern rules on disk

use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};

use crate::domain::result::{Error, Result};
use crate::domain::Mapping;

use super::{load_json, save_json};

/// File-backed pattern-to-category mapping.
///
/// Iteration order is insertion order, which is also the categorization
/// precedence. Upserting an existing pattern keeps its original position so
/// precedence stays stable across re-mapping.
pub struct MappingStore {
    path: PathBuf,
    mappings: RwLock<Vec<Mapping>>,
}

impl MappingStore {
    /// Open the store at `path`. A missing file starts the store empty;
    /// a malformed file is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let mappings = load_json::<Vec<Mapping>>(&path)?.unwrap_or_default();
        Ok(Self {
            path,
            mappings: RwLock::new(mappings),
        })
    }

    /// All mappings in precedence order
    pub fn list(&self) -> Vec<Mapping> {
        self.read().clone()
    }

    /// Unconditional upsert: a known pattern gets its category replaced in
    /// place, a new pattern is appended.
    pub fn add(&self, pattern: &str, category_id: &str) -> Result<()> {
        let mut mappings = self.write();

        if let Some(existing) = mappings.iter_mut().find(|m| m.pattern == pattern) {
            existing.category_id = category_id.to_string();
        } else {
            mappings.push(Mapping {
                pattern: pattern.to_string(),
                category_id: category_id.to_string(),
            });
        }

        save_json(&self.path, &*mappings)
    }

    /// Remove a mapping by pattern
    pub fn delete(&self, pattern: &str) -> Result<()> {
        let mut mappings = self.write();

        let before = mappings.len();
        mappings.retain(|m| m.pattern != pattern);
        if mappings.len() == before {
            return Err(Error::not_found(format!("mapping: {pattern}")));
        }

        save_json(&self.path, &*mappings)
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<Mapping>> {
        self.mappings.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Mapping>> {
        self.mappings.write().unwrap_or_else(PoisonError::into_inner)
    }
}
