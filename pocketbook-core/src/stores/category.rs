//! Category store - user-defined categories on disk

use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};

use uuid::Uuid;

use crate::domain::result::{Error, Result};
use crate::domain::{Category, CategoryUpdate, NewCategory};

use super::{load_json, save_json};

/// File-backed category collection.
///
/// Listing order is insertion order on disk and doubles as the stable
/// display order.
pub struct CategoryStore {
    path: PathBuf,
    categories: RwLock<Vec<Category>>,
}

impl CategoryStore {
    /// Open the store at `path`. A missing file starts the store empty;
    /// a malformed file is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let categories = load_json::<Vec<Category>>(&path)?.unwrap_or_default();
        Ok(Self {
            path,
            categories: RwLock::new(categories),
        })
    }

    /// All categories in insertion order
    pub fn list(&self) -> Vec<Category> {
        self.read().clone()
    }

    /// Resolve a category id to its display name
    pub fn name_of(&self, id: &str) -> Option<String> {
        self.read().iter().find(|c| c.id == id).map(|c| c.name.clone())
    }

    /// Add a category, generating an id when none is given.
    /// Fails if another category already carries the same name.
    pub fn add(&self, new: NewCategory) -> Result<Category> {
        let mut categories = self.write();

        if categories.iter().any(|c| c.name == new.name) {
            return Err(Error::validation(format!(
                "category name already exists: {}",
                new.name
            )));
        }

        let category = Category {
            id: new
                .id
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: new.name,
            color: new.color,
        };
        categories.push(category.clone());
        save_json(&self.path, &*categories)?;
        Ok(category)
    }

    /// Merge the provided fields into an existing category. The id is
    /// forcibly preserved; unspecified fields keep their previous value.
    pub fn update(&self, id: &str, update: CategoryUpdate) -> Result<Category> {
        let mut categories = self.write();

        let category = categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| Error::not_found(format!("category: {id}")))?;

        if let Some(name) = update.name {
            category.name = name;
        }
        if let Some(color) = update.color {
            category.color = Some(color);
        }
        let updated = category.clone();

        save_json(&self.path, &*categories)?;
        Ok(updated)
    }

    /// Remove a category by id
    pub fn delete(&self, id: &str) -> Result<()> {
        let mut categories = self.write();

        let before = categories.len();
        categories.retain(|c| c.id != id);
        if categories.len() == before {
            return Err(Error::not_found(format!("category: {id}")));
        }

        save_json(&self.path, &*categories)
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<Category>> {
        self.categories.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Category>> {
        self.categories.write().unwrap_or_else(PoisonError::into_inner)
    }
}
