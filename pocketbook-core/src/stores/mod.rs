//! File-backed stores
//!
//! Each store owns one JSON document on local durable storage and guards
//! its in-memory collection with an RwLock (single writer, multiple
//! readers), so concurrent mutating calls serialize instead of racing.
//! Every mutation rewrites the whole file synchronously under an exclusive
//! OS file lock.
//!
//! Load policy: a missing file means "start empty"; a malformed file is an
//! error the caller sees. Save errors propagate - they are never swallowed.

mod category;
mod credential;
mod mapping;

pub use category::CategoryStore;
pub use credential::CredentialStore;
pub use mapping::MappingStore;

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use fs2::FileExt;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::result::Result;

/// Read a JSON document, or None when the file does not exist
pub(crate) fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    Ok(Some(serde_json::from_str(&content)?))
}

/// Rewrite a JSON document in full, holding an exclusive file lock
pub(crate) fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.lock_exclusive()?;

    let result = serde_json::to_vec_pretty(value)
        .map_err(Into::into)
        .and_then(|bytes| file.write_all(&bytes).map_err(Into::into));

    let _ = fs2::FileExt::unlock(&file);
    result
}
