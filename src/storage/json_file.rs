// LibriLend - Lending Library Catalog
// Copyright (C) 2025 Henning Berge
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.


//! File-backed record store
//!
//! The catalog is one pretty-printed JSON array of records. Writes go to a
//! temporary sibling file followed by an atomic rename, so a torn write can
//! never destroy the previous catalog.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use uuid::Uuid;

use crate::error::{CatalogError, Result};
use crate::storage::models::{BookRecord, NewBookRecord};
use crate::storage::RecordStore;

/// Production record store - one JSON file holds the whole catalog
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store over the given catalog file path
    ///
    /// Performs no filesystem access; the file and any missing parent
    /// directories are created lazily on the first successful write.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing catalog file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize and overwrite the full catalog
    fn write_all(&self, books: &[BookRecord]) -> Result<()> {
        let json = serde_json::to_string_pretty(books)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    CatalogError::store(format!(
                        "Failed to create catalog directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        // Write-then-rename keeps the previous catalog intact on a torn write
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json).map_err(|e| {
            CatalogError::store(format!("Failed to write {}: {}", tmp.display(), e))
        })?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            CatalogError::store(format!(
                "Failed to move {} -> {}: {}",
                tmp.display(),
                self.path.display(),
                e
            ))
        })?;

        debug!(path = %self.path.display(), records = books.len(), "catalog written");
        Ok(())
    }
}

impl RecordStore for JsonFileStore {
    fn create_book(&self, book: NewBookRecord) -> Result<BookRecord> {
        let mut books = if self.path.exists() {
            self.read_books()?
        } else {
            Vec::new()
        };

        let record = book.into_record(Uuid::new_v4().to_string());
        books.push(record.clone());
        self.write_all(&books)?;

        debug!(id = %record.id, title = %record.title, "record created");
        Ok(record)
    }

    fn read_books(&self) -> Result<Vec<BookRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        // The file can vanish between the existence check and this read;
        // that surfaces here as a store failure, not as an empty catalog.
        let json = fs::read_to_string(&self.path).map_err(|e| {
            CatalogError::store(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        let books: Vec<BookRecord> = serde_json::from_str(&json)?;
        Ok(books)
    }

    fn update_book(&self, book: BookRecord) -> Result<BookRecord> {
        let mut books = self.read_books()?;

        for existing in books.iter_mut().filter(|b| b.id == book.id) {
            existing.title = book.title.clone();
            existing.author = book.author.clone();
            existing.publication_year = book.publication_year;
            existing.is_taken = book.is_taken;
        }

        self.write_all(&books)?;

        debug!(id = %book.id, is_taken = book.is_taken, "record updated");
        Ok(book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_book(title: &str, year: i32) -> NewBookRecord {
        NewBookRecord::new(title.to_string(), "Ursula K. Le Guin".to_string(), year)
    }

    #[test]
    fn read_from_missing_file_is_empty_not_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("books.json"));
        assert_eq!(store.read_books().unwrap(), Vec::new());
    }

    #[test]
    fn file_does_not_exist_before_first_create() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.json");
        let store = JsonFileStore::new(&path);

        assert!(!path.exists());
        store.create_book(new_book("The Dispossessed", 1974)).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn create_mints_distinct_ids_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("books.json"));

        let a = store.create_book(new_book("A Wizard of Earthsea", 1968)).unwrap();
        let b = store.create_book(new_book("The Tombs of Atuan", 1971)).unwrap();

        assert_ne!(a.id, b.id);
        assert!(!a.is_taken);

        let books = store.read_books().unwrap();
        assert_eq!(books, vec![a, b]);
    }

    #[test]
    fn create_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("books.json");
        let store = JsonFileStore::new(&path);

        store.create_book(new_book("The Lathe of Heaven", 1971)).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn update_overwrites_mutable_fields() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("books.json"));

        let created = store.create_book(new_book("Tehanu", 1990)).unwrap();
        let flipped = BookRecord {
            is_taken: true,
            ..created.clone()
        };
        store.update_book(flipped.clone()).unwrap();

        let books = store.read_books().unwrap();
        assert_eq!(books, vec![flipped]);
    }

    #[test]
    fn update_with_unknown_id_is_a_silent_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("books.json"));

        let created = store.create_book(new_book("Orsinian Tales", 1976)).unwrap();
        let ghost = BookRecord {
            id: "no-such-id".to_string(),
            title: "Ghost".to_string(),
            author: "Nobody".to_string(),
            publication_year: 1900,
            is_taken: true,
        };

        let returned = store.update_book(ghost.clone()).unwrap();
        assert_eq!(returned, ghost);
        assert_eq!(store.read_books().unwrap(), vec![created]);
    }

    #[test]
    fn malformed_catalog_file_fails_as_store_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.json");
        std::fs::write(&path, "{ not json at all").unwrap();

        let store = JsonFileStore::new(&path);
        let err = store.read_books().unwrap_err();
        assert!(err.is_store());
    }

    #[test]
    fn persisted_file_is_a_json_array_with_expected_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.json");
        let store = JsonFileStore::new(&path);

        let created = store.create_book(new_book("The Word for World Is Forest", 1972)).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let entry = &raw.as_array().unwrap()[0];
        assert_eq!(entry["id"], serde_json::json!(created.id));
        assert_eq!(entry["title"], serde_json::json!("The Word for World Is Forest"));
        assert_eq!(entry["author"], serde_json::json!("Ursula K. Le Guin"));
        assert_eq!(entry["publication_year"], serde_json::json!(1972));
        assert_eq!(entry["is_taken"], serde_json::json!(false));
    }
}
