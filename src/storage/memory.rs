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


//! In-memory record store for tests and ephemeral use
//!
//! Observable semantics match [`JsonFileStore`](crate::storage::JsonFileStore)
//! exactly: stored order is insertion order, ids are minted on create, an
//! update against an unknown id is a silent no-op.

use std::sync::Mutex;

use uuid::Uuid;

use crate::error::{CatalogError, Result};
use crate::storage::models::{BookRecord, NewBookRecord};
use crate::storage::RecordStore;

/// Ephemeral record store backed by a `Vec`
///
/// The mutex exists only for interior mutability behind `&self`; the catalog
/// core is single-threaded.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<BookRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with records, for test setup
    pub fn with_records(records: Vec<BookRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<BookRecord>>> {
        self.records
            .lock()
            .map_err(|_| CatalogError::store("memory store mutex poisoned"))
    }
}

impl RecordStore for MemoryStore {
    fn create_book(&self, book: NewBookRecord) -> Result<BookRecord> {
        let record = book.into_record(Uuid::new_v4().to_string());
        self.lock()?.push(record.clone());
        Ok(record)
    }

    fn read_books(&self) -> Result<Vec<BookRecord>> {
        Ok(self.lock()?.clone())
    }

    fn update_book(&self, book: BookRecord) -> Result<BookRecord> {
        let mut records = self.lock()?;
        for existing in records.iter_mut().filter(|b| b.id == book.id) {
            existing.title = book.title.clone();
            existing.author = book.author.clone();
            existing.publication_year = book.publication_year;
            existing.is_taken = book.is_taken;
        }
        Ok(book)
    }
}
