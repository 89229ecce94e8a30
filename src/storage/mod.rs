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


//! Record storage
//!
//! This module owns the durable representation of the catalog and record
//! identity assignment. The whole catalog is one serialized collection; every
//! operation is a full read or a full overwrite. That is deliberate: at a
//! small library's scale it keeps the on-disk format trivially inspectable,
//! and it is explicitly not designed for concurrent writers.
//!
//! Two implementations of [`RecordStore`] exist: [`JsonFileStore`] persists
//! the catalog as one JSON file, [`MemoryStore`] holds it in memory for tests
//! and ephemeral use.
//!
//! # Usage Example
//! ```no_run
//! use librilend::storage::{JsonFileStore, NewBookRecord, RecordStore};
//!
//! # fn example() -> librilend::Result<()> {
//! let store = JsonFileStore::new("./books.json");
//!
//! let record = store.create_book(NewBookRecord::new(
//!     "The Hobbit".to_string(),
//!     "J.R.R. Tolkien".to_string(),
//!     1937,
//! ))?;
//! println!("stored under id {}", record.id);
//!
//! let all = store.read_books()?;
//! # Ok(())
//! # }
//! ```

pub mod json_file;
pub mod memory;
pub mod models;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use models::{BookRecord, NewBookRecord};

use crate::error::Result;

/// Durable keyed storage of book records
///
/// Implementations own id generation and the serialized representation;
/// callers never reach past this interface into storage details. The store
/// knows nothing of lending rules and never produces a validation or
/// domain-state error, only store failures.
pub trait RecordStore {
    /// Append a new record to the catalog under a freshly minted id
    ///
    /// The backing representation is created lazily here if it does not
    /// exist yet. Returns the stored record including its assigned id.
    fn create_book(&self, book: NewBookRecord) -> Result<BookRecord>;

    /// Read the full catalog in stored order
    ///
    /// A missing backing representation is an empty catalog, not an error.
    /// A representation that exists but cannot be read or parsed is an error.
    fn read_books(&self) -> Result<Vec<BookRecord>>;

    /// Overwrite the mutable fields of the record with the given id
    ///
    /// An id that matches no stored record completes without error and
    /// without mutating anything; callers are expected to have validated
    /// existence beforehand. Returns the given record as confirmation.
    fn update_book(&self, book: BookRecord) -> Result<BookRecord>;
}
