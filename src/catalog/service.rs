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


//! Catalog service
//!
//! All business rules live here: input validation, id resolution, lending
//! state transitions, and search semantics. The service is stateless: every
//! operation re-reads current truth from its record store, decides, and
//! writes back whole records. Store failures pass through unchanged.

use chrono::Datelike;
use tracing::debug;

use crate::catalog::search::dedup_and_sort;
use crate::error::{CatalogError, Result};
use crate::storage::{BookRecord, NewBookRecord, RecordStore};

/// The fixed contract between the presentation shell and the catalog core
///
/// Inputs arrive as raw user-supplied strings; every operation either
/// returns records or fails with one of the enumerable
/// [`CatalogError`](crate::error::CatalogError) kinds. The shell renders,
/// the service decides.
pub trait CatalogService {
    /// Catalog a brand-new book copy
    fn create_book(&self, title: &str, author: &str, publication_year: &str) -> Result<BookRecord>;

    /// Acquire another physical copy of an already-cataloged book
    ///
    /// The existing record is a template only: the new copy gets a fresh id,
    /// starts available, and defaults its publication year to the current
    /// calendar year when none is given.
    fn buy_book_copy(&self, book_id: &str, publication_year: &str) -> Result<BookRecord>;

    /// Full catalog in stored (insertion) order, no filtering
    fn get_all_books(&self) -> Result<Vec<BookRecord>>;

    /// Lend the copy with the given id to a patron
    fn take_book(&self, book_id: &str) -> Result<BookRecord>;

    /// Receive the copy with the given id back from a patron
    fn return_book(&self, book_id: &str) -> Result<BookRecord>;

    /// Exact-title matches, duplicates collapsed, ascending by year
    fn search_books_by_title(&self, title: &str) -> Result<Vec<BookRecord>>;

    /// Exact-author matches, duplicates collapsed, ascending by year
    fn search_books_by_author(&self, author: &str) -> Result<Vec<BookRecord>>;
}

/// Production catalog service over any record store
#[derive(Debug)]
pub struct BookService<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> BookService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Resolve a record by id against the current catalog
    ///
    /// Absence fails loudly with the not-found conflict. Silently handing
    /// back "no book" would mask operator typos, so it is never done.
    fn find_book(&self, book_id: &str) -> Result<BookRecord> {
        self.store
            .read_books()?
            .into_iter()
            .find(|book| book.id == book_id)
            .ok_or_else(|| CatalogError::BookNotFound(book_id.to_string()))
    }

    /// Coerce a user-supplied year string to an integer
    ///
    /// Coercion failure is a distinct error from emptiness; emptiness is
    /// checked by the callers, each with its own policy.
    fn coerce_year(publication_year: &str) -> Result<i32> {
        publication_year
            .parse::<i32>()
            .map_err(|_| CatalogError::PublicationYearNotInteger(publication_year.to_string()))
    }
}

impl<S: RecordStore> CatalogService for BookService<S> {
    fn create_book(&self, title: &str, author: &str, publication_year: &str) -> Result<BookRecord> {
        // Check order is part of the contract: author, title, year presence,
        // year type. The shell's prompts rely on it.
        if author.is_empty() {
            return Err(CatalogError::EmptyAuthor);
        }
        if title.is_empty() {
            return Err(CatalogError::EmptyTitle);
        }
        if publication_year.is_empty() {
            return Err(CatalogError::EmptyPublicationYear);
        }
        let year = Self::coerce_year(publication_year)?;

        let record = self.store.create_book(NewBookRecord::new(
            title.to_string(),
            author.to_string(),
            year,
        ))?;
        debug!(id = %record.id, title = %record.title, "book cataloged");
        Ok(record)
    }

    fn buy_book_copy(&self, book_id: &str, publication_year: &str) -> Result<BookRecord> {
        let template = self.find_book(book_id)?;

        let year = if publication_year.is_empty() {
            chrono::Local::now().year()
        } else {
            Self::coerce_year(publication_year)?
        };

        // Route through create_book so the copy gets a fresh id, starts
        // available, and is re-validated; the template is never written back.
        let copy = self.create_book(&template.title, &template.author, &year.to_string())?;
        debug!(template = %template.id, copy = %copy.id, "copy purchased");
        Ok(copy)
    }

    fn get_all_books(&self) -> Result<Vec<BookRecord>> {
        self.store.read_books()
    }

    fn take_book(&self, book_id: &str) -> Result<BookRecord> {
        let book = self.find_book(book_id)?;
        if book.is_taken {
            return Err(CatalogError::BookAlreadyTaken(book_id.to_string()));
        }

        let taken = BookRecord {
            is_taken: true,
            ..book
        };
        let updated = self.store.update_book(taken)?;
        debug!(id = %updated.id, "book taken");
        Ok(updated)
    }

    fn return_book(&self, book_id: &str) -> Result<BookRecord> {
        let book = self.find_book(book_id)?;
        if !book.is_taken {
            return Err(CatalogError::BookAlreadyInLibrary(book_id.to_string()));
        }

        let returned = BookRecord {
            is_taken: false,
            ..book
        };
        let updated = self.store.update_book(returned)?;
        debug!(id = %updated.id, "book returned");
        Ok(updated)
    }

    fn search_books_by_title(&self, title: &str) -> Result<Vec<BookRecord>> {
        let matches = self
            .store
            .read_books()?
            .into_iter()
            .filter(|book| book.title == title)
            .collect();
        Ok(dedup_and_sort(matches))
    }

    fn search_books_by_author(&self, author: &str) -> Result<Vec<BookRecord>> {
        let matches = self
            .store
            .read_books()?
            .into_iter()
            .filter(|book| book.author == author)
            .collect();
        Ok(dedup_and_sort(matches))
    }
}
