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


//! LibriLend - catalog core for a small lending library
//!
//! Creates book records, acquires additional copies, lends copies out,
//! receives them back, and searches the catalog. The [`catalog`] module owns
//! every business rule; the [`storage`] module owns durability and record
//! identity. The presentation shell (`librilend-cli`, behind the `cli`
//! feature) is a thin consumer of the [`catalog::CatalogService`] trait and
//! interprets no domain logic of its own.

pub mod catalog;
pub mod config;
pub mod error;
pub mod storage;

pub use catalog::{BookService, CatalogService};
pub use error::{CatalogError, Result};
pub use storage::{BookRecord, JsonFileStore, MemoryStore, NewBookRecord, RecordStore};
