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


//! Catalog business rules
//!
//! The service layer on top of [`storage`](crate::storage): validation,
//! lending-state transitions, copy acquisition, and search. A record's
//! lending status moves between exactly two states:
//!
//! ```text
//!         create_book / buy_book_copy
//!                │
//!                ▼
//!          ┌───────────┐   take_book    ┌─────────┐
//!          │ Available │ ─────────────▶ │  Taken  │
//!          └───────────┘ ◀───────────── └─────────┘
//!                          return_book
//! ```
//!
//! Double-take and double-return are rejected as conflicts, never silently
//! accepted.

pub mod search;
pub mod service;

pub use service::{BookService, CatalogService};
