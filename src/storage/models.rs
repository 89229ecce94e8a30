//! Catalog record models
//!
//! One `BookRecord` describes one physical copy. A title the library owns
//! three copies of is three records with three distinct ids; the shared
//! "title" entity does not exist anywhere in the data model.

use serde::{Deserialize, Serialize};

/// One physical book copy's persisted state
///
/// `id` is assigned by the record store at creation time and never changes.
/// `is_taken` flips between `false` (on the shelf) and `true` (lent out)
/// through the catalog service's take/return operations only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub id: String,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    /// Catalogs written before lending tracking existed omit this field
    #[serde(default)]
    pub is_taken: bool,
}

impl BookRecord {
    /// Dedup key used by catalog search: copies equal on all three fields
    /// collapse to one search hit regardless of id and lending state.
    pub fn dedup_key(&self) -> (&str, &str, i32) {
        (&self.title, &self.author, self.publication_year)
    }
}

/// Creation input for a record
///
/// Carries no `id` and no `is_taken`: ids are store-assigned and every
/// created copy starts on the shelf. This is enforced by construction rather
/// than by convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBookRecord {
    pub title: String,
    pub author: String,
    pub publication_year: i32,
}

impl NewBookRecord {
    pub fn new(title: String, author: String, publication_year: i32) -> Self {
        Self {
            title,
            author,
            publication_year,
        }
    }

    /// Materialize the stored record under the store-assigned id
    pub fn into_record(self, id: String) -> BookRecord {
        BookRecord {
            id,
            title: self.title,
            author: self.author,
            publication_year: self.publication_year,
            is_taken: false,
        }
    }
}
