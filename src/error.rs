//! Error types for LibriLend
//!
//! This module defines error types using thiserror for ergonomic error handling.
//! Errors fall into three kinds that callers must be able to tell apart:
//!
//! - **Validation**: the supplied value itself fails a precondition (empty
//!   title/author/year, non-integer year). Recoverable by re-prompting; storage
//!   is never touched.
//! - **Domain-state conflict**: the request is well-formed but violates the
//!   record's current lending state (already taken / already returned) or
//!   names an id that does not exist. Recoverable; storage untouched.
//! - **Store**: the durable layer failed (I/O, corrupt representation).
//!   Non-recoverable for the current operation and surfaced verbatim; there is
//!   no internal retry policy, a transient failure must be retried by
//!   re-issuing the operation.
//!
//! The presentation shell additionally gets a configuration variant, which is
//! not one of the three core kinds.

use thiserror::Error;

/// Result type alias using our CatalogError type
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Main error type for LibriLend
#[derive(Error, Debug)]
pub enum CatalogError {
    // ===== Validation Errors =====
    // Raised only by the catalog service, before any store call

    /// Author field was empty on create
    #[error("Author cannot be empty")]
    EmptyAuthor,

    /// Title field was empty on create
    #[error("Title cannot be empty")]
    EmptyTitle,

    /// Publication year field was empty on create
    #[error("Publication year cannot be empty")]
    EmptyPublicationYear,

    /// Publication year did not parse as an integer
    #[error("Publication year must be an integer, got '{0}'")]
    PublicationYearNotInteger(String),

    // ===== Domain-State Conflicts =====
    // Well-formed requests that the catalog's current state rejects

    /// No record with the given id exists in the catalog
    #[error("Book with id '{0}' doesn't exist")]
    BookNotFound(String),

    /// Take attempted on a record that is already lent out
    #[error("Book '{0}' is already taken")]
    BookAlreadyTaken(String),

    /// Return attempted on a record that is already on the shelf
    #[error("Book '{0}' is already in the library")]
    BookAlreadyInLibrary(String),

    // ===== Store Errors =====
    // Failures of the durable layer; propagated unchanged by the service

    /// I/O failure against the catalog's backing file, with path context
    #[error("Record store failure: {0}")]
    StoreFailure(String),

    /// Catalog representation failed to serialize or deserialize
    #[error("Catalog serialization error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),

    // ===== Shell Errors =====

    /// Configuration file missing or malformed (shell-side only)
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl CatalogError {
    /// Create a StoreFailure with a message
    pub fn store<S: Into<String>>(message: S) -> Self {
        CatalogError::StoreFailure(message.into())
    }

    /// Create a ConfigurationError with a message
    pub fn config<S: Into<String>>(message: S) -> Self {
        CatalogError::ConfigurationError(message.into())
    }

    /// Check if error is an input validation failure
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CatalogError::EmptyAuthor
                | CatalogError::EmptyTitle
                | CatalogError::EmptyPublicationYear
                | CatalogError::PublicationYearNotInteger(_)
        )
    }

    /// Check if error is a lending-state or id-resolution conflict
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            CatalogError::BookNotFound(_)
                | CatalogError::BookAlreadyTaken(_)
                | CatalogError::BookAlreadyInLibrary(_)
        )
    }

    /// Check if error came from the durable layer
    pub fn is_store(&self) -> bool {
        matches!(
            self,
            CatalogError::StoreFailure(_) | CatalogError::SerdeJsonError(_)
        )
    }

    /// Check if the caller can recover by correcting input and retrying
    ///
    /// True for validation failures and domain-state conflicts, which never
    /// leave storage mutated. Store failures are not recoverable for the
    /// current operation.
    pub fn is_recoverable(&self) -> bool {
        self.is_validation() || self.is_conflict()
    }

    /// Get user-friendly error message suitable for display
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::PublicationYearNotInteger(value) => {
                format!("'{}' is not a valid publication year. Please enter a whole number, e.g. 1998.", value)
            }
            CatalogError::BookNotFound(id) => {
                format!("No book with id '{}' was found in the catalog. Please check the id and try again.", id)
            }
            CatalogError::StoreFailure(message) => {
                format!("The catalog could not be read or written: {}", message)
            }
            CatalogError::SerdeJsonError(err) => {
                format!("The catalog file is corrupt or unreadable: {}", err)
            }
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_recoverable() {
        assert!(CatalogError::EmptyAuthor.is_validation());
        assert!(CatalogError::EmptyAuthor.is_recoverable());
        assert!(!CatalogError::EmptyAuthor.is_conflict());
        assert!(!CatalogError::EmptyAuthor.is_store());
    }

    #[test]
    fn conflicts_are_recoverable_but_not_validation() {
        let err = CatalogError::BookAlreadyTaken("id-1".into());
        assert!(err.is_conflict());
        assert!(err.is_recoverable());
        assert!(!err.is_validation());
    }

    #[test]
    fn store_errors_are_not_recoverable() {
        let err = CatalogError::store("disk on fire");
        assert!(err.is_store());
        assert!(!err.is_recoverable());
    }

    #[test]
    fn serde_failures_count_as_store_errors() {
        let err: CatalogError = serde_json::from_str::<Vec<i32>>("{ not json")
            .unwrap_err()
            .into();
        assert!(err.is_store());
        assert!(!err.is_recoverable());
    }

    #[test]
    fn configuration_error_is_none_of_the_core_kinds() {
        let err = CatalogError::config("missing config.json");
        assert!(!err.is_validation());
        assert!(!err.is_conflict());
        assert!(!err.is_store());
    }

    #[test]
    fn display_messages_name_the_offending_value() {
        let err = CatalogError::PublicationYearNotInteger("abc".into());
        assert!(err.to_string().contains("abc"));
        assert!(err.user_message().contains("abc"));

        let err = CatalogError::BookNotFound("id-9".into());
        assert!(err.to_string().contains("id-9"));
    }
}
