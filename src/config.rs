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


//! Shell configuration
//!
//! The presentation shell reads a small JSON configuration file naming the
//! catalog's backing file:
//!
//! ```json
//! { "connection": { "book_file_path": "/path/to/books.json" } }
//! ```
//!
//! Without a configuration file the shell falls back to a platform-specific
//! default location. Configuration failures are their own error variant,
//! distinct from the three core kinds.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{CatalogError, Result};

/// Top-level shell configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub connection: ConnectionConfig,
}

/// Where the catalog lives
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionConfig {
    pub book_file_path: PathBuf,
}

impl AppConfig {
    /// Load configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            CatalogError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&json).map_err(|e| {
            CatalogError::config(format!("Malformed configuration {}: {}", path.display(), e))
        })
    }
}

/// Default catalog file location when no configuration is given
///
/// - Desktop (macOS): ~/Library/Application Support/LibriLend/books.json
/// - Desktop (Linux): ~/.local/share/LibriLend/books.json
/// - Desktop (Windows): %APPDATA%/LibriLend/books.json
pub fn default_catalog_path() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home)
            .join("Library")
            .join("Application Support")
            .join("LibriLend")
            .join("books.json")
    }

    #[cfg(target_os = "linux")]
    {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("LibriLend")
            .join("books.json")
    }

    #[cfg(target_os = "windows")]
    {
        let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(appdata).join("LibriLend").join("books.json")
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        PathBuf::from(".").join("books.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_connection_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{ "connection": { "book_file_path": "/srv/library/books.json" } }"#,
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(
            config.connection.book_file_path,
            PathBuf::from("/srv/library/books.json")
        );
    }

    #[test]
    fn missing_file_is_a_configuration_error() {
        let err = AppConfig::load("/no/such/config.json").unwrap_err();
        assert!(matches!(err, CatalogError::ConfigurationError(_)));
        assert!(!err.is_store());
    }

    #[test]
    fn malformed_json_is_a_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ oops").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, CatalogError::ConfigurationError(_)));
    }

    #[test]
    fn default_path_ends_with_books_json() {
        assert_eq!(
            default_catalog_path().file_name().unwrap(),
            "books.json"
        );
    }
}
