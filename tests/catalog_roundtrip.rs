//! Durability integration tests for the catalog
//!
//! Every test that "restarts" does so by dropping the store and service and
//! building fresh ones over the same catalog file; nothing may survive in
//! memory between the write and the read.

use librilend::{BookService, CatalogService, JsonFileStore};

fn service_at(path: &std::path::Path) -> BookService<JsonFileStore> {
    BookService::new(JsonFileStore::new(path))
}

#[test]
fn records_survive_restart_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("books.json");

    let mut created = Vec::new();
    for (title, year) in [("Blindsight", "2006"), ("Echopraxia", "2014"), ("Starfish", "1999")] {
        let service = service_at(&path);
        created.push(service.create_book(title, "Peter Watts", year).unwrap());
    }

    let service = service_at(&path);
    assert_eq!(service.get_all_books().unwrap(), created);
}

#[test]
fn lending_state_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("books.json");

    let book = {
        let service = service_at(&path);
        let book = service.create_book("Maelstrom", "Peter Watts", "2001").unwrap();
        service.take_book(&book.id).unwrap();
        book
    };

    let service = service_at(&path);
    assert!(service.get_all_books().unwrap()[0].is_taken);

    let returned = service.return_book(&book.id).unwrap();
    assert!(!returned.is_taken);

    let service = service_at(&path);
    assert!(!service.get_all_books().unwrap()[0].is_taken);
}

#[test]
fn bought_copies_and_search_work_across_restarts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("books.json");

    let template = {
        let service = service_at(&path);
        service.create_book("Behemoth", "Peter Watts", "2004").unwrap()
    };

    {
        let service = service_at(&path);
        let copy = service.buy_book_copy(&template.id, "2010").unwrap();
        assert_ne!(copy.id, template.id);
    }

    let service = service_at(&path);
    let hits = service.search_books_by_title("Behemoth").unwrap();
    let years: Vec<i32> = hits.iter().map(|b| b.publication_year).collect();
    assert_eq!(years, vec![2004, 2010]);

    // Identical-year copies collapse to one search hit but both stay stored
    service.buy_book_copy(&template.id, "2004").unwrap();
    let service = service_at(&path);
    assert_eq!(service.get_all_books().unwrap().len(), 3);
    assert_eq!(service.search_books_by_title("Behemoth").unwrap().len(), 2);
}

#[test]
fn corrupt_catalog_file_surfaces_as_store_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("books.json");
    std::fs::write(&path, "definitely not json").unwrap();

    let service = service_at(&path);
    let err = service.get_all_books().unwrap_err();
    assert!(err.is_store());
    assert!(!err.is_recoverable());
}

#[test]
fn catalog_written_by_an_older_version_reads_with_default_lending_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("books.json");
    std::fs::write(
        &path,
        r#"[{"id": "legacy-1", "title": "Crysis: Legion", "author": "Peter Watts", "publication_year": 2011}]"#,
    )
    .unwrap();

    let service = service_at(&path);
    let books = service.get_all_books().unwrap();
    assert_eq!(books.len(), 1);
    assert!(!books[0].is_taken);

    // And the legacy record participates in lending normally
    let taken = service.take_book("legacy-1").unwrap();
    assert!(taken.is_taken);
}
