//! Shared search post-processing
//!
//! Both search operations run their exact-match hits through the same
//! pipeline: collapse copies that are identical on the
//! `(title, author, publication_year)` dedup key, then sort ascending by
//! publication year. Four identical copies of an unchanged purchase show up
//! once to the searcher, not four times.

use std::collections::HashSet;

use crate::storage::BookRecord;

/// Collapse dedup-key duplicates and sort ascending by publication year
///
/// The first record encountered per key survives, ids and lending flags of
/// the collapsed copies notwithstanding. The sort is stable, so year ties
/// keep their post-dedup encounter order.
pub fn dedup_and_sort(books: Vec<BookRecord>) -> Vec<BookRecord> {
    let mut seen: HashSet<(String, String, i32)> = HashSet::new();
    let mut unique: Vec<BookRecord> = Vec::new();

    for book in books {
        let key = (
            book.title.clone(),
            book.author.clone(),
            book.publication_year,
        );
        if seen.insert(key) {
            unique.push(book);
        }
    }

    unique.sort_by_key(|book| book.publication_year);
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, title: &str, author: &str, year: i32, taken: bool) -> BookRecord {
        BookRecord {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            publication_year: year,
            is_taken: taken,
        }
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(dedup_and_sort(Vec::new()), Vec::new());
    }

    #[test]
    fn duplicates_collapse_to_first_encountered() {
        let books = vec![
            record("1", "A", "x", 2000, false),
            record("2", "A", "x", 2000, true),
            record("3", "A", "x", 2000, false),
        ];
        let result = dedup_and_sort(books);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "1");
    }

    #[test]
    fn survivors_sort_ascending_by_year() {
        let books = vec![
            record("1", "A", "x", 2002, false),
            record("2", "A", "x", 2000, false),
            record("3", "A", "x", 2001, false),
        ];
        let years: Vec<i32> = dedup_and_sort(books)
            .iter()
            .map(|b| b.publication_year)
            .collect();
        assert_eq!(years, vec![2000, 2001, 2002]);
    }

    #[test]
    fn year_ties_keep_encounter_order() {
        // Same year, different authors: both survive dedup, order preserved
        let books = vec![
            record("1", "A", "x", 2000, false),
            record("2", "A", "y", 2000, false),
        ];
        let result = dedup_and_sort(books);
        let ids: Vec<&str> = result.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }
}
