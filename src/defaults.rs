//! Seed data for the catalog.
//!
//! This module provides the records every catalog starts with, centralized
//! so the interactive front end and the tests agree on them.

use crate::catalog::Catalog;
use crate::record::Record;

/// ISBN of the seed book.
pub const SEED_BOOK_ISBN: &str = "123";

/// ISBN of the seed magazine.
pub const SEED_MAGAZINE_ISBN: &str = "456";

/// The records present in every catalog at startup.
pub fn seed_records() -> Vec<Record> {
    vec![
        Record::book(
            SEED_BOOK_ISBN,
            "The Lord of the Rings",
            1954,
            1200,
            "J.R.R. Tolkien",
        ),
        Record::magazine(SEED_MAGAZINE_ISBN, "Science Magazine", 2023, 50, "monthly"),
    ]
}

/// Load the seed records into `catalog`.
///
/// A seed that collides with an existing ISBN is reported and skipped;
/// seeding never aborts startup.
pub fn seed_catalog(catalog: &mut Catalog) {
    for record in seed_records() {
        let isbn = record.isbn().to_string();
        if let Err(err) = catalog.add(record) {
            log::warn!("skipping seed record {isbn}: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog_adds_both_records() {
        let mut catalog = Catalog::new();
        seed_catalog(&mut catalog);

        assert_eq!(catalog.len(), 2);
        assert!(catalog.find(SEED_BOOK_ISBN).unwrap().is_book());
        assert!(catalog.find(SEED_MAGAZINE_ISBN).unwrap().is_magazine());
    }

    #[test]
    fn test_seed_catalog_skips_duplicates_without_aborting() {
        let mut catalog = Catalog::new();
        let occupant = Record::book(SEED_BOOK_ISBN, "Occupant", 2000, 10, "Someone");
        catalog.add(occupant.clone()).unwrap();

        seed_catalog(&mut catalog);

        // The colliding seed is skipped, the other seed still lands.
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find(SEED_BOOK_ISBN).unwrap(), &occupant);
        assert!(catalog.contains(SEED_MAGAZINE_ISBN));
    }

    #[test]
    fn test_seed_records_match_the_documented_values() {
        let seeds = seed_records();
        assert_eq!(seeds.len(), 2);
        assert_eq!(seeds[0].title(), "The Lord of the Rings");
        assert_eq!(seeds[0].pages(), 1200);
        assert_eq!(seeds[1].periodicity(), Some("monthly"));
    }
}
