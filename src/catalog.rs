//! # Catalog Store
//!
//! An owned, in-memory mapping from ISBN to [`Record`] with operations for
//! insertion, lookup, removal, update, filtered search, and aggregate
//! statistics.
//!
//! ## Invariants
//!
//! - At most one record per ISBN at any time; [`Catalog::add`] refuses
//!   duplicates.
//! - Every operation either succeeds completely or fails with a typed error
//!   leaving the mapping unchanged.
//! - Each entry is stamped with an insertion sequence number, so search
//!   results and the statistics tie-break are deterministic
//!   (first-inserted-first) even though the backing map is unordered.
//!
//! ## A note on `update`
//!
//! [`Catalog::update`] replaces the value stored under the *original* key,
//! without requiring the replacement record to carry the same ISBN. A
//! record's own identifier and its map key can therefore diverge. This
//! mirrors the reference behavior on purpose; see DESIGN.md.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::record::{Kind, Record};

/// A stored record together with its insertion sequence number.
#[derive(Debug, Clone)]
struct Slot {
    seq: u64,
    record: Record,
}

/// In-memory catalog of publications, keyed by ISBN.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    slots: HashMap<String, Slot>,
    next_seq: u64,
}

/// Aggregate statistics over a catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogStats {
    /// Number of book records.
    pub books: usize,
    /// Number of magazine records.
    pub magazines: usize,
    /// The record with the highest page count, if the catalog is non-empty.
    /// Ties are broken in favor of the earliest-inserted entry.
    pub most_pages: Option<Record>,
    /// Arithmetic mean of page counts over all records, 0.0 when empty.
    pub mean_pages: f64,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its own ISBN.
    ///
    /// Fails with [`Error::DuplicateIsbn`] if the ISBN is already present,
    /// leaving the existing entry untouched.
    pub fn add(&mut self, record: Record) -> Result<()> {
        let isbn = record.isbn().to_string();
        if self.slots.contains_key(&isbn) {
            return Err(Error::DuplicateIsbn { isbn });
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        log::trace!("catalog add: {isbn} (seq {seq})");
        self.slots.insert(isbn, Slot { seq, record });
        Ok(())
    }

    /// Look up a record by ISBN.
    pub fn find(&self, isbn: &str) -> Result<&Record> {
        self.slots
            .get(isbn)
            .map(|slot| &slot.record)
            .ok_or_else(|| Error::NotFound {
                isbn: isbn.to_string(),
            })
    }

    /// Remove the record stored under `isbn`, returning it.
    pub fn remove(&mut self, isbn: &str) -> Result<Record> {
        match self.slots.remove(isbn) {
            Some(slot) => {
                log::trace!("catalog remove: {isbn}");
                Ok(slot.record)
            }
            None => Err(Error::NotFound {
                isbn: isbn.to_string(),
            }),
        }
    }

    /// Replace the record stored under `isbn` with `record`.
    ///
    /// The replacement is stored under the original key `isbn` even when its
    /// own ISBN differs, and it keeps the slot's insertion sequence number.
    /// Fails with [`Error::NotFound`] if `isbn` is absent, leaving the
    /// mapping unchanged.
    pub fn update(&mut self, isbn: &str, record: Record) -> Result<()> {
        match self.slots.get_mut(isbn) {
            Some(slot) => {
                log::trace!("catalog update: {isbn}");
                slot.record = record;
                Ok(())
            }
            None => Err(Error::NotFound {
                isbn: isbn.to_string(),
            }),
        }
    }

    /// All book records whose author matches `author` case-insensitively.
    ///
    /// The match is exact ignoring case, not a substring search. Magazines
    /// are never returned. Results are in first-inserted order.
    pub fn search_by_author(&self, author: &str) -> Vec<&Record> {
        let wanted = author.to_lowercase();
        self.ordered()
            .into_iter()
            .map(|slot| &slot.record)
            .filter(|record| {
                record
                    .author()
                    .is_some_and(|a| a.to_lowercase() == wanted)
            })
            .collect()
    }

    /// All records (books and magazines) published in `year`, in
    /// first-inserted order.
    pub fn search_by_year(&self, year: i32) -> Vec<&Record> {
        self.ordered()
            .into_iter()
            .map(|slot| &slot.record)
            .filter(|record| record.year() == year)
            .collect()
    }

    /// Compute aggregate statistics over the catalog.
    pub fn statistics(&self) -> CatalogStats {
        let mut books = 0;
        let mut magazines = 0;
        let mut total_pages: i64 = 0;
        let mut most: Option<&Slot> = None;

        for slot in self.ordered() {
            match slot.record.kind() {
                Kind::Book { .. } => books += 1,
                Kind::Magazine { .. } => magazines += 1,
            }
            total_pages += i64::from(slot.record.pages());

            // Strictly-greater comparison keeps the earliest entry on ties.
            if most.is_none_or(|m| slot.record.pages() > m.record.pages()) {
                most = Some(slot);
            }
        }

        let count = self.slots.len();
        CatalogStats {
            books,
            magazines,
            most_pages: most.map(|slot| slot.record.clone()),
            mean_pages: if count == 0 {
                0.0
            } else {
                total_pages as f64 / count as f64
            },
        }
    }

    /// Check if an ISBN has a catalog entry.
    pub fn contains(&self, isbn: &str) -> bool {
        self.slots.contains_key(isbn)
    }

    /// Get the number of records.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// All records, in first-inserted order.
    pub fn records(&self) -> Vec<&Record> {
        self.ordered().into_iter().map(|slot| &slot.record).collect()
    }

    /// All ISBN keys, in first-inserted order.
    ///
    /// These are the map keys, which after certain updates may differ from
    /// the stored records' own identifiers.
    pub fn isbns(&self) -> Vec<&str> {
        let mut slots: Vec<_> = self.slots.iter().collect();
        slots.sort_by_key(|(_, slot)| slot.seq);
        slots.into_iter().map(|(isbn, _)| isbn.as_str()).collect()
    }

    /// Slots sorted by insertion sequence number.
    fn ordered(&self) -> Vec<&Slot> {
        let mut slots: Vec<_> = self.slots.values().collect();
        slots.sort_by_key(|slot| slot.seq);
        slots
    }
}
