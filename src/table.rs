//! Fixed-capacity dictionary with open addressing and linear probing.
//!
//! Every record lives directly in the slot array; a collision walks to the
//! next slot with wraparound. There is no resizing, no deletion and no
//! tombstone state, which keeps the open-addressing invariant simple: an
//! empty slot on a probe path proves the key was never inserted.

use crate::error::{InsertError, InsertErrorKind, TableError};
use crate::hash;

/// The one thing the table needs from a record: its identifying key.
/// Equality between records is key equality; the table never looks at
/// anything else.
pub trait Keyed {
    fn key(&self) -> &str;
}

pub struct FixedProbingTable<R> {
    slots: Vec<Option<R>>,
    len: usize,
}

impl<R: Keyed> FixedProbingTable<R> {
    /// Creates a table with exactly `capacity` empty slots. The capacity is
    /// fixed for the lifetime of the table.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, TableError> {
        assert!(capacity > 0, "capacity must be non-zero");
        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity)?;
        slots.resize_with(capacity, || None);
        Ok(Self { slots, len: 0 })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Slot index `key` hashes to at this table's capacity. Exposed so
    /// callers can tally initial probes without touching the table.
    pub fn hash_index(&self, key: &str) -> usize {
        hash::index(key, self.slots.len())
    }

    /// Inserts `record`, taking ownership. Rejects with `TableFull` when
    /// every slot is occupied and with `DuplicateKey` when an equal key is
    /// already stored; either way the record rides back in the error.
    pub fn insert(&mut self, record: R) -> Result<(), InsertError<R>> {
        if self.len == self.slots.len() {
            return Err(InsertError::new(InsertErrorKind::TableFull, record));
        }
        let start = self.hash_index(record.key());
        let mut slot = start;
        loop {
            match &self.slots[slot] {
                None => {
                    self.slots[slot] = Some(record);
                    self.len += 1;
                    return Ok(());
                }
                Some(occupant) if occupant.key() == record.key() => {
                    return Err(InsertError::new(InsertErrorKind::DuplicateKey, record));
                }
                Some(_) => {}
            }
            slot = (slot + 1) % self.slots.len();
            if slot == start {
                // A free slot must exist when len < capacity.
                return Err(InsertError::new(
                    InsertErrorKind::ProbeCycleExhausted,
                    record,
                ));
            }
        }
    }

    /// Looks up the record stored under `key`. Probing stops at the first
    /// empty slot: with no deletion, a hole on the path means the key was
    /// never inserted.
    pub fn get(&self, key: &str) -> Result<&R, TableError> {
        if self.len == 0 {
            return Err(TableError::TableEmpty);
        }
        let start = self.hash_index(key);
        let mut slot = start;
        loop {
            match &self.slots[slot] {
                Some(occupant) if occupant.key() == key => return Ok(occupant),
                Some(_) => {}
                None => return Err(TableError::NotFound(key.to_string())),
            }
            slot = (slot + 1) % self.slots.len();
            if slot == start {
                return Err(TableError::NotFound(key.to_string()));
            }
        }
    }

    /// Iterates occupied slots in physical array order, yielding each slot
    /// index with a borrow of its record. The order is a property of the
    /// hash and insertion history, not anything callers may rely on.
    pub fn occupied(&self) -> Result<impl Iterator<Item = (usize, &R)>, TableError> {
        if self.len == 0 {
            return Err(TableError::TableEmpty);
        }
        Ok(self
            .slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|record| (index, record))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Rec(String);

    impl Rec {
        fn new(key: &str) -> Self {
            Self(key.to_string())
        }
    }

    impl Keyed for Rec {
        fn key(&self) -> &str {
            &self.0
        }
    }

    fn table(capacity: usize) -> FixedProbingTable<Rec> {
        FixedProbingTable::new(capacity).unwrap()
    }

    #[test]
    fn starts_empty() {
        let t = table(5);
        assert_eq!(t.len(), 0);
        assert!(t.is_empty());
        assert_eq!(t.capacity(), 5);
    }

    #[test]
    fn synonyms_resolve_to_distinct_records() {
        // Every numeric key hashes to slot 0 at capacity 5, so "10" and
        // "15" collide by construction and linear probing separates them.
        let mut t = table(5);
        assert_eq!(t.hash_index("10"), t.hash_index("15"));
        t.insert(Rec::new("10")).unwrap();
        t.insert(Rec::new("15")).unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t.get("10").unwrap().key(), "10");
        assert_eq!(t.get("15").unwrap().key(), "15");
    }

    #[test]
    fn duplicate_insert_is_rejected_and_returned() {
        let mut t = table(5);
        t.insert(Rec::new("10")).unwrap();
        let err = t.insert(Rec::new("10")).unwrap_err();
        assert_eq!(err.kind(), InsertErrorKind::DuplicateKey);
        assert_eq!(err.into_record(), Rec::new("10"));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn full_table_rejects_any_key() {
        let mut t = table(5);
        for key in ["a", "b", "c", "d", "e"] {
            t.insert(Rec::new(key)).unwrap();
        }
        assert_eq!(t.len(), t.capacity());
        let err = t.insert(Rec::new("f")).unwrap_err();
        assert_eq!(err.kind(), InsertErrorKind::TableFull);
        assert_eq!(t.len(), 5);
    }

    #[test]
    fn empty_table_lookup_and_enumeration() {
        let t = table(5);
        assert!(matches!(t.get("x"), Err(TableError::TableEmpty)));
        assert!(matches!(t.occupied(), Err(TableError::TableEmpty)));
    }

    #[test]
    fn missing_key_is_not_found() {
        let mut t = table(5);
        t.insert(Rec::new("present")).unwrap();
        assert!(matches!(t.get("absent"), Err(TableError::NotFound(_))));
    }

    #[test]
    fn string_branch_round_trip() {
        let mut t = table(5);
        t.insert(Rec::new("abc")).unwrap();
        assert_eq!(t.get("abc").unwrap().key(), "abc");
    }

    #[test]
    fn probing_wraps_past_the_last_slot() {
        // Numeric keys all start at slot 0 (capacity 5), so five of them
        // fill slots 0..=4 in insertion order; the later ones only reach
        // their slot by wrapping the probe at the array end.
        let mut t = table(5);
        for key in ["1", "2", "3", "4", "5"] {
            t.insert(Rec::new(key)).unwrap();
        }
        for key in ["1", "2", "3", "4", "5"] {
            assert_eq!(t.get(key).unwrap().key(), key);
        }
        let slots: Vec<usize> = t.occupied().unwrap().map(|(index, _)| index).collect();
        assert_eq!(slots, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn failed_inserts_never_change_len() {
        let mut t = table(2);
        t.insert(Rec::new("10")).unwrap();
        let _ = t.insert(Rec::new("10"));
        assert_eq!(t.len(), 1);
        t.insert(Rec::new("20")).unwrap();
        let _ = t.insert(Rec::new("30"));
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn keys_stay_unique_under_mixed_inserts() {
        let mut t = table(11);
        let keys = ["3", "14", "25", "abc", "3", "14", "xyz", "abc"];
        for key in keys {
            let _ = t.insert(Rec::new(key));
        }
        let mut seen: Vec<&str> = t.occupied().unwrap().map(|(_, r)| r.key()).collect();
        seen.sort_unstable();
        assert_eq!(seen, vec!["14", "25", "3", "abc", "xyz"]);
        assert_eq!(t.len(), 5);
    }

    #[test]
    fn enumeration_is_read_only() {
        let mut t = table(5);
        t.insert(Rec::new("a")).unwrap();
        t.insert(Rec::new("b")).unwrap();
        let first: Vec<usize> = t.occupied().unwrap().map(|(index, _)| index).collect();
        let second: Vec<usize> = t.occupied().unwrap().map(|(index, _)| index).collect();
        assert_eq!(first, second);
        assert_eq!(t.len(), 2);
    }

    #[test]
    #[should_panic(expected = "capacity must be non-zero")]
    fn zero_capacity_panics() {
        let _ = FixedProbingTable::<Rec>::new(0);
    }
}
