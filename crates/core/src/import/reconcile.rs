//! Pure partitioning of a candidate batch against stored records.
//!
//! No I/O, no async. The same inputs always produce the same partition.

use std::collections::HashMap;

use crate::import::record::ImportRecord;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Classification of a single candidate against the stored snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciled<'a, R> {
    /// Identical to a stored record. Carries the stored record.
    Duplicate(&'a R),
    /// Same business key as a stored record but different content.
    /// Carries the stored record, whose identity is reported to callers,
    /// and its position in the snapshot.
    Conflicting { position: usize, stored: &'a R },
    /// No stored record shares the key. Carries the candidate.
    New(&'a R),
}

/// The three buckets produced by [`reconcile`].
#[derive(Debug)]
pub struct Partition<'a, R> {
    /// Records each duplicate candidate matched. Candidate order.
    pub duplicates: Vec<&'a R>,
    /// Stored records that at least one candidate conflicts with, in
    /// snapshot order, each listed once.
    pub conflicts: Vec<&'a R>,
    /// Candidates with no stored counterpart. Candidate order.
    pub new: Vec<&'a R>,
    /// Candidates whose key repeats an earlier new candidate of the same
    /// batch with different content.
    pub repeated_keys: Vec<&'a R>,
}

impl<R: ImportRecord> Partition<'_, R> {
    /// Identities of the conflicting stored records, in report order.
    pub fn conflict_ids(&self) -> Vec<DbId> {
        self.conflicts
            .iter()
            .filter_map(|record| record.identity())
            .collect()
    }

    /// `true` when the batch may be handed to the store as-is.
    pub fn is_clean(&self) -> bool {
        self.conflicts.is_empty() && self.repeated_keys.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Existing-record index
// ---------------------------------------------------------------------------

/// Business-key lookup over a stored snapshot.
///
/// Keys are expected to be unique within the snapshot. When they are not,
/// the first record in snapshot order wins.
pub struct ExistingIndex<'a, R: ImportRecord> {
    records: &'a [R],
    by_key: HashMap<R::Key, usize>,
}

impl<'a, R: ImportRecord> ExistingIndex<'a, R> {
    pub fn build(records: &'a [R]) -> Self {
        let mut by_key = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            by_key.entry(record.business_key()).or_insert(position);
        }
        Self { records, by_key }
    }

    /// Snapshot position and record holding `key`, if any.
    pub fn lookup(&self, key: &R::Key) -> Option<(usize, &'a R)> {
        self.by_key
            .get(key)
            .map(|&position| (position, &self.records[position]))
    }

    /// Classify one candidate against the snapshot.
    pub fn classify(&self, candidate: &'a R) -> Reconciled<'a, R> {
        match self.lookup(&candidate.business_key()) {
            None => Reconciled::New(candidate),
            Some((_, stored)) if candidate.same_content(stored) => Reconciled::Duplicate(stored),
            Some((position, stored)) => Reconciled::Conflicting { position, stored },
        }
    }
}

// ---------------------------------------------------------------------------
// Reconcile
// ---------------------------------------------------------------------------

/// Partition `candidates` against the stored `existing` snapshot.
///
/// A candidate repeating the key of an earlier new candidate is checked
/// against that candidate instead: identical content collapses into
/// `duplicates`, different content lands in `repeated_keys`.
pub fn reconcile<'a, R: ImportRecord>(candidates: &'a [R], existing: &'a [R]) -> Partition<'a, R> {
    let index = ExistingIndex::build(existing);

    let mut duplicates = Vec::new();
    let mut new: Vec<&'a R> = Vec::new();
    let mut repeated_keys = Vec::new();
    let mut conflicting = vec![false; existing.len()];
    let mut pending: HashMap<R::Key, usize> = HashMap::new();

    for candidate in candidates {
        match index.classify(candidate) {
            Reconciled::Duplicate(stored) => duplicates.push(stored),
            Reconciled::Conflicting { position, .. } => conflicting[position] = true,
            Reconciled::New(candidate) => {
                let key = candidate.business_key();
                match pending.get(&key) {
                    Some(&slot) if new[slot].same_content(candidate) => {
                        duplicates.push(new[slot])
                    }
                    Some(_) => repeated_keys.push(candidate),
                    None => {
                        pending.insert(key, new.len());
                        new.push(candidate);
                    }
                }
            }
        }
    }

    let conflicts = existing
        .iter()
        .zip(conflicting)
        .filter_map(|(record, hit)| hit.then_some(record))
        .collect();

    Partition {
        duplicates,
        conflicts,
        new,
        repeated_keys,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::fixtures::{candidate, stored, Item};

    #[test]
    fn everything_new_against_empty_store() {
        let candidates = vec![candidate("A", "Alpha"), candidate("B", "Beta")];
        let existing: Vec<Item> = vec![];

        let partition = reconcile(&candidates, &existing);

        assert_eq!(partition.new.len(), 2);
        assert!(partition.duplicates.is_empty());
        assert!(partition.conflicts.is_empty());
        assert!(partition.is_clean());
    }

    #[test]
    fn identical_candidate_is_duplicate_regardless_of_identity() {
        let candidates = vec![candidate("A", "Alpha")];
        let existing = vec![stored(7, "A", "Alpha")];

        let partition = reconcile(&candidates, &existing);

        assert_eq!(partition.duplicates, vec![&existing[0]]);
        assert!(partition.new.is_empty());
        assert!(partition.conflicts.is_empty());
    }

    #[test]
    fn same_key_different_content_is_conflict() {
        let existing = vec![
            stored(1, "A", "Alpha"),
            stored(2, "B", "Beta"),
            stored(3, "A2", "Alpha"),
        ];
        let candidates = vec![candidate("A", "Changed")];

        let partition = reconcile(&candidates, &existing);

        assert_eq!(partition.conflict_ids(), vec![1]);
        assert!(partition.new.is_empty());
        assert!(!partition.is_clean());
    }

    #[test]
    fn conflicts_follow_snapshot_order_not_batch_order() {
        let existing = vec![
            stored(12, "A", "a"),
            stored(45, "B", "b"),
            stored(91, "C", "c"),
        ];
        let candidates = vec![
            candidate("C", "changed"),
            candidate("A", "changed"),
            candidate("B", "changed"),
        ];

        let partition = reconcile(&candidates, &existing);

        assert_eq!(partition.conflict_ids(), vec![12, 45, 91]);
    }

    #[test]
    fn stored_record_conflicting_twice_is_reported_once() {
        let existing = vec![stored(5, "A", "a")];
        let candidates = vec![candidate("A", "x"), candidate("A", "y")];

        let partition = reconcile(&candidates, &existing);

        assert_eq!(partition.conflict_ids(), vec![5]);
    }

    #[test]
    fn mixed_batch_splits_into_all_buckets() {
        let existing = vec![stored(1, "A", "a"), stored(2, "B", "b")];
        let candidates = vec![
            candidate("A", "a"),
            candidate("B", "other"),
            candidate("C", "c"),
        ];

        let partition = reconcile(&candidates, &existing);

        assert_eq!(partition.duplicates.len(), 1);
        assert_eq!(partition.conflict_ids(), vec![2]);
        assert_eq!(partition.new, vec![&candidates[2]]);
    }

    #[test]
    fn identical_repeat_within_batch_collapses() {
        let candidates = vec![candidate("A", "a"), candidate("A", "a")];
        let existing: Vec<Item> = vec![];

        let partition = reconcile(&candidates, &existing);

        assert_eq!(partition.new.len(), 1);
        assert_eq!(partition.duplicates.len(), 1);
        assert!(partition.repeated_keys.is_empty());
    }

    #[test]
    fn differing_repeat_within_batch_is_flagged() {
        let candidates = vec![candidate("A", "a"), candidate("A", "b")];
        let existing: Vec<Item> = vec![];

        let partition = reconcile(&candidates, &existing);

        assert_eq!(partition.new, vec![&candidates[0]]);
        assert_eq!(partition.repeated_keys, vec![&candidates[1]]);
        assert!(!partition.is_clean());
    }

    #[test]
    fn first_stored_record_wins_on_duplicate_snapshot_keys() {
        let existing = vec![stored(1, "A", "first"), stored(2, "A", "second")];
        let index = ExistingIndex::build(&existing);

        let (position, record) = index.lookup(&"A".to_string()).unwrap();
        assert_eq!(position, 0);
        assert_eq!(record.id, Some(1));
    }

    #[test]
    fn classify_single_candidate() {
        let existing = vec![stored(1, "A", "a")];
        let index = ExistingIndex::build(&existing);

        let same = candidate("A", "a");
        let changed = candidate("A", "z");
        let fresh = candidate("Q", "q");

        assert_eq!(index.classify(&same), Reconciled::Duplicate(&existing[0]));
        assert_eq!(
            index.classify(&changed),
            Reconciled::Conflicting {
                position: 0,
                stored: &existing[0]
            }
        );
        assert_eq!(index.classify(&fresh), Reconciled::New(&fresh));
    }

    #[test]
    fn partition_follows_per_candidate_classification() {
        let existing = vec![
            stored(1, "A", "a"),
            stored(2, "B", "b"),
            stored(3, "C", "c"),
        ];
        let candidates = vec![
            candidate("C", "changed"),
            candidate("A", "a"),
            candidate("D", "d"),
        ];
        let index = ExistingIndex::build(&existing);

        let partition = reconcile(&candidates, &existing);

        assert_eq!(
            index.classify(&candidates[0]),
            Reconciled::Conflicting {
                position: 2,
                stored: &existing[2]
            }
        );
        assert_eq!(partition.conflicts, vec![&existing[2]]);
        assert_eq!(index.classify(&candidates[1]), Reconciled::Duplicate(&existing[0]));
        assert_eq!(partition.duplicates, vec![&existing[0]]);
        assert_eq!(index.classify(&candidates[2]), Reconciled::New(&candidates[2]));
        assert_eq!(partition.new, vec![&candidates[2]]);
    }

    #[test]
    fn reconcile_is_repeatable() {
        let existing = vec![stored(1, "A", "a"), stored(2, "B", "b")];
        let candidates = vec![candidate("B", "x"), candidate("C", "c")];

        let first = reconcile(&candidates, &existing);
        let second = reconcile(&candidates, &existing);

        assert_eq!(first.conflict_ids(), second.conflict_ids());
        assert_eq!(first.new, second.new);
        assert_eq!(first.duplicates, second.duplicates);
    }
}
