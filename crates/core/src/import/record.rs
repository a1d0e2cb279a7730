//! The contract a record kind fulfils to take part in bulk import.

use std::fmt::Debug;
use std::hash::Hash;

use crate::types::DbId;

/// A record that can be bulk-imported and reconciled against stored rows.
///
/// Two records with equal [`business_key`](Self::business_key) denote the
/// same real-world entity. They are identical when
/// [`same_content`](Self::same_content) also holds; store identity never
/// takes part in either comparison.
pub trait ImportRecord: Clone + Send + Sync + 'static {
    /// Value identifying "the same conceptual record" across batches.
    type Key: Eq + Hash + Clone + Debug + Send + Sync;

    /// Short kind name used in log fields (e.g. `"project"`).
    const KIND: &'static str;

    /// Prefix of the conflict message (e.g. `"PROJECT_CONFLICTS"`).
    const CONFLICT_MARKER: &'static str;

    /// Store-assigned identity. `None` on candidates.
    fn identity(&self) -> Option<DbId>;

    fn business_key(&self) -> Self::Key;

    /// Value equality over key and content fields, ignoring identity.
    fn same_content(&self, other: &Self) -> bool;
}
