//! The repository port and the import orchestrator built on it.
//!
//! [`import_records`] is generic over the record kind and the port, so each
//! record kind only supplies its [`ImportRecord`] impl and a port
//! implementation.

use async_trait::async_trait;

use crate::import::reconcile::reconcile;
use crate::import::record::ImportRecord;
use crate::import::result::{ImportResult, ImportStatus, MSG_EMPTY_BATCH, MSG_REPEATED_KEYS};

/// Name of the batch parameter reported when it is absent.
pub const PARAM_CANDIDATES: &str = "candidates";

// ---------------------------------------------------------------------------
// Port
// ---------------------------------------------------------------------------

/// Storage collaborator for one record kind.
///
/// `import` is only ever called with a conflict-free, non-empty batch and is
/// expected to answer [`ImportStatus::Ok`]. Any other answer is treated as a
/// broken contract by [`import_records`].
#[async_trait]
pub trait ImportRepository<R: ImportRecord>: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Every currently stored record of this kind.
    async fn get_all(&self) -> Result<Vec<R>, Self::Error>;

    /// Persist exactly `records` and report how many were written.
    async fn import(&self, records: &[R]) -> Result<ImportResult, Self::Error>;
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failures of an import call that are not ordinary [`ImportResult`]s.
#[derive(Debug, thiserror::Error)]
pub enum ImportError<E: std::error::Error + 'static> {
    /// The batch itself was absent.
    #[error("Invalid argument: {param}")]
    InvalidArgument { param: &'static str },

    /// The repository rejected a batch that had already been validated.
    #[error("Repository answered {status} for a validated batch: {message}")]
    InvalidOperation {
        status: ImportStatus,
        message: String,
    },

    /// The repository itself failed.
    #[error(transparent)]
    Repository(E),
}

// ---------------------------------------------------------------------------
// Orchestrator
// ---------------------------------------------------------------------------

/// Import `candidates` through `port`.
///
/// 1. `None` fails with [`ImportError::InvalidArgument`]; an empty batch
///    answers `BadRequest`. The port is not touched in either case.
/// 2. The stored snapshot is read once and reconciled against the batch.
/// 3. Conflicts answer `Conflict` listing the stored identities; a batch of
///    pure duplicates answers `Ok` / "already imported". Neither writes.
/// 4. Otherwise only the new candidates are handed to `port.import`, whose
///    `Ok` result is returned unchanged.
///
/// Snapshot and write are separate calls; uniqueness under concurrent
/// writers is left to the store.
pub async fn import_records<R, P>(
    port: &P,
    candidates: Option<Vec<R>>,
) -> Result<ImportResult, ImportError<P::Error>>
where
    R: ImportRecord,
    P: ImportRepository<R> + ?Sized,
{
    let candidates = candidates.ok_or(ImportError::InvalidArgument {
        param: PARAM_CANDIDATES,
    })?;

    if candidates.is_empty() {
        tracing::debug!(kind = R::KIND, "Rejected empty import batch");
        return Ok(ImportResult::bad_request(MSG_EMPTY_BATCH));
    }

    let existing = port.get_all().await.map_err(ImportError::Repository)?;
    let partition = reconcile(&candidates, &existing);

    tracing::info!(
        kind = R::KIND,
        candidates = candidates.len(),
        existing = existing.len(),
        new = partition.new.len(),
        duplicates = partition.duplicates.len(),
        conflicts = partition.conflicts.len(),
        "Reconciled import batch"
    );

    if !partition.conflicts.is_empty() {
        let ids = partition.conflict_ids();
        tracing::warn!(kind = R::KIND, ?ids, "Import batch conflicts with stored records");
        return Ok(ImportResult::conflict(R::CONFLICT_MARKER, &ids));
    }

    if !partition.repeated_keys.is_empty() {
        let keys: Vec<R::Key> = partition
            .repeated_keys
            .iter()
            .map(|record| record.business_key())
            .collect();
        tracing::warn!(kind = R::KIND, ?keys, "Import batch repeats keys with different content");
        return Ok(ImportResult::bad_request(MSG_REPEATED_KEYS));
    }

    if partition.new.is_empty() {
        return Ok(ImportResult::already_imported());
    }

    let fresh: Vec<R> = partition.new.into_iter().cloned().collect();
    let result = port
        .import(&fresh)
        .await
        .map_err(ImportError::Repository)?;

    if !result.is_ok() {
        tracing::error!(
            kind = R::KIND,
            status = %result.status(),
            detail = result.message(),
            "Repository rejected a validated import batch"
        );
        return Err(ImportError::InvalidOperation {
            status: result.status(),
            message: result.message().to_string(),
        });
    }

    tracing::info!(
        kind = R::KIND,
        imported = result.imported_count(),
        "Import batch stored"
    );
    Ok(result)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
