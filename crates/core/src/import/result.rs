//! The report returned from every import call.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

pub const MSG_EMPTY_BATCH: &str = "candidate list must be filled";
pub const MSG_ALREADY_IMPORTED: &str = "already imported";
pub const MSG_REPEATED_KEYS: &str = "candidate list contains conflicting entries for the same key";

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Outcome category of an import call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportStatus {
    BadRequest,
    Conflict,
    Ok,
}

impl ImportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "bad_request",
            Self::Conflict => "conflict",
            Self::Ok => "ok",
        }
    }
}

impl std::fmt::Display for ImportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

/// Transient report of one import call. Built once, never mutated.
///
/// `imported_count` is zero for every status other than [`ImportStatus::Ok`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportResult {
    status: ImportStatus,
    message: String,
    imported_count: usize,
}

impl ImportResult {
    /// Records were written. Used by repository implementations.
    pub fn ok(imported_count: usize, message: impl Into<String>) -> Self {
        Self {
            status: ImportStatus::Ok,
            message: message.into(),
            imported_count,
        }
    }

    /// Every candidate already exists with identical content.
    pub fn already_imported() -> Self {
        Self::ok(0, MSG_ALREADY_IMPORTED)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: ImportStatus::BadRequest,
            message: message.into(),
            imported_count: 0,
        }
    }

    /// Conflict report in the `MARKER:id1,id2,...` format.
    pub fn conflict(marker: &str, ids: &[DbId]) -> Self {
        let ids = ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        Self::conflict_message(format!("{marker}:{ids}"))
    }

    /// Conflict with a free-form message, e.g. a store-level constraint name.
    pub fn conflict_message(message: impl Into<String>) -> Self {
        Self {
            status: ImportStatus::Conflict,
            message: message.into(),
            imported_count: 0,
        }
    }

    pub fn status(&self) -> ImportStatus {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn imported_count(&self) -> usize {
        self.imported_count
    }

    pub fn is_ok(&self) -> bool {
        self.status == ImportStatus::Ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_message_lists_ids_after_marker() {
        let result = ImportResult::conflict("PROJECT_CONFLICTS", &[12, 45, 91]);
        assert_eq!(result.status(), ImportStatus::Conflict);
        assert_eq!(result.message(), "PROJECT_CONFLICTS:12,45,91");
        assert_eq!(result.imported_count(), 0);
    }

    #[test]
    fn already_imported_is_ok_with_zero_count() {
        let result = ImportResult::already_imported();
        assert!(result.is_ok());
        assert_eq!(result.message(), "already imported");
        assert_eq!(result.imported_count(), 0);
    }

    #[test]
    fn bad_request_never_counts() {
        let result = ImportResult::bad_request(MSG_EMPTY_BATCH);
        assert_eq!(result.status(), ImportStatus::BadRequest);
        assert_eq!(result.imported_count(), 0);
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_value(ImportResult::ok(3, "imported 3 project record(s)")).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["imported_count"], 3);
        assert_eq!(
            serde_json::to_value(ImportStatus::BadRequest).unwrap(),
            "bad_request"
        );
    }
}
