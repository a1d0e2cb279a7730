//! Shared request and response shapes for the bulk import endpoints.

use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use worktrack_core::import::{ImportResult, ImportStatus};

use crate::response::DataResponse;

/// Body of `POST /{resource}/import`.
///
/// A missing or `null` `candidates` field is the absent batch and is
/// rejected as an invalid argument; `[]` is an empty batch.
#[derive(Debug, Deserialize)]
pub struct ImportRequest<T> {
    pub candidates: Option<Vec<T>>,
}

/// Status code plus `{ "data": ImportResult }` body.
pub type ImportResponse = (StatusCode, Json<DataResponse<ImportResult>>);

/// Map an import outcome onto its HTTP status.
pub fn import_response(result: ImportResult) -> ImportResponse {
    let status = match result.status() {
        ImportStatus::Ok => StatusCode::OK,
        ImportStatus::BadRequest => StatusCode::BAD_REQUEST,
        ImportStatus::Conflict => StatusCode::CONFLICT,
    };
    (status, Json(DataResponse { data: result }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_map_to_http() {
        assert_eq!(import_response(ImportResult::already_imported()).0, StatusCode::OK);
        assert_eq!(
            import_response(ImportResult::bad_request("x")).0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            import_response(ImportResult::conflict("PROJECT_CONFLICTS", &[1])).0,
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn missing_candidates_field_is_absent_batch() {
        let request: ImportRequest<serde_json::Value> =
            serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(request.candidates.is_none());

        let request: ImportRequest<serde_json::Value> =
            serde_json::from_value(serde_json::json!({"candidates": []})).unwrap();
        assert_eq!(request.candidates.map(|c| c.len()), Some(0));
    }
}
