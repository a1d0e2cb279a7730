//! HTTP-level tests for the bulk import endpoints.
//!
//! Only the guard paths are exercised here: they answer before the
//! repository is consulted, so no database is needed. Reconciliation
//! outcomes are covered by the orchestrator tests in `worktrack-core`.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json};
use serde_json::json;

const IMPORT_ENDPOINTS: &[&str] = &[
    "/api/v1/projects/import",
    "/api/v1/sub-divisions/import",
    "/api/v1/tasks/import",
];

// ---------------------------------------------------------------------------
// Absent batch
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_candidates_is_invalid_argument() {
    for uri in IMPORT_ENDPOINTS {
        let response = post_json(common::build_test_app(), uri, json!({})).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri: {uri}");

        let json = body_json(response).await;
        assert_eq!(json["code"], "INVALID_ARGUMENT", "uri: {uri}");
        assert_eq!(json["error"], "Missing required argument: candidates");
    }
}

#[tokio::test]
async fn null_candidates_is_invalid_argument() {
    let response = post_json(
        common::build_test_app(),
        "/api/v1/projects/import",
        json!({"candidates": null}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_ARGUMENT");
}

// ---------------------------------------------------------------------------
// Empty batch
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_batch_is_bad_request_result() {
    for uri in IMPORT_ENDPOINTS {
        let response = post_json(common::build_test_app(), uri, json!({"candidates": []})).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri: {uri}");

        let json = body_json(response).await;
        assert_eq!(json["data"]["status"], "bad_request");
        assert_eq!(json["data"]["message"], "candidate list must be filled");
        assert_eq!(json["data"]["imported_count"], 0);
    }
}

// ---------------------------------------------------------------------------
// Malformed candidates
// ---------------------------------------------------------------------------

#[tokio::test]
async fn candidate_without_code_is_rejected_by_extractor() {
    let response = post_json(
        common::build_test_app(),
        "/api/v1/projects/import",
        json!({"candidates": [{"name": "No code"}]}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn import_requires_post() {
    let response = common::get(common::build_test_app(), "/api/v1/tasks/import").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
