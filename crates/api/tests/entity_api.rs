//! HTTP-level tests for single-record validation on the entity endpoints.
//!
//! Validation runs before any query, so these need no database.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json, put_json};
use serde_json::json;

#[tokio::test]
async fn create_project_with_blank_name_returns_400() {
    let response = post_json(
        common::build_test_app(),
        "/api/v1/projects",
        json!({"code": "WEB", "name": "  "}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "name must not be empty");
}

#[tokio::test]
async fn create_project_with_blank_code_returns_400() {
    let response = post_json(
        common::build_test_app(),
        "/api/v1/projects",
        json!({"code": "", "name": "Website"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "code must not be empty");
}

#[tokio::test]
async fn create_sub_division_with_spaced_code_returns_400() {
    let response = post_json(
        common::build_test_app(),
        "/api/v1/sub-divisions",
        json!({"project_id": 1, "code": "BACK END", "name": "Backend"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "code must not contain whitespace");
}

#[tokio::test]
async fn create_task_with_negative_estimate_returns_400() {
    let response = post_json(
        common::build_test_app(),
        "/api/v1/tasks",
        json!({"project_id": 1, "code": "T-1", "name": "Schema", "estimated_hours": -2}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "estimated_hours must not be negative");
}

#[tokio::test]
async fn update_task_with_blank_name_returns_400() {
    let response = put_json(
        common::build_test_app(),
        "/api/v1/tasks/5",
        json!({"name": ""}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_numeric_id_is_rejected() {
    let response = common::get(common::build_test_app(), "/api/v1/projects/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_task_with_negative_estimate_returns_400() {
    let response = put_json(
        common::build_test_app(),
        "/api/v1/tasks/5",
        json!({"estimated_hours": -3, "description": null}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "estimated_hours must not be negative");
}
