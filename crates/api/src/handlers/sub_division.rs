//! Handlers for the `/sub-divisions` resource and the project-scoped
//! listing under `/projects/{id}/sub-divisions`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use worktrack_core::error::CoreError;
use worktrack_core::import::import_records;
use worktrack_core::tracking::{validate_code, validate_name, ENTITY_SUB_DIVISION};
use worktrack_core::types::DbId;
use worktrack_db::models::sub_division::{CreateSubDivision, SubDivision, UpdateSubDivision};
use worktrack_db::ports::PgSubDivisionStore;
use worktrack_db::repositories::SubDivisionRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::import::{import_response, ImportRequest, ImportResponse};
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: ENTITY_SUB_DIVISION,
        id,
    })
}

/// POST /api/v1/sub-divisions
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSubDivision>,
) -> AppResult<(StatusCode, Json<DataResponse<SubDivision>>)> {
    validate_code(&input.code)?;
    validate_name(&input.name)?;

    let sub_division = SubDivisionRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: sub_division })))
}

/// GET /api/v1/sub-divisions
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<SubDivision>>>> {
    let sub_divisions = SubDivisionRepo::list(&state.pool).await?;
    Ok(Json(DataResponse {
        data: sub_divisions,
    }))
}

/// GET /api/v1/projects/{id}/sub-divisions
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<SubDivision>>>> {
    let sub_divisions = SubDivisionRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(DataResponse {
        data: sub_divisions,
    }))
}

/// GET /api/v1/sub-divisions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<SubDivision>>> {
    let sub_division = SubDivisionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: sub_division }))
}

/// PUT /api/v1/sub-divisions/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSubDivision>,
) -> AppResult<Json<DataResponse<SubDivision>>> {
    if let Some(code) = &input.code {
        validate_code(code)?;
    }
    if let Some(name) = &input.name {
        validate_name(name)?;
    }

    let sub_division = SubDivisionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: sub_division }))
}

/// DELETE /api/v1/sub-divisions/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if SubDivisionRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

/// POST /api/v1/sub-divisions/import
pub async fn import(
    State(state): State<AppState>,
    Json(input): Json<ImportRequest<SubDivision>>,
) -> AppResult<ImportResponse> {
    let store = PgSubDivisionStore::new(state.pool.clone());
    let result = import_records(&store, input.candidates).await?;
    Ok(import_response(result))
}
