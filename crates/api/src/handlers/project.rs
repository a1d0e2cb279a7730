//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use worktrack_core::error::CoreError;
use worktrack_core::import::import_records;
use worktrack_core::tracking::{validate_code, validate_name, ENTITY_PROJECT};
use worktrack_core::types::DbId;
use worktrack_db::models::project::{CreateProject, Project, UpdateProject};
use worktrack_db::ports::PgProjectStore;
use worktrack_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::import::{import_response, ImportRequest, ImportResponse};
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: ENTITY_PROJECT,
        id,
    })
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<DataResponse<Project>>)> {
    validate_code(&input.code)?;
    validate_name(&input.name)?;

    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(id = ?project.id, code = %project.code, "Project created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

/// GET /api/v1/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Project>>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: project }))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<DataResponse<Project>>> {
    if let Some(code) = &input.code {
        validate_code(code)?;
    }
    if let Some(name) = &input.name {
        validate_name(name)?;
    }

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: project }))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if ProjectRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

/// POST /api/v1/projects/import
pub async fn import(
    State(state): State<AppState>,
    Json(input): Json<ImportRequest<Project>>,
) -> AppResult<ImportResponse> {
    let store = PgProjectStore::new(state.pool.clone());
    let result = import_records(&store, input.candidates).await?;
    Ok(import_response(result))
}
