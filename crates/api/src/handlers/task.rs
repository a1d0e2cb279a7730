//! Handlers for the `/tasks` resource and the project-scoped listing under
//! `/projects/{id}/tasks`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use worktrack_core::error::CoreError;
use worktrack_core::import::import_records;
use worktrack_core::tracking::{
    validate_code, validate_estimated_hours, validate_name, ENTITY_TASK,
};
use worktrack_core::types::DbId;
use worktrack_db::models::task::{CreateTask, Task, UpdateTask};
use worktrack_db::ports::PgTaskStore;
use worktrack_db::repositories::TaskRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::import::{import_response, ImportRequest, ImportResponse};
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: ENTITY_TASK,
        id,
    })
}

/// POST /api/v1/tasks
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTask>,
) -> AppResult<(StatusCode, Json<DataResponse<Task>>)> {
    validate_code(&input.code)?;
    validate_name(&input.name)?;
    validate_estimated_hours(input.estimated_hours)?;

    let task = TaskRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: task })))
}

/// GET /api/v1/tasks
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Task>>>> {
    let tasks = TaskRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: tasks }))
}

/// GET /api/v1/projects/{id}/tasks
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Task>>>> {
    let tasks = TaskRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(DataResponse { data: tasks }))
}

/// GET /api/v1/tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Task>>> {
    let task = TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: task }))
}

/// PUT /api/v1/tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTask>,
) -> AppResult<Json<DataResponse<Task>>> {
    if let Some(code) = &input.code {
        validate_code(code)?;
    }
    if let Some(name) = &input.name {
        validate_name(name)?;
    }
    validate_estimated_hours(input.estimated_hours.flatten())?;

    let task = TaskRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: task }))
}

/// DELETE /api/v1/tasks/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if TaskRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

/// POST /api/v1/tasks/import
pub async fn import(
    State(state): State<AppState>,
    Json(input): Json<ImportRequest<Task>>,
) -> AppResult<ImportResponse> {
    let store = PgTaskStore::new(state.pool.clone());
    let result = import_records(&store, input.candidates).await?;
    Ok(import_response(result))
}
