//! Route definitions for the `/projects` resource.
//!
//! Also nests the project-scoped sub-division and task listings.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{project, sub_division, task};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// POST   /import                            -> import
/// GET    /{id}                              -> get_by_id
/// PUT    /{id}                              -> update
/// DELETE /{id}                              -> delete
///
/// GET    /{id}/sub-divisions                -> sub_division::list_by_project
/// GET    /{id}/tasks                        -> task::list_by_project
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/import", post(project::import))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/{id}/sub-divisions", get(sub_division::list_by_project))
        .route("/{id}/tasks", get(task::list_by_project))
}
