pub mod health;
pub mod project;
pub mod sub_division;
pub mod task;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                                  list, create
/// /projects/import                           bulk import (POST)
/// /projects/{id}                             get, update, delete
/// /projects/{id}/sub-divisions               list by project
/// /projects/{id}/tasks                       list by project
///
/// /sub-divisions                             list, create
/// /sub-divisions/import                      bulk import (POST)
/// /sub-divisions/{id}                        get, update, delete
///
/// /tasks                                     list, create
/// /tasks/import                              bulk import (POST)
/// /tasks/{id}                                get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/sub-divisions", sub_division::router())
        .nest("/tasks", task::router())
}
