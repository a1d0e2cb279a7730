//! Route definitions for the `/sub-divisions` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::sub_division;
use crate::state::AppState;

/// Routes mounted at `/sub-divisions`.
///
/// ```text
/// GET    /            -> list
/// POST   /            -> create
/// POST   /import      -> import
/// GET    /{id}        -> get_by_id
/// PUT    /{id}        -> update
/// DELETE /{id}        -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(sub_division::list).post(sub_division::create))
        .route("/import", post(sub_division::import))
        .route(
            "/{id}",
            get(sub_division::get_by_id)
                .put(sub_division::update)
                .delete(sub_division::delete),
        )
}
