//! Route definitions for the `/contacts` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::contacts;
use crate::state::AppState;

/// Routes mounted at `/contacts`.
///
/// Static segments (`/new`, `/generated`) take priority over the `{id}`
/// capture.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(contacts::index).post(contacts::create))
        .route("/new", get(contacts::new_form))
        .route("/generated/{id}", get(contacts::generated_show))
        .route("/{id}", get(contacts::show).post(contacts::update))
        .route("/{id}/edit", get(contacts::edit_form))
        .route("/{id}/delete", post(contacts::delete))
}
