//! Route definitions.

pub mod contacts;
pub mod health;

use axum::response::Redirect;
use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Build the page route tree.
///
/// ```text
/// GET  /                          -> redirect to /contacts
///
/// GET  /contacts                  -> list
/// POST /contacts                  -> create
/// GET  /contacts/new              -> creation form
/// GET  /contacts/generated/{id}   -> show (alias)
/// GET  /contacts/{id}             -> show
/// POST /contacts/{id}             -> update
/// GET  /contacts/{id}/edit        -> edit form
/// POST /contacts/{id}/delete      -> delete
/// ```
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::to("/contacts") }))
        .nest("/contacts", contacts::router())
}
