//! Handlers for the `/contacts` pages.

use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use rolodex_core::contact::{has_required_fields, sanitized, ContactForm};
use rolodex_core::types::DbId;
use rolodex_db::models::contact::{Contact, NewContact};

use crate::error::{AppError, AppResult, WriteOp};
use crate::render;
use crate::state::AppState;

/// GET /contacts
///
/// List all contacts.
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let contacts = state.contacts.list().await?;
    Ok(Html(render::contacts_index(&contacts)))
}

/// GET /contacts/new
///
/// Render an empty creation form.
pub async fn new_form() -> Html<String> {
    Html(render::contact_new(None))
}

/// POST /contacts
///
/// Validate, sanitize, and store a submitted contact, then redirect to the
/// list. An incomplete form re-renders with an inline message and never
/// reaches the repository.
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> AppResult<Response> {
    if !has_required_fields(&form) {
        let page = render::contact_new(Some(render::REQUIRED_FIELDS_MESSAGE));
        return Ok(Html(page).into_response());
    }

    let input = new_contact(sanitized(&form));
    state
        .contacts
        .create(&input)
        .await
        .map_err(|err| AppError::from_write(WriteOp::Create, err))?;

    Ok(Redirect::to("/contacts").into_response())
}

/// GET /contacts/{id}
///
/// Render the detail page for one contact.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let contact = find_contact(&state, id).await?;
    Ok(Html(render::contact_show(&contact)))
}

/// GET /contacts/generated/{id}
///
/// Alias of [`show`] under the generated-contact URL.
pub async fn generated_show(
    state: State<AppState>,
    id: Path<DbId>,
) -> AppResult<Html<String>> {
    show(state, id).await
}

/// GET /contacts/{id}/edit
///
/// Render the edit form pre-filled from the stored record.
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let contact = find_contact(&state, id).await?;
    Ok(Html(render::contact_edit(id, &form_values(&contact), None)))
}

/// POST /contacts/{id}
///
/// Validate, sanitize, and replace the stored record wholesale, then
/// redirect to its detail page.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(form): Form<ContactForm>,
) -> AppResult<Response> {
    if !has_required_fields(&form) {
        let page = render::contact_edit(
            id,
            &sanitized(&form),
            Some(render::REQUIRED_FIELDS_MESSAGE),
        );
        return Ok(Html(page).into_response());
    }

    let input = new_contact(sanitized(&form));
    state
        .contacts
        .update(id, &input)
        .await
        .map_err(|err| AppError::from_write(WriteOp::Update, err))?;

    Ok(Redirect::to(&format!("/contacts/{id}")).into_response())
}

/// POST /contacts/{id}/delete
///
/// Remove the record, then redirect to the list.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Redirect> {
    state
        .contacts
        .delete(id)
        .await
        .map_err(|err| AppError::from_write(WriteOp::Delete, err))?;

    Ok(Redirect::to("/contacts"))
}

async fn find_contact(state: &AppState, id: DbId) -> AppResult<Contact> {
    state
        .contacts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Contact", id))
}

/// Build the storage DTO from a form that has passed validation.
fn new_contact(form: ContactForm) -> NewContact {
    NewContact {
        first_name: form.first_name.unwrap_or_default(),
        last_name: form.last_name.unwrap_or_default(),
        email_address: form.email_address,
        notes: form.notes,
    }
}

fn form_values(contact: &Contact) -> ContactForm {
    ContactForm {
        first_name: Some(contact.first_name.clone()),
        last_name: Some(contact.last_name.clone()),
        email_address: contact.email_address.clone(),
        notes: contact.notes.clone(),
    }
}
