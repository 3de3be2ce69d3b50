//! Server-rendered HTML pages.
//!
//! The view layer is a set of typed render functions over a shared layout,
//! one per template. Every interpolated value passes through
//! [`escape_html`]; free-text fields are additionally sanitized at intake
//! (see `rolodex_core::sanitize`). Render functions are infallible.

use rolodex_core::contact::ContactForm;
use rolodex_core::types::DbId;
use rolodex_db::models::contact::Contact;

/// Message shown when a submitted form is missing required fields.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields.";

/// Escape a value for interpolation into HTML text or attribute content.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Wrap page content in the shared layout.
fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head><meta charset=\"utf-8\"><title>{title} - Rolodex</title></head>\n\
         <body>\n<h1>{title}</h1>\n{body}</body>\n</html>\n",
        title = escape_html(title),
    )
}

fn error_banner(error: Option<&str>) -> String {
    match error {
        Some(msg) => format!("<p class=\"error\">{}</p>\n", escape_html(msg)),
        None => String::new(),
    }
}

/// The shared create/edit form.
fn contact_form(action: &str, values: &ContactForm) -> String {
    let field = |value: &Option<String>| escape_html(value.as_deref().unwrap_or(""));
    format!(
        "<form method=\"post\" action=\"{action}\">\n\
         <label>First name <input name=\"first_name\" value=\"{first}\"></label>\n\
         <label>Last name <input name=\"last_name\" value=\"{last}\"></label>\n\
         <label>Email address <input name=\"email_address\" value=\"{email}\"></label>\n\
         <label>Notes <textarea name=\"notes\">{notes}</textarea></label>\n\
         <button type=\"submit\">Save</button>\n\
         </form>\n",
        action = escape_html(action),
        first = field(&values.first_name),
        last = field(&values.last_name),
        email = field(&values.email_address),
        notes = field(&values.notes),
    )
}

/// The contact list page.
pub fn contacts_index(contacts: &[Contact]) -> String {
    let mut rows = String::new();
    for contact in contacts {
        rows.push_str(&format!(
            "<li><a href=\"/contacts/{id}\">{first} {last}</a></li>\n",
            id = contact.id,
            first = escape_html(&contact.first_name),
            last = escape_html(&contact.last_name),
        ));
    }
    let body = format!(
        "<p><a href=\"/contacts/new\">New contact</a></p>\n<ul>\n{rows}</ul>\n"
    );
    layout("Contacts", &body)
}

/// The contact detail page, with edit and delete controls.
pub fn contact_show(contact: &Contact) -> String {
    let body = format!(
        "<dl>\n\
         <dt>First name</dt><dd>{first}</dd>\n\
         <dt>Last name</dt><dd>{last}</dd>\n\
         <dt>Email address</dt><dd>{email}</dd>\n\
         <dt>Notes</dt><dd>{notes}</dd>\n\
         <dt>Created</dt><dd>{created}</dd>\n\
         </dl>\n\
         <p><a href=\"/contacts/{id}/edit\">Edit</a></p>\n\
         <form method=\"post\" action=\"/contacts/{id}/delete\">\n\
         <button type=\"submit\">Delete</button>\n\
         </form>\n\
         <p><a href=\"/contacts\">Back to contacts</a></p>\n",
        id = contact.id,
        first = escape_html(&contact.first_name),
        last = escape_html(&contact.last_name),
        email = escape_html(contact.email_address.as_deref().unwrap_or("")),
        notes = escape_html(contact.notes.as_deref().unwrap_or("")),
        created = contact.created_at.format("%Y-%m-%d %H:%M UTC"),
    );
    layout(
        &format!("{} {}", contact.first_name, contact.last_name),
        &body,
    )
}

/// The creation form. Re-rendered empty (plus the message) after a failed
/// submission.
pub fn contact_new(error: Option<&str>) -> String {
    let body = format!(
        "{banner}{form}<p><a href=\"/contacts\">Back to contacts</a></p>\n",
        banner = error_banner(error),
        form = contact_form("/contacts", &ContactForm::default()),
    );
    layout("New contact", &body)
}

/// The edit form, pre-filled from a stored contact or from a failed
/// submission's values.
pub fn contact_edit(id: DbId, values: &ContactForm, error: Option<&str>) -> String {
    let body = format!(
        "{banner}{form}<p><a href=\"/contacts/{id}\">Cancel</a></p>\n",
        banner = error_banner(error),
        form = contact_form(&format!("/contacts/{id}"), values),
    );
    layout("Edit contact", &body)
}
