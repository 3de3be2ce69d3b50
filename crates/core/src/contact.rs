//! The contact form boundary type, its validator, and field sanitization.
//!
//! Request bodies arrive as loosely-shaped form submissions; [`ContactForm`]
//! is the explicit, all-optional shape they are deserialized into before any
//! entity is constructed. Unknown form fields are dropped during
//! deserialization, so the sanitized output only ever carries the fixed
//! four-field set.

use serde::Deserialize;

use crate::sanitize::strip_html;

/// Raw fields submitted for a contact.
///
/// Every field is optional at this layer; presence of the required ones is
/// exactly what [`has_required_fields`] checks.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactForm {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email_address: Option<String>,
    pub notes: Option<String>,
}

/// Check that `first_name` and `last_name` are both present and non-empty.
///
/// Deliberately presence-only: no trimming and no format rules, so an
/// all-whitespace name passes. `email_address` and `notes` are unrestricted.
pub fn has_required_fields(form: &ContactForm) -> bool {
    let filled = |field: &Option<String>| field.as_deref().is_some_and(|v| !v.is_empty());
    filled(&form.first_name) && filled(&form.last_name)
}

/// Sanitize every field of the contact set, independently.
///
/// Absent optional fields stay absent. Runs only after
/// [`has_required_fields`] has accepted the form.
pub fn sanitized(form: &ContactForm) -> ContactForm {
    let clean = |field: &Option<String>| field.as_deref().map(strip_html);
    ContactForm {
        first_name: clean(&form.first_name),
        last_name: clean(&form.last_name),
        email_address: clean(&form.email_address),
        notes: clean(&form.notes),
    }
}
