//! Domain logic for the rolodex contact manager.
//!
//! Pure types and functions only: validation, sanitization, and the shared
//! error vocabulary. No I/O, no HTTP, no storage.

pub mod contact;
pub mod error;
pub mod sanitize;
pub mod types;
