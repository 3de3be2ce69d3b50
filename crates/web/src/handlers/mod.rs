//! Request handlers.
//!
//! Each endpoint is one async fn: extract, validate, sanitize, delegate to
//! the contact repository, and pick the response (page render, redirect, or
//! a failure translated by [`AppError`](crate::error::AppError)).

pub mod contacts;
