//! Error types for the Zettai client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "no list is filed under that user and name" from "the server returned an
//! unexpected status." All other non-2xx responses land in `HttpError` with
//! the raw status code and body for debugging.

use thiserror::Error;

/// Errors returned by `ZettaiClient` parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404 — the requested list does not exist.
    #[error("list not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },
}
