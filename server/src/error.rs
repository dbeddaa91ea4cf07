//! Domain failures and their mapping to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Failures surfaced by the request pipeline. Nothing is caught mid-pipeline;
/// the error propagates to the response boundary where `IntoResponse` maps it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ZettaiError {
    /// No list is filed under the requested user and list name.
    #[error("list unknown")]
    ListUnknown,
}

impl IntoResponse for ZettaiError {
    fn into_response(self) -> Response {
        match self {
            // The body is a plain message and not part of the contract.
            ZettaiError::ListUnknown => {
                (StatusCode::NOT_FOUND, self.to_string()).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_unknown_maps_to_404() {
        let response = ZettaiError::ListUnknown.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
