//! Application errors.

use crate::context::Response;
use pitchside_auth::AuthError;
use pitchside_commerce::CommerceError;
use pitchside_store::StoreError;
use thiserror::Error;

/// Errors that can escape a route handler.
///
/// Expected outcomes (bad input, missing records) are handled inside the
/// handlers with flash messages; these are the unexpected ones.
#[derive(Error, Debug)]
pub enum AppError {
    /// Store failure.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Auth failure.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// Domain failure.
    #[error("commerce error: {0}")]
    Commerce(#[from] CommerceError),
}

impl AppError {
    /// Map the error to the response served to the client.
    pub fn to_response(&self) -> Response {
        Response::internal_error()
    }
}
