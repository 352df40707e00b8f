//! API route handlers
//!
//! Routes are organized by functionality:
//!
//! - `page`: the static viewer page
//! - `kmp`: traced KMP search
//! - `health`: health checks, readiness, metrics and service metadata

pub mod health;
pub mod kmp;
pub mod page;

use crate::error::ServerError;

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
