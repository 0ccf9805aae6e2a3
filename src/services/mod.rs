//! Services module - handler HTTP
//!
//! Ogni modulo gestisce gli endpoint HTTP per una specifica funzionalità.

pub mod invitation;

// Re-exports per facilitare l'import
pub use invitation::{MAX_INVITES, list_my_invites};

use axum::{http::StatusCode, response::IntoResponse};

/// Root endpoint - health check
pub async fn root() -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}
