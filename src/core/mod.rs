//! Core Module - Componenti infrastrutturali dell'applicazione
//!
//! - Authentication of pilot sessions
//! - Configuration
//! - Error handling
//! - Application state

pub mod auth;
pub mod config;
pub mod error;
pub mod state;

// Re-exports per facilitare l'import
pub use auth::{AuthenticatedPilot, Claims, authentication_middleware, decode_jwt, encode_jwt};
pub use config::Config;
pub use error::AppError;
pub use state::AppState;
