//! Pilot invitations service - espone i moduli principali per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, auth, config};
pub use services::root;

use axum::{Router, middleware, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Crea il router principale dell'applicazione
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/api/pilot", configure_pilot_routes(state.clone()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Configura le routes del pannello pilota (tutte autenticate)
fn configure_pilot_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use crate::services::list_my_invites;

    Router::new()
        .route("/me/invites", get(list_my_invites))
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}
