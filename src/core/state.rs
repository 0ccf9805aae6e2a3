//! Application State - Stato globale dell'applicazione
//!
//! Holds the datastore seam and the session signing key shared by every
//! route and middleware.

use crate::repositories::{InvitationRepository, InvitationStore};
use sqlx::MySqlPool;
use std::sync::Arc;

/// Stato globale dell'applicazione condiviso tra tutte le route e middleware
pub struct AppState {
    /// Read access to pilot invitations
    pub invitation: Arc<dyn InvitationStore>,

    /// Secret key used to verify pilot session tokens
    pub jwt_secret: String,
}

impl AppState {
    /// Builds the state on top of a MySQL connection pool
    pub fn new(pool: MySqlPool, jwt_secret: String) -> Self {
        Self::with_store(Arc::new(InvitationRepository::new(pool)), jwt_secret)
    }

    /// Builds the state on top of any invitation store
    pub fn with_store(invitation: Arc<dyn InvitationStore>, jwt_secret: String) -> Self {
        Self {
            invitation,
            jwt_secret,
        }
    }
}
