//! Invitation services - inviti del pilota autenticato

use crate::core::{AppError, AppState, AuthenticatedPilot};
use crate::dtos::InviteListDTO;
use axum::{
    Extension,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Hard cap on the rows returned by one call. Not configurable; older
/// invitations are only reachable through a future paginated endpoint.
pub const MAX_INVITES: u32 = 200;

#[instrument(skip(state, pilot), fields(pilot_id = %pilot.pilot_id))]
pub async fn list_my_invites(
    State(state): State<Arc<AppState>>,
    Extension(pilot): Extension<AuthenticatedPilot>, // ottenuto dal middleware di autenticazione
) -> Result<Response, AppError> {
    debug!("Listing invitations for pilot");
    // 1. Leggere gli inviti del pilota (piu' recenti prima, massimo MAX_INVITES)
    // 2. Convertire ogni riga in InviteItemDTO
    // 3. Serializzare { "items": [...] }; un errore qui diventa un 500 JSON
    let mut invites = state
        .invitation
        .list_for_pilot(pilot.pilot_id, MAX_INVITES)
        .await?;

    invites.retain(|invite| invite.pilot_id == pilot.pilot_id);
    invites.truncate(MAX_INVITES as usize);

    info!("Found {} invitations", invites.len());
    let body = serde_json::to_vec(&InviteListDTO::from(invites))?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
