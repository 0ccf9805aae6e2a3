//! InvitationRepository - Repository per la lettura degli inviti

use super::InvitationStore;
use crate::entities::PilotInvite;
use sqlx::{Error, MySqlPool};
use tracing::{debug, instrument};

const LIST_FOR_PILOT: &str = r#"
    SELECT
        i.id AS invitation_id,
        i.pilot_id,
        i.enquiry_id,
        i.invite_round,
        CAST(i.status AS CHAR) AS invite_status,
        i.sent_at,
        i.opened_at,
        e.service_slug,
        e.date_needed,
        e.date_flexibility,
        e.site_location_text,
        e.postcode
    FROM pilot_invites i
    INNER JOIN enquiries e ON e.id = i.enquiry_id
    WHERE i.pilot_id = ?
    ORDER BY i.sent_at DESC, i.id DESC
    LIMIT ?
"#;

//INVITATION REPOSITORY
pub struct InvitationRepository {
    connection_pool: MySqlPool,
}

impl InvitationRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }
}

#[async_trait::async_trait]
impl InvitationStore for InvitationRepository {
    #[instrument(skip(self))]
    async fn list_for_pilot(&self, pilot_id: i64, limit: u32) -> Result<Vec<PilotInvite>, Error> {
        let invites = sqlx::query_as::<_, PilotInvite>(LIST_FOR_PILOT)
            .bind(pilot_id)
            .bind(i64::from(limit))
            .fetch_all(&self.connection_pool)
            .await?;

        debug!("Loaded {} invitations", invites.len());
        Ok(invites)
    }
}
