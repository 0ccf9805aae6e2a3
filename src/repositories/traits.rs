//! Datastore seam for the invitations endpoint.

use crate::entities::PilotInvite;

/// Read access to a pilot's invitations joined with their enquiries.
///
/// Implementations must be shareable across request tasks.
#[async_trait::async_trait]
pub trait InvitationStore: Send + Sync + 'static {
    /// Lists the invitations sent to `pilot_id`, newest first.
    ///
    /// # Arguments
    /// * `pilot_id` - Pilot whose invitations are read
    /// * `limit` - Maximum number of rows to return
    ///
    /// # Returns
    /// * `Ok(Vec<PilotInvite>)` - Rows ordered by `sent_at` descending (can be empty)
    /// * `Err(sqlx::Error)` - The read failed
    ///
    /// # Note
    /// Invitations whose enquiry no longer exists are not returned.
    async fn list_for_pilot(
        &self,
        pilot_id: i64,
        limit: u32,
    ) -> Result<Vec<PilotInvite>, sqlx::Error>;
}
