//! Invitation entity - invito di un pilota con i dati della richiesta

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// One invitation joined with the enquiry it was sent for.
///
/// `invite_status` is passed through as stored; the status lifecycle is
/// owned by the dispatch side.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct PilotInvite {
    pub invitation_id: i64,
    pub pilot_id: i64,
    pub enquiry_id: i64,
    pub invite_round: i32,
    pub invite_status: String,
    pub sent_at: DateTime<Utc>,
    pub opened_at: Option<DateTime<Utc>>, // null finché il pilota non apre l'invito
    pub service_slug: String,
    pub date_needed: Option<NaiveDate>,
    pub date_flexibility: Option<String>,
    pub site_location_text: Option<String>,
    pub postcode: Option<String>,
}
