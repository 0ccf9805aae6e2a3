//! Invitation DTOs - forma JSON degli inviti restituiti al pilota

use crate::entities::PilotInvite;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Body of `GET /api/pilot/me/invites`
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct InviteListDTO {
    pub items: Vec<InviteItemDTO>,
}

/// A single invitation as the dashboard sees it. Timestamps and dates
/// travel as text; missing values are `null`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InviteItemDTO {
    pub invitation_id: i64,
    pub enquiry_id: i64,
    pub invite_round: i32,
    pub invite_status: String,
    pub sent_at: String,
    pub opened_at: Option<String>,
    pub service_slug: String,
    pub date_needed: Option<String>,
    pub date_flexibility: Option<String>,
    pub site_location_text: Option<String>,
    pub postcode: Option<String>,
}

fn timestamp_text(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

impl From<PilotInvite> for InviteItemDTO {
    fn from(value: PilotInvite) -> Self {
        Self {
            invitation_id: value.invitation_id,
            enquiry_id: value.enquiry_id,
            invite_round: value.invite_round,
            invite_status: value.invite_status,
            sent_at: timestamp_text(&value.sent_at),
            opened_at: value.opened_at.as_ref().map(timestamp_text),
            service_slug: value.service_slug,
            date_needed: value.date_needed.map(|d| d.format("%Y-%m-%d").to_string()),
            date_flexibility: value.date_flexibility,
            site_location_text: value.site_location_text,
            postcode: value.postcode,
        }
    }
}

impl From<Vec<PilotInvite>> for InviteListDTO {
    fn from(rows: Vec<PilotInvite>) -> Self {
        Self {
            items: rows.into_iter().map(InviteItemDTO::from).collect(),
        }
    }
}
