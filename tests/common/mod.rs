#![allow(dead_code)]

use axum_test::TestServer;
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use pilot_invites::core::AppState;
use pilot_invites::entities::PilotInvite;
use pilot_invites::repositories::InvitationStore;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const JWT_SECRET: &str = "ilmiobellissimosegretochevaassolutamentecambiato";

/// Enquiry row held by [`MemoryInvitationStore`]
#[derive(Debug, Clone)]
pub struct EnquiryRecord {
    pub service_slug: String,
    pub date_needed: Option<NaiveDate>,
    pub date_flexibility: Option<String>,
    pub site_location_text: Option<String>,
    pub postcode: Option<String>,
}

/// Invitation row held by [`MemoryInvitationStore`]
#[derive(Debug, Clone)]
pub struct InviteRecord {
    pub id: i64,
    pub pilot_id: i64,
    pub enquiry_id: i64,
    pub invite_round: i32,
    pub status: String,
    pub sent_at: DateTime<Utc>,
    pub opened_at: Option<DateTime<Utc>>,
}

/// In-memory store mirroring the SQL read: filter by pilot, inner join on
/// enquiries, newest first, limit.
#[derive(Default)]
pub struct MemoryInvitationStore {
    pub enquiries: HashMap<i64, EnquiryRecord>,
    pub invites: Vec<InviteRecord>,
    pub requested_limits: Mutex<Vec<u32>>,
}

impl MemoryInvitationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_enquiry(mut self, id: i64, service_slug: &str, postcode: &str) -> Self {
        self.enquiries.insert(
            id,
            EnquiryRecord {
                service_slug: service_slug.to_string(),
                date_needed: NaiveDate::from_ymd_opt(2025, 6, 1),
                date_flexibility: Some("flexible_week".to_string()),
                site_location_text: Some(format!("Site for enquiry {id}")),
                postcode: Some(postcode.to_string()),
            },
        );
        self
    }

    pub fn with_invite(
        mut self,
        id: i64,
        pilot_id: i64,
        enquiry_id: i64,
        sent_at: DateTime<Utc>,
    ) -> Self {
        self.invites.push(InviteRecord {
            id,
            pilot_id,
            enquiry_id,
            invite_round: 1,
            status: "sent".to_string(),
            sent_at,
            opened_at: None,
        });
        self
    }

    pub fn with_opened_invite(
        mut self,
        id: i64,
        pilot_id: i64,
        enquiry_id: i64,
        sent_at: DateTime<Utc>,
        opened_at: DateTime<Utc>,
    ) -> Self {
        self.invites.push(InviteRecord {
            id,
            pilot_id,
            enquiry_id,
            invite_round: 2,
            status: "opened".to_string(),
            sent_at,
            opened_at: Some(opened_at),
        });
        self
    }

    pub fn last_limit(&self) -> Option<u32> {
        self.requested_limits.lock().unwrap().last().copied()
    }
}

#[async_trait::async_trait]
impl InvitationStore for MemoryInvitationStore {
    async fn list_for_pilot(
        &self,
        pilot_id: i64,
        limit: u32,
    ) -> Result<Vec<PilotInvite>, sqlx::Error> {
        self.requested_limits.lock().unwrap().push(limit);

        let mut rows: Vec<PilotInvite> = self
            .invites
            .iter()
            .filter(|invite| invite.pilot_id == pilot_id)
            .filter_map(|invite| {
                let enquiry = self.enquiries.get(&invite.enquiry_id)?;
                Some(PilotInvite {
                    invitation_id: invite.id,
                    pilot_id: invite.pilot_id,
                    enquiry_id: invite.enquiry_id,
                    invite_round: invite.invite_round,
                    invite_status: invite.status.clone(),
                    sent_at: invite.sent_at,
                    opened_at: invite.opened_at,
                    service_slug: enquiry.service_slug.clone(),
                    date_needed: enquiry.date_needed,
                    date_flexibility: enquiry.date_flexibility.clone(),
                    site_location_text: enquiry.site_location_text.clone(),
                    postcode: enquiry.postcode.clone(),
                })
            })
            .collect();

        rows.sort_by(|a, b| {
            b.sent_at
                .cmp(&a.sent_at)
                .then(b.invitation_id.cmp(&a.invitation_id))
        });
        rows.truncate(limit as usize);
        Ok(rows)
    }
}

/// Store that ignores filtering and limits, returning whatever it holds
pub struct UncheckedStore {
    pub rows: Vec<PilotInvite>,
}

#[async_trait::async_trait]
impl InvitationStore for UncheckedStore {
    async fn list_for_pilot(
        &self,
        _pilot_id: i64,
        _limit: u32,
    ) -> Result<Vec<PilotInvite>, sqlx::Error> {
        Ok(self.rows.clone())
    }
}

/// Store simulating a datastore outage
pub struct FailingStore;

#[async_trait::async_trait]
impl InvitationStore for FailingStore {
    async fn list_for_pilot(
        &self,
        _pilot_id: i64,
        _limit: u32,
    ) -> Result<Vec<PilotInvite>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }
}

/// Day `n` of March 2025 at 09:00 UTC
pub fn day(n: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, n, 9, 0, 0).unwrap()
}

pub fn create_test_state(store: Arc<dyn InvitationStore>) -> Arc<AppState> {
    Arc::new(AppState::with_store(store, JWT_SECRET.to_string()))
}

pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = pilot_invites::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Session token for `pilot_id`, valid for 24 hours
pub fn create_test_jwt(pilot_id: i64) -> String {
    pilot_invites::core::encode_jwt(pilot_id, Some("pilot@example.co.uk"), JWT_SECRET, Duration::hours(24))
        .expect("Failed to create JWT token")
}

/// Session token for `pilot_id` that expired two hours ago
pub fn create_expired_jwt(pilot_id: i64) -> String {
    pilot_invites::core::encode_jwt(pilot_id, None, JWT_SECRET, Duration::hours(-2))
        .expect("Failed to create JWT token")
}
