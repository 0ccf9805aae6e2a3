//! Repositories module - accesso in sola lettura allo store degli inviti
//!
//! Queries are built with `sqlx::query_as` and checked at run time, so the
//! crate compiles without a live database.

pub mod invitation;
pub mod traits;

pub use invitation::InvitationRepository;
pub use traits::InvitationStore;
