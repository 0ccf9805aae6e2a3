//! Entities module - Entità del dominio applicativo
//!
//! Row shapes read from the invitations store. The service never writes,
//! so these are projections rather than full table mappings.

pub mod invitation;

pub use invitation::PilotInvite;
