//! DTOs module - Data Transfer Objects
//!
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities).

pub mod invitation;

pub use invitation::{InviteItemDTO, InviteListDTO};
