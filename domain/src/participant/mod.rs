//! Debate participants
//!
//! - [`role::Role`]: closed two-variant side (`Advocate` | `Challenger`)
//! - [`role::SpeakingOrder`]: the order the two sides speak within a round
//! - [`entities::Participant`]: a named speaker with persona and model handle

pub mod entities;
pub mod role;

pub use entities::Participant;
pub use role::{Role, SpeakingOrder};
