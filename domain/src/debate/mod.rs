//! Debate state building blocks: pool, ledger, rounds, and results

mod ledger;
mod pool;
pub mod record;
mod result;
mod round;
mod setup;
mod style;

pub use ledger::RotationLedger;
pub use pool::{MIN_CHALLENGERS, Pool};
pub use result::DebateResult;
pub use round::Round;
pub use setup::{DEFAULT_ROTATION_LIMIT, DEFAULT_ROUNDS, DebateSettings, DebateSetup, validate_roster};
pub use style::ResponseStyle;
