//! Per-turn response budgeting.
//!
//! [`ResponseLimiter`] bounds how much of a returned statement is used
//! downstream. It never preempts the responder; it only truncates after the
//! fact and keeps a simulated speaking-time tally for the round.

mod limiter;

pub use limiter::{
    DEFAULT_TIME_LIMIT_SECONDS, LimitedResponse, ResponseLimiter, TRUNCATION_MARKER,
    UNITS_PER_SECOND,
};
