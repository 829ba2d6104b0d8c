//! Per-participant debate memory and its bounded compaction
//!
//! Every participant keeps a [`MemorySummary`] of the rounds it has
//! witnessed. Before each turn the [`ContextCompactor`] renders it into a
//! short, deterministic text block with fixed size limits.

mod compactor;
mod summary;

pub use compactor::ContextCompactor;
pub use summary::{MemorySummary, RoundMemory};
