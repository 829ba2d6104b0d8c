//! Who has debated, and how many rotations remain

use super::pool::Pool;
use crate::core::error::DomainError;

/// Tracks which Challengers have ever been the active debater and how many
/// rotations have happened.
///
/// Entries are write-once (`false` → `true`) and kept in pool order. The
/// rotation count never exceeds the limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationLedger {
    entries: Vec<(String, bool)>,
    rotation_count: u32,
    rotation_limit: u32,
}

impl RotationLedger {
    /// Ledger for a fresh pool, with the initial active debater marked
    pub fn new(pool: &Pool, rotation_limit: u32) -> Self {
        let mut ledger = Self {
            entries: pool
                .members()
                .iter()
                .map(|p| (p.name.clone(), false))
                .collect(),
            rotation_count: 0,
            rotation_limit,
        };
        ledger.mark(&pool.active().name);
        ledger
    }

    pub fn has_been_active(&self, name: &str) -> bool {
        self.entries
            .iter()
            .any(|(entry, active)| entry == name && *active)
    }

    pub fn rotation_count(&self) -> u32 {
        self.rotation_count
    }

    pub fn rotation_limit(&self) -> u32 {
        self.rotation_limit
    }

    pub fn can_rotate(&self) -> bool {
        self.rotation_count < self.rotation_limit
    }

    /// Check that a rotation to `next` would be accepted.
    pub fn check_rotation(&self, next: &str) -> Result<(), DomainError> {
        if !self.entries.iter().any(|(entry, _)| entry == next) {
            return Err(DomainError::UnknownParticipant(next.to_string()));
        }
        if !self.can_rotate() {
            return Err(DomainError::RotationLimitReached(self.rotation_limit));
        }
        Ok(())
    }

    /// Record a completed rotation to `next`.
    ///
    /// Nothing changes when [`check_rotation`](Self::check_rotation) fails.
    pub fn record_rotation(&mut self, next: &str) -> Result<(), DomainError> {
        self.check_rotation(next)?;
        self.mark(next);
        self.rotation_count += 1;
        Ok(())
    }

    /// Names that have ever debated, in pool order
    pub fn ever_active_names(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, active)| *active)
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Clear every entry and the counter, then mark the current debater
    pub fn reset(&mut self, active: &str) {
        for (_, flag) in &mut self.entries {
            *flag = false;
        }
        self.rotation_count = 0;
        self.mark(active);
    }

    fn mark(&mut self, name: &str) {
        if let Some((_, flag)) = self.entries.iter_mut().find(|(entry, _)| entry == name) {
            *flag = true;
        }
    }
}
