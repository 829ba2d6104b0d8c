//! Replacement of the active Challenger after a `Replace` decision

use arena_domain::{DomainError, Pool, RotationLedger};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::Serialize;
use tracing::info;

/// What happened when a rotation was attempted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RotationOutcome {
    /// `next` replaced `previous`; the counter was incremented
    Rotated { previous: String, next: String },
    /// Every judge has already debated; nothing changed
    NoEligibleReplacement,
    /// The rotation limit was already reached; nothing changed
    LimitReached,
}

impl RotationOutcome {
    pub fn is_rotated(&self) -> bool {
        matches!(self, RotationOutcome::Rotated { .. })
    }
}

/// Picks a replacement uniformly among judges who have never debated.
pub struct RotationController {
    rng: StdRng,
}

impl RotationController {
    /// Seeded controllers make replacement choices reproducible
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Attempt a rotation, mutating pool and ledger only on success.
    pub fn rotate(
        &mut self,
        pool: &mut Pool,
        ledger: &mut RotationLedger,
    ) -> Result<RotationOutcome, DomainError> {
        if !ledger.can_rotate() {
            info!(
                "Rotation limit ({}) reached, keeping {}",
                ledger.rotation_limit(),
                pool.active().name
            );
            return Ok(RotationOutcome::LimitReached);
        }

        let eligible: Vec<String> = pool
            .judges()
            .filter(|judge| !ledger.has_been_active(&judge.name))
            .map(|judge| judge.name.clone())
            .collect();

        let Some(next) = eligible.choose(&mut self.rng).cloned() else {
            info!("No eligible replacement, keeping {}", pool.active().name);
            return Ok(RotationOutcome::NoEligibleReplacement);
        };

        ledger.check_rotation(&next)?;
        let previous = pool.swap_active(&next)?;
        ledger.record_rotation(&next)?;
        info!(
            "Rotation {}/{}: {} replaces {}",
            ledger.rotation_count(),
            ledger.rotation_limit(),
            next,
            previous
        );
        Ok(RotationOutcome::Rotated { previous, next })
    }
}
