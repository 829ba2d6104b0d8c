//! Mutable state of one debate

use arena_domain::debate::validate_roster;
use arena_domain::{
    DebateResult, DebateSettings, DebateSetup, DomainError, MemorySummary, Participant, Pool,
    RotationLedger, Round,
};
use std::collections::HashMap;

/// Everything that changes while a debate runs.
///
/// The transcript only grows. Pool and ledger change together during a
/// rotation, and memories are keyed by participant name.
#[derive(Debug, Clone)]
pub struct DebateState {
    pub(super) topic: String,
    pub(super) advocate: Participant,
    pub(super) pool: Pool,
    pub(super) ledger: RotationLedger,
    pub(super) transcript: Vec<Round>,
    pub(super) settings: DebateSettings,
    pub(super) memories: HashMap<String, MemorySummary>,
}

impl DebateState {
    pub fn new(setup: DebateSetup) -> Result<Self, DomainError> {
        setup.validate()?;
        let pool = Pool::new(setup.challengers)?;
        let ledger = RotationLedger::new(&pool, setup.settings.rotation_limit);
        let memories = fresh_memories(&setup.advocate, &pool);

        Ok(Self {
            topic: setup.topic,
            advocate: setup.advocate,
            pool,
            ledger,
            transcript: Vec::new(),
            settings: setup.settings,
            memories,
        })
    }

    // ==================== Accessors ====================

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn advocate(&self) -> &Participant {
        &self.advocate
    }

    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    pub fn ledger(&self) -> &RotationLedger {
        &self.ledger
    }

    pub fn transcript(&self) -> &[Round] {
        &self.transcript
    }

    pub fn settings(&self) -> &DebateSettings {
        &self.settings
    }

    pub fn memory(&self, name: &str) -> Option<&MemorySummary> {
        self.memories.get(name)
    }

    pub fn total_rounds(&self) -> u32 {
        self.settings.rounds
    }

    pub fn rounds_completed(&self) -> u32 {
        self.transcript.len() as u32
    }

    /// Terminal once every configured round is in the transcript
    pub fn is_finished(&self) -> bool {
        self.rounds_completed() >= self.settings.rounds
    }

    // ==================== Mutation ====================

    /// Every participant witnesses every round, judges included
    pub(super) fn record_in_memories(&mut self, round: &Round) {
        let snapshot = round.to_memory();
        for memory in self.memories.values_mut() {
            memory.record(snapshot.clone());
        }
    }

    /// Start over on a new topic with the same participants.
    ///
    /// The current active debater stays active and is re-marked in the
    /// ledger.
    pub(super) fn reset_for_topic(&mut self, topic: String) -> Result<(), DomainError> {
        if topic.trim().is_empty() {
            return Err(DomainError::EmptyTopic);
        }
        self.topic = topic;
        self.transcript.clear();
        self.ledger.reset(&self.pool.active().name);
        for memory in self.memories.values_mut() {
            memory.clear();
        }
        Ok(())
    }

    /// Replace every participant; validated like a fresh setup.
    pub(super) fn replace_participants(
        &mut self,
        advocate: Participant,
        challengers: Vec<Participant>,
    ) -> Result<(), DomainError> {
        validate_roster(&advocate, &challengers)?;
        let pool = Pool::new(challengers)?;
        self.ledger = RotationLedger::new(&pool, self.settings.rotation_limit);
        self.memories = fresh_memories(&advocate, &pool);
        self.pool = pool;
        self.advocate = advocate;
        self.transcript.clear();
        Ok(())
    }

    pub fn to_result(&self) -> DebateResult {
        DebateResult {
            topic: self.topic.clone(),
            advocate_name: self.advocate.name.clone(),
            challenger_names: self.ledger.ever_active_names(),
            total_rounds: self.settings.rounds,
            total_rotations: self.ledger.rotation_count(),
            transcript: self.transcript.clone(),
        }
    }
}

fn fresh_memories(advocate: &Participant, pool: &Pool) -> HashMap<String, MemorySummary> {
    std::iter::once(advocate)
        .chain(pool.members())
        .map(|p| (p.name.clone(), MemorySummary::new(p.role)))
        .collect()
}
