//! Challenger pool: one active debater, the rest judge

use crate::core::error::DomainError;
use crate::participant::{Participant, Role};
use std::collections::HashSet;

/// Fewest challengers a debate can run with (one debater, three judges)
pub const MIN_CHALLENGERS: usize = 4;

/// The Challengers of a debate, partitioned into the active debater and an
/// ordered judge list.
///
/// The partition is only changed through [`Pool::swap_active`], so every
/// member is always exactly one of active or judge.
///
/// # Example
///
/// ```
/// use arena_domain::{Participant, Pool};
///
/// let challengers = (1..=4)
///     .map(|i| Participant::challenger(format!("C{i}"), "persona"))
///     .collect();
/// let mut pool = Pool::new(challengers).unwrap();
/// assert_eq!(pool.active().name, "C1");
///
/// pool.swap_active("C3").unwrap();
/// assert_eq!(pool.active().name, "C3");
/// assert_eq!(pool.judge_names(), vec!["C2", "C4", "C1"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    /// Configuration order; never reordered
    members: Vec<Participant>,
    active: usize,
    /// Indices into `members`, in judge-list order
    judges: Vec<usize>,
}

impl Pool {
    /// Build a pool; the first challenger starts as the active debater.
    pub fn new(challengers: Vec<Participant>) -> Result<Self, DomainError> {
        if challengers.len() < MIN_CHALLENGERS {
            return Err(DomainError::TooFewChallengers {
                required: MIN_CHALLENGERS,
                actual: challengers.len(),
            });
        }

        let mut seen = HashSet::new();
        for challenger in &challengers {
            if challenger.role != Role::Challenger {
                return Err(DomainError::WrongRole {
                    name: challenger.name.clone(),
                    expected: Role::Challenger.label().to_string(),
                });
            }
            if !seen.insert(challenger.name.as_str()) {
                return Err(DomainError::DuplicateParticipant(challenger.name.clone()));
            }
        }

        let judges = (1..challengers.len()).collect();
        Ok(Self {
            members: challengers,
            active: 0,
            judges,
        })
    }

    pub fn active(&self) -> &Participant {
        &self.members[self.active]
    }

    /// Current judges, in judge-list order
    pub fn judges(&self) -> impl Iterator<Item = &Participant> {
        self.judges.iter().map(|&i| &self.members[i])
    }

    pub fn judge_names(&self) -> Vec<&str> {
        self.judges().map(|p| p.name.as_str()).collect()
    }

    pub fn judge_count(&self) -> usize {
        self.judges.len()
    }

    pub fn is_judge(&self, name: &str) -> bool {
        self.judges().any(|p| p.name == name)
    }

    /// Every challenger in configuration order
    pub fn members(&self) -> &[Participant] {
        &self.members
    }

    /// Promote judge `next` to active debater.
    ///
    /// The previous active debater is appended to the end of the judge list
    /// and `next` is removed from it. Returns the previous debater's name.
    pub fn swap_active(&mut self, next: &str) -> Result<String, DomainError> {
        let member = self
            .members
            .iter()
            .position(|p| p.name == next)
            .ok_or_else(|| DomainError::UnknownParticipant(next.to_string()))?;
        let slot = self
            .judges
            .iter()
            .position(|&i| i == member)
            .ok_or_else(|| DomainError::NotAJudge(next.to_string()))?;

        let previous = self.active;
        self.judges.remove(slot);
        self.judges.push(previous);
        self.active = member;
        Ok(self.members[previous].name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn challengers(n: usize) -> Vec<Participant> {
        (1..=n)
            .map(|i| Participant::challenger(format!("C{i}"), "persona"))
            .collect()
    }

    fn assert_disjoint_cover(pool: &Pool) {
        let mut names: Vec<&str> = pool.judge_names();
        assert!(!names.contains(&pool.active().name.as_str()));
        names.push(&pool.active().name);
        names.sort_unstable();
        let mut expected: Vec<&str> = pool.members().iter().map(|p| p.name.as_str()).collect();
        expected.sort_unstable();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_initial_partition() {
        let pool = Pool::new(challengers(5)).unwrap();
        assert_eq!(pool.active().name, "C1");
        assert_eq!(pool.judge_names(), vec!["C2", "C3", "C4", "C5"]);
        assert_eq!(pool.judge_count(), 4);
        assert_disjoint_cover(&pool);
    }

    #[test]
    fn test_too_few_challengers() {
        let err = Pool::new(challengers(3)).unwrap_err();
        assert_eq!(
            err,
            DomainError::TooFewChallengers {
                required: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut list = challengers(4);
        list[3].name = "C1".to_string();
        assert_eq!(
            Pool::new(list).unwrap_err(),
            DomainError::DuplicateParticipant("C1".to_string())
        );
    }

    #[test]
    fn test_wrong_role_rejected() {
        let mut list = challengers(4);
        list[2] = Participant::advocate("A", "persona");
        assert!(matches!(
            Pool::new(list).unwrap_err(),
            DomainError::WrongRole { .. }
        ));
    }

    #[test]
    fn test_swap_keeps_invariant() {
        let mut pool = Pool::new(challengers(4)).unwrap();

        let previous = pool.swap_active("C2").unwrap();
        assert_eq!(previous, "C1");
        assert_eq!(pool.judge_names(), vec!["C3", "C4", "C1"]);
        assert_disjoint_cover(&pool);

        pool.swap_active("C4").unwrap();
        assert_eq!(pool.active().name, "C4");
        assert_eq!(pool.judge_names(), vec!["C3", "C1", "C2"]);
        assert_disjoint_cover(&pool);
    }

    #[test]
    fn test_swap_rejects_active_and_unknown() {
        let mut pool = Pool::new(challengers(4)).unwrap();
        assert_eq!(
            pool.swap_active("C1").unwrap_err(),
            DomainError::NotAJudge("C1".to_string())
        );
        assert_eq!(
            pool.swap_active("nobody").unwrap_err(),
            DomainError::UnknownParticipant("nobody".to_string())
        );
        // Failed swaps leave the pool untouched
        assert_eq!(pool.active().name, "C1");
        assert_eq!(pool.judge_names(), vec!["C2", "C3", "C4"]);
    }

    #[test]
    fn test_members_keep_config_order() {
        let mut pool = Pool::new(challengers(4)).unwrap();
        pool.swap_active("C3").unwrap();
        let names: Vec<_> = pool.members().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["C1", "C2", "C3", "C4"]);
        assert!(pool.is_judge("C1"));
        assert!(!pool.is_judge("C3"));
    }
}
