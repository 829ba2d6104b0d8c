//! Scoring criteria and their weights

use serde::{Deserialize, Serialize};

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 5;
/// Used whenever a score cannot be read from a judge's reply
pub const MIDPOINT_SCORE: u8 = 3;

/// One scoring criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    /// Snake-case key, e.g. `argument_strength`
    pub key: String,
    /// Relative weight; the default set sums to 1.0
    pub weight: f64,
    /// Score → description pairs shown to judges
    pub scoring_guide: Vec<(u8, String)>,
}

impl Criterion {
    pub fn new(key: impl Into<String>, weight: f64) -> Self {
        Self {
            key: key.into(),
            weight,
            scoring_guide: Vec::new(),
        }
    }

    pub fn with_guide(mut self, score: u8, description: impl Into<String>) -> Self {
        self.scoring_guide.push((score, description.into()));
        self
    }

    /// Lowercase label matched against reply lines (`argument strength`)
    pub fn label(&self) -> String {
        self.key.replace('_', " ").to_lowercase()
    }

    /// Title-cased label shown in prompts (`Argument Strength`)
    pub fn title(&self) -> String {
        self.key
            .split('_')
            .filter(|w| !w.is_empty())
            .map(|w| {
                let mut chars = w.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// The fixed, ordered criterion set judges score against.
///
/// # Example
///
/// ```
/// use arena_domain::CriteriaSet;
///
/// let criteria = CriteriaSet::default();
/// assert_eq!(criteria.len(), 4);
/// assert!((criteria.total_weight() - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriteriaSet {
    criteria: Vec<Criterion>,
}

impl CriteriaSet {
    pub fn new(criteria: Vec<Criterion>) -> Self {
        Self { criteria }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Criterion> {
        self.criteria.iter()
    }

    pub fn get(&self, key: &str) -> Option<&Criterion> {
        self.criteria.iter().find(|c| c.key == key)
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn total_weight(&self) -> f64 {
        self.criteria.iter().map(|c| c.weight).sum()
    }
}

impl Default for CriteriaSet {
    fn default() -> Self {
        Self::new(vec![
            Criterion::new("argument_strength", 0.4)
                .with_guide(1, "No substantial arguments or evidence presented")
                .with_guide(3, "Some valid points but weak supporting evidence")
                .with_guide(5, "Strong arguments with compelling evidence"),
            Criterion::new("relevance", 0.2)
                .with_guide(1, "Arguments mostly off-topic or tangential")
                .with_guide(3, "Arguments somewhat related to the debate topic")
                .with_guide(5, "Arguments directly address the central question"),
            Criterion::new("persuasiveness", 0.3)
                .with_guide(1, "Unconvincing presentation of arguments")
                .with_guide(3, "Moderately persuasive delivery")
                .with_guide(5, "Highly compelling and convincing rhetoric"),
            Criterion::new("clarity", 0.1)
                .with_guide(1, "Confusing or poorly structured arguments")
                .with_guide(3, "Reasonably clear but some disorganization")
                .with_guide(5, "Exceptionally clear, well-organized arguments"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_and_title() {
        let c = Criterion::new("argument_strength", 0.4);
        assert_eq!(c.label(), "argument strength");
        assert_eq!(c.title(), "Argument Strength");
    }

    #[test]
    fn test_default_set_order() {
        let keys: Vec<_> = CriteriaSet::default().iter().map(|c| c.key.clone()).collect();
        assert_eq!(
            keys,
            vec!["argument_strength", "relevance", "persuasiveness", "clarity"]
        );
    }

    #[test]
    fn test_every_default_criterion_has_guide() {
        for criterion in CriteriaSet::default().iter() {
            assert_eq!(criterion.scoring_guide.len(), 3);
        }
    }
}
