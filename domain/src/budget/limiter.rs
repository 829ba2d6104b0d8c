//! Word-budget truncation and simulated speaking time

/// Appended to a statement that was cut at the unit budget
pub const TRUNCATION_MARKER: &str = "\n[Time limit reached]";

/// Speaking rate used to convert units into seconds (~150 words per minute)
pub const UNITS_PER_SECOND: f64 = 3.75;

/// Default speaking time available per round
pub const DEFAULT_TIME_LIMIT_SECONDS: f64 = 300.0;

/// A statement after the unit budget was applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitedResponse {
    pub text: String,
    pub was_truncated: bool,
}

impl LimitedResponse {
    /// Number of whitespace-delimited units kept (marker excluded)
    pub fn unit_count(&self) -> usize {
        let body = if self.was_truncated {
            self.text
                .strip_suffix(TRUNCATION_MARKER)
                .unwrap_or(&self.text)
        } else {
            &self.text
        };
        body.split_whitespace().count()
    }
}

/// Enforces the per-turn length budget.
///
/// # Example
///
/// ```
/// use arena_domain::ResponseLimiter;
///
/// let mut limiter = ResponseLimiter::default();
/// let limited = limiter.limit("one two three", 2);
/// assert!(limited.was_truncated);
/// assert_eq!(limited.text, "one two\n[Time limit reached]");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseLimiter {
    time_limit: f64,
    time_used: f64,
}

impl ResponseLimiter {
    pub fn new(time_limit_seconds: f64) -> Self {
        Self {
            time_limit: time_limit_seconds.max(0.0),
            time_used: 0.0,
        }
    }

    /// Truncate `text` to at most `max_units` whitespace-delimited units.
    ///
    /// Text within budget is returned byte-for-byte unchanged. The kept
    /// units are added to the round's simulated speaking time.
    pub fn limit(&mut self, text: &str, max_units: usize) -> LimitedResponse {
        let count = text.split_whitespace().count();

        if count <= max_units {
            self.time_used += Self::estimate_elapsed(count);
            return LimitedResponse {
                text: text.to_string(),
                was_truncated: false,
            };
        }

        let kept = text
            .split_whitespace()
            .take(max_units)
            .collect::<Vec<_>>()
            .join(" ");
        self.time_used += Self::estimate_elapsed(max_units);

        LimitedResponse {
            text: format!("{}{}", kept, TRUNCATION_MARKER),
            was_truncated: true,
        }
    }

    /// Convert a unit count into simulated speaking seconds
    pub fn estimate_elapsed(unit_count: usize) -> f64 {
        unit_count as f64 / UNITS_PER_SECOND
    }

    /// Start a new round
    pub fn reset(&mut self) {
        self.time_used = 0.0;
    }

    pub fn time_used(&self) -> f64 {
        self.time_used
    }

    pub fn time_limit(&self) -> f64 {
        self.time_limit
    }

    /// Remaining speaking time, never negative
    pub fn time_remaining(&self) -> f64 {
        (self.time_limit - self.time_used).max(0.0)
    }
}

impl Default for ResponseLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_LIMIT_SECONDS)
    }
}
