//! Response length styles

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How long each statement may be.
///
/// The unit budget is both the length hint sent to the responder and the
/// hard cut applied by the [`ResponseLimiter`](crate::ResponseLimiter).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStyle {
    Brief,
    Concise,
    #[default]
    Standard,
    Detailed,
}

impl ResponseStyle {
    pub const ALL: [ResponseStyle; 4] = [
        ResponseStyle::Brief,
        ResponseStyle::Concise,
        ResponseStyle::Standard,
        ResponseStyle::Detailed,
    ];

    /// Maximum units (words) per statement
    pub fn max_units(&self) -> usize {
        match self {
            ResponseStyle::Brief => 150,
            ResponseStyle::Concise => 400,
            ResponseStyle::Standard => 800,
            ResponseStyle::Detailed => 1200,
        }
    }

    /// Instruction injected into the speaker's persona
    pub fn description(&self) -> &'static str {
        match self {
            ResponseStyle::Brief => {
                "Keep your response very short: two or three sentences making a single point."
            }
            ResponseStyle::Concise => {
                "Keep your response concise: one or two short paragraphs focused on your strongest arguments."
            }
            ResponseStyle::Standard => {
                "Give a complete but focused response of a few paragraphs."
            }
            ResponseStyle::Detailed => {
                "Give a thorough response that develops each argument with supporting evidence."
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseStyle::Brief => "brief",
            ResponseStyle::Concise => "concise",
            ResponseStyle::Standard => "standard",
            ResponseStyle::Detailed => "detailed",
        }
    }
}

impl std::fmt::Display for ResponseStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ResponseStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "brief" => Ok(ResponseStyle::Brief),
            "concise" => Ok(ResponseStyle::Concise),
            "standard" => Ok(ResponseStyle::Standard),
            "detailed" => Ok(ResponseStyle::Detailed),
            _ => Err(format!(
                "Invalid response style: {}. Valid options: brief, concise, standard, detailed",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_budgets() {
        assert_eq!(ResponseStyle::Brief.max_units(), 150);
        assert_eq!(ResponseStyle::Concise.max_units(), 400);
        assert_eq!(ResponseStyle::default().max_units(), 800);
        assert_eq!(ResponseStyle::Detailed.max_units(), 1200);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("Detailed".parse::<ResponseStyle>(), Ok(ResponseStyle::Detailed));
        assert_eq!(" brief ".parse::<ResponseStyle>(), Ok(ResponseStyle::Brief));
        assert!("verbose".parse::<ResponseStyle>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for style in ResponseStyle::ALL {
            assert_eq!(style.to_string().parse::<ResponseStyle>(), Ok(style));
        }
    }
}
