//! Built-in example debates

use super::file_config::{FileConfig, FileParticipantConfig};
use arena_domain::{DebateSetup, Participant};

/// Challengers generated for every preset
pub const PRESET_CHALLENGERS: usize = 4;

/// A ready-made debate: a motion and the two positions arguing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebatePreset {
    pub number: u8,
    pub topic: &'static str,
    /// Position held by the Advocate (e.g. "Atheist")
    pub advocate_position: &'static str,
    /// Position held by every Challenger (e.g. "Theist")
    pub challenger_position: &'static str,
    pub advocate_description: &'static str,
    pub challenger_description: &'static str,
}

pub const PRESETS: [DebatePreset; 3] = [
    DebatePreset {
        number: 1,
        topic: "Should abortion be legal?",
        advocate_position: "Pro-Choice",
        challenger_position: "Pro-Life",
        advocate_description: "You are representing the Pro-Choice position in a debate on abortion rights.\n\
Your core values include: bodily autonomy, reproductive freedom, and healthcare access.\n\
Focus on constitutional rights, medical science, and social impacts.\n\
When responding, maintain a respectful tone while firmly defending your position.",
        challenger_description: "You are representing the Pro-Life position in a debate on abortion rights.\n\
Your core values include: sanctity of life, fetal rights, and ethical considerations.\n\
Focus on moral arguments, biological development, and alternatives to abortion.\n\
When responding, maintain a respectful tone while firmly defending your position.",
    },
    DebatePreset {
        number: 2,
        topic: "Does God exist?",
        advocate_position: "Atheist",
        challenger_position: "Theist",
        advocate_description: "You are representing the Atheist position in a debate on God's existence.\n\
Your core values include: empirical evidence, scientific method, and rational thinking.\n\
Focus on lack of evidence, scientific explanations, and logical arguments.\n\
When responding, maintain a respectful tone while firmly defending your position.",
        challenger_description: "You are representing the Theist position in a debate on God's existence.\n\
Your core values include: faith, spiritual experience, and religious tradition.\n\
Focus on cosmological arguments, personal experience, and moral foundations.\n\
When responding, maintain a respectful tone while firmly defending your position.",
    },
    DebatePreset {
        number: 3,
        topic: "Should healthcare be universal?",
        advocate_position: "Liberal",
        challenger_position: "Conservative",
        advocate_description: "You are representing the Liberal position on universal healthcare.\n\
Your core values include: equality, social safety nets, and public welfare.\n\
Focus on healthcare as a right, cost efficiency of universal systems, and societal benefits.\n\
When responding, maintain a respectful tone while firmly defending your position.",
        challenger_description: "You are representing the Conservative position on healthcare.\n\
Your core values include: individual responsibility, market solutions, and limited government.\n\
Focus on free market competition, innovation, quality of care, and personal choice.\n\
When responding, maintain a respectful tone while firmly defending your position.",
    },
];

impl DebatePreset {
    pub fn all() -> &'static [DebatePreset] {
        &PRESETS
    }

    /// Look up a preset by its 1-based number
    pub fn by_number(number: u8) -> Option<&'static DebatePreset> {
        PRESETS.iter().find(|p| p.number == number)
    }

    /// One-line menu entry, e.g. `2. Does God exist? (Atheist vs. Theist)`
    pub fn label(&self) -> String {
        format!(
            "{}. {} ({} vs. {})",
            self.number, self.topic, self.advocate_position, self.challenger_position
        )
    }

    pub fn advocate(&self) -> Participant {
        Participant::advocate(
            format!("{} Advocate", self.advocate_position),
            self.advocate_description,
        )
    }

    pub fn challengers(&self) -> Vec<Participant> {
        (1..=PRESET_CHALLENGERS)
            .map(|i| {
                Participant::challenger(
                    format!("{} Expert {}", self.challenger_position, i),
                    self.challenger_description,
                )
            })
            .collect()
    }

    /// Setup with default settings
    pub fn to_setup(&self) -> DebateSetup {
        DebateSetup::new(self.topic, self.advocate(), self.challengers())
    }

    /// The preset written out as a configuration file
    pub fn to_file_config(&self) -> FileConfig {
        FileConfig {
            topic: self.topic.to_string(),
            advocate: FileParticipantConfig::from(&self.advocate()),
            challengers: self
                .challengers()
                .iter()
                .map(FileParticipantConfig::from)
                .collect(),
            ..FileConfig::default()
        }
    }
}
