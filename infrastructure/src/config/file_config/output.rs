//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Directory for saved transcripts
    pub dir: PathBuf,
    /// Print full statements instead of previews
    pub verbose: bool,
    /// Write the transcript JSON when the debate ends
    pub save_transcript: bool,
    /// JSONL conversation log path; disabled when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_log: Option<PathBuf>,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("output"),
            verbose: false,
            save_transcript: true,
            conversation_log: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_deserialize() {
        let toml_str = r#"
[output]
dir = "runs"
verbose = true
conversation_log = "runs/debate.jsonl"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.dir, PathBuf::from("runs"));
        assert!(config.output.verbose);
        assert!(config.output.save_transcript);
        assert_eq!(
            config.output.conversation_log,
            Some(PathBuf::from("runs/debate.jsonl"))
        );
    }
}
