//! Config schema for `.introscorerc.json`.

use serde::{Deserialize, Serialize};

/// Project configuration. All fields optional; CLI flags take precedence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Minimum total score; any report below it makes the CLI exit 1
    pub threshold: Option<u8>,
    /// Duration applied to plain-text transcripts with no duration of
    /// their own
    pub default_duration_secs: Option<f64>,
    /// Extra filler tokens appended to the built-in lexicon
    pub extra_fillers: Vec<String>,
}

impl Config {
    /// Apply CLI flags on top of the file config. CLI wins.
    pub fn merge_with_cli(mut self, threshold: Option<u8>, duration: Option<f64>) -> Self {
        if threshold.is_some() {
            self.threshold = threshold;
        }
        if duration.is_some() {
            self.default_duration_secs = duration;
        }
        self
    }

    /// Starter config written by `introscore init`.
    pub fn starter(threshold: Option<u8>) -> Self {
        Self {
            threshold: Some(threshold.unwrap_or(70)),
            default_duration_secs: Some(52.0),
            extra_fillers: Vec::new(),
        }
    }
}
