//! Configuration file loading for doclint.
//!
//! Reads `.doclint/doclint.json` and provides typed access to all settings.
//! Falls back to sensible defaults when the config file is missing or incomplete.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Top-level doclint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintConfig {
    pub version: String,
    #[serde(default)]
    pub rules: RulesConfig,
    #[serde(default)]
    pub sentence: SentenceConfig,
}

/// Which linters run, and which are downgraded to informational.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Lint IDs that are not run at all.
    #[serde(default)]
    pub disabled: Vec<String>,
    /// Lint IDs whose failures are reported as suppressed INFO entries.
    #[serde(default)]
    pub suppress: Vec<String>,
    /// Lint IDs whose failures are reported as WARNING instead of ERROR.
    #[serde(default)]
    pub warn: Vec<String>,
}

/// Sentence-completeness tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceConfig {
    #[serde(default = "default_min_words")]
    pub min_words: usize,
}

fn default_min_words() -> usize {
    1
}

impl Default for SentenceConfig {
    fn default() -> Self {
        Self {
            min_words: default_min_words(),
        }
    }
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            rules: RulesConfig::default(),
            sentence: SentenceConfig::default(),
        }
    }
}

impl LintConfig {
    /// Load configuration from `doclint.json` inside the given config directory.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(config_dir: &Path) -> Self {
        let config_path = config_dir.join("doclint.json");
        let content = match std::fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!(
                    path = %config_path.display(),
                    error = %e,
                    "failed to parse config, using defaults"
                );
                Self::default()
            }
        }
    }
}
