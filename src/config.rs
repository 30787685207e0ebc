//! Configuration types.

use std::path::PathBuf;

use crate::error::ConfigError;

/// Pipeline configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantConfig {
    /// Maximum summary length in characters, ellipsis included.
    pub summary_max_chars: usize,
    /// How many key points the drafted reply addresses.
    pub reply_point_limit: usize,
    /// How many sentences become key points when the body has no bullet list.
    pub fallback_point_limit: usize,
    /// Optional JSON file overriding the built-in keyword lexicon.
    pub lexicon_path: Option<PathBuf>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            summary_max_chars: 140,
            reply_point_limit: 3,
            fallback_point_limit: 3,
            lexicon_path: None,
        }
    }
}

impl AssistantConfig {
    /// Build a configuration from `MAIL_ASSIST_*` environment variables.
    ///
    /// Unset variables keep their default value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            summary_max_chars: parse_count(
                &lookup,
                "MAIL_ASSIST_SUMMARY_MAX",
                defaults.summary_max_chars,
            )?,
            reply_point_limit: parse_count(
                &lookup,
                "MAIL_ASSIST_REPLY_POINTS",
                defaults.reply_point_limit,
            )?,
            fallback_point_limit: parse_count(
                &lookup,
                "MAIL_ASSIST_FALLBACK_POINTS",
                defaults.fallback_point_limit,
            )?,
            lexicon_path: lookup("MAIL_ASSIST_LEXICON")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check invariants the pipeline relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Truncation keeps max - 3 chars and appends "...".
        if self.summary_max_chars < 4 {
            return Err(ConfigError::InvalidValue {
                key: "MAIL_ASSIST_SUMMARY_MAX".into(),
                message: format!("must be at least 4, got {}", self.summary_max_chars),
            });
        }
        Ok(())
    }
}

fn parse_count(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: usize,
) -> Result<usize, ConfigError> {
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: std::num::ParseIntError| ConfigError::InvalidValue {
                key: key.to_string(),
                message: format!("{raw:?}: {e}"),
            }),
        None => Ok(default),
    }
}
