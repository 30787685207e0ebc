//! Keyword lexicon and compiled matching rules.
//!
//! The lexicon is plain data: every list can be replaced from a JSON file
//! without touching classification or formatting code. `Rules` is the
//! compiled form the classifiers and extractors consume:
//! - keyword lists normalized once (lowercase, no diacritics)
//! - deadline words compiled into a single case-insensitive word regex
//! - weekday markers and continuation markers lowercased

use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::pipeline::normalize::normalize;

/// A weekday mention that yields a fallback follow-up phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMarker {
    /// Word searched for (case-insensitive) in the body.
    pub word: String,
    /// Phrase returned as the follow-up date.
    pub phrase: String,
}

impl DayMarker {
    fn new(word: &str, phrase: &str) -> Self {
        Self {
            word: word.into(),
            phrase: phrase.into(),
        }
    }
}

/// Keyword tables driving every heuristic of the pipeline.
///
/// Missing lists in a JSON override fall back to the built-in French tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    /// Work-related vocabulary; any hit makes the email professional.
    pub professional: Vec<String>,
    /// Explicit urgency and deadline markers.
    pub urgency: Vec<String>,
    /// Tokens suggesting the sender is chasing a previous exchange.
    pub follow_up: Vec<String>,
    /// Relative days and weekday names read as an implicit deadline.
    pub deadline_words: Vec<String>,
    pub positive: Vec<String>,
    pub disappointed: Vec<String>,
    pub stressed: Vec<String>,
    /// Weekdays that produce a "(prochain)" follow-up phrase, in priority order.
    pub follow_up_days: Vec<DayMarker>,
    /// Markers that the sender is waiting on an earlier reply.
    pub continuation: Vec<String>,
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            professional: words(&[
                "réunion",
                "rapport",
                "projet",
                "dossier",
                "client",
                "livraison",
                "contrat",
                "proposition",
                "document",
                "validation",
            ]),
            urgency: words(&[
                "urgent",
                "rapide",
                "dès que possible",
                "asap",
                "d’ici",
                "avant",
                "mercredi",
            ]),
            follow_up: words(&["relance", "nouvelles"]),
            deadline_words: words(&[
                "demain",
                "aujourd'hui",
                "ce matin",
                "ce soir",
                "lundi",
                "mardi",
                "mercredi",
                "jeudi",
                "vendredi",
                "samedi",
                "dimanche",
            ]),
            positive: words(&["merci", "excellent", "bonne nouvelle", "heureux", "ravis"]),
            disappointed: words(&["déçu", "dommage", "ne convient pas", "insatisfait"]),
            stressed: words(&["urgent", "inquiet", "manque", "retard", "problème"]),
            follow_up_days: vec![
                DayMarker::new("mercredi", "Mercredi (prochain)"),
                DayMarker::new("jeudi", "Jeudi (prochain)"),
            ],
            continuation: words(&["encore", "retour"]),
        }
    }
}

impl Lexicon {
    /// Load a lexicon override from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw)
            .map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())))
    }
}

/// Compiled, ready-to-match form of a `Lexicon`.
#[derive(Debug, Clone)]
pub struct Rules {
    pub professional: Vec<String>,
    pub urgency: Vec<String>,
    pub follow_up: Vec<String>,
    pub positive: Vec<String>,
    pub disappointed: Vec<String>,
    pub stressed: Vec<String>,
    /// `None` when the lexicon has no deadline words.
    pub deadline: Option<Regex>,
    pub follow_up_days: Vec<DayMarker>,
    pub continuation: Vec<String>,
}

fn normalized(list: &[String]) -> Vec<String> {
    list.iter()
        .map(|k| normalize(k))
        .filter(|k| !k.is_empty())
        .collect()
}

fn lowercased(list: &[String]) -> Vec<String> {
    list.iter()
        .map(|k| k.to_lowercase())
        .filter(|k| !k.is_empty())
        .collect()
}

/// Escaped `word`, anchored with `\b` on each side that starts or ends with
/// a word character. A boundary next to punctuation would never match.
fn word_pattern(word: &str) -> String {
    let is_word_char = |c: char| c.is_alphanumeric() || c == '_';
    let lead = if word.starts_with(is_word_char) { r"\b" } else { "" };
    let trail = if word.ends_with(is_word_char) { r"\b" } else { "" };
    format!("{lead}{}{trail}", regex::escape(word))
}

impl Rules {
    /// Normalize keyword lists and compile the deadline pattern.
    pub fn compile(lexicon: &Lexicon) -> Result<Self, ConfigError> {
        let deadline_words: Vec<String> = lexicon
            .deadline_words
            .iter()
            .map(|w| w.trim())
            .filter(|w| !w.is_empty())
            .map(word_pattern)
            .collect();

        let deadline = if deadline_words.is_empty() {
            None
        } else {
            let pattern = format!("(?i)(?:{})", deadline_words.join("|"));
            let regex = Regex::new(&pattern).map_err(|e| ConfigError::InvalidValue {
                key: "deadline_words".into(),
                message: e.to_string(),
            })?;
            Some(regex)
        };

        let follow_up_days = lexicon
            .follow_up_days
            .iter()
            .filter(|m| !m.word.trim().is_empty())
            .map(|m| DayMarker {
                word: m.word.to_lowercase(),
                phrase: m.phrase.clone(),
            })
            .collect();

        let rules = Self {
            professional: normalized(&lexicon.professional),
            urgency: normalized(&lexicon.urgency),
            follow_up: normalized(&lexicon.follow_up),
            positive: normalized(&lexicon.positive),
            disappointed: normalized(&lexicon.disappointed),
            stressed: normalized(&lexicon.stressed),
            deadline,
            follow_up_days,
            continuation: lowercased(&lexicon.continuation),
        };

        debug!(
            professional = rules.professional.len(),
            urgency = rules.urgency.len(),
            deadline = rules.deadline.is_some(),
            "Compiled keyword rules"
        );

        Ok(rules)
    }
}
