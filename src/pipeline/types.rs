//! Shared types for the analysis pipeline.
//!
//! Every enumeration has a stable machine id (`snake_case`, used on the wire
//! and by `FromStr`) and a separate French display label (`label()` and
//! `Display`). Pipeline logic only ever matches on the variants.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Inbound email ───────────────────────────────────────────────────

/// An email as handed to the pipeline by the data provider.
///
/// Never mutated after construction; the report is a pure function of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailMessage {
    /// Unique identifier, used to key reports.
    pub id: String,
    /// Sender display string (e.g. "Sophie Martin · RH").
    pub sender: String,
    pub subject: String,
    /// Multi-line plain-text body.
    pub body: String,
    pub received_at: DateTime<Utc>,
    /// Reference of the conversation this email belongs to (e.g. a contract number).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<EmailMetadata>,
}

/// Optional business context attached to an email.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_to: Option<String>,
}

impl EmailMessage {
    /// Project name, if the metadata carries a non-empty one.
    pub fn project(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.project.as_deref())
            .filter(|p| !p.is_empty())
    }

    /// Thread reference, if non-empty.
    pub fn thread_ref(&self) -> Option<&str> {
        self.thread_ref.as_deref().filter(|r| !r.is_empty())
    }
}

// ── Classification enums ────────────────────────────────────────────

/// Whether an email belongs to work or private life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Professional,
    Personal,
}

impl Category {
    pub fn id(&self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::Personal => "personal",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Professional => "professionnel",
            Self::Personal => "personnel",
        }
    }
}

/// How quickly the email calls for an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Urgent,
    ToFollowUp,
    Normal,
}

impl Urgency {
    pub fn id(&self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::ToFollowUp => "to_follow_up",
            Self::Normal => "normal",
        }
    }

    /// Short value label ("à relancer").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::ToFollowUp => "à relancer",
            Self::Normal => "normal",
        }
    }

    /// Badge text shown next to an email in an overview.
    pub fn badge(&self) -> &'static str {
        match self {
            Self::Urgent => "Urgence élevée",
            Self::ToFollowUp => "Relance à prévoir",
            Self::Normal => "Priorité normale",
        }
    }
}

/// Dominant emotion detected in the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    Positive,
    Stressed,
    Disappointed,
    Inquisitive,
    Neutral,
}

impl Emotion {
    pub fn id(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Stressed => "stressed",
            Self::Disappointed => "disappointed",
            Self::Inquisitive => "inquisitive",
            Self::Neutral => "neutral",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Positive => "positif",
            Self::Stressed => "stressé",
            Self::Disappointed => "déçu",
            Self::Inquisitive => "demandant",
            Self::Neutral => "neutre",
        }
    }
}

/// Recommended tone for the reply.
///
/// Only `Benevolent` and `Professional` are produced by the category mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Benevolent,
    Professional,
    Firm,
    Neutral,
}

impl Tone {
    pub fn id(&self) -> &'static str {
        match self {
            Self::Benevolent => "benevolent",
            Self::Professional => "professional",
            Self::Firm => "firm",
            Self::Neutral => "neutral",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Benevolent => "bienveillant",
            Self::Professional => "professionnel",
            Self::Firm => "ferme",
            Self::Neutral => "neutre",
        }
    }
}

/// Advisory goal the reply should pursue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    Thank,
    Clarify,
    Schedule,
    Support,
    Forward,
}

impl Objective {
    pub fn id(&self) -> &'static str {
        match self {
            Self::Thank => "thank",
            Self::Clarify => "clarify",
            Self::Schedule => "schedule",
            Self::Support => "support",
            Self::Forward => "forward",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Thank => "remercier",
            Self::Clarify => "clarifier",
            Self::Schedule => "planifier",
            Self::Support => "soutien",
            Self::Forward => "transmettre",
        }
    }
}

macro_rules! display_and_parse {
    ($ty:ident, $what:literal, [$($variant:ident),+ $(,)?]) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $ty {
            type Err = String;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                [$(Self::$variant),+]
                    .into_iter()
                    .find(|v| v.id() == s)
                    .ok_or_else(|| format!("Unknown {}: {}", $what, s))
            }
        }
    };
}

display_and_parse!(Category, "category", [Professional, Personal]);
display_and_parse!(Urgency, "urgency", [Urgent, ToFollowUp, Normal]);
display_and_parse!(
    Emotion,
    "emotion",
    [Positive, Stressed, Disappointed, Inquisitive, Neutral]
);
display_and_parse!(Tone, "tone", [Benevolent, Professional, Firm, Neutral]);
display_and_parse!(
    Objective,
    "objective",
    [Thank, Clarify, Schedule, Support, Forward]
);

// ── Derived report ──────────────────────────────────────────────────

/// Classification and extraction results for one email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAnalysis {
    pub category: Category,
    pub urgency: Urgency,
    pub dominant_emotion: Emotion,
    /// First meaningful line, at most `summary_max_chars` characters.
    pub summary: String,
    pub key_points: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_hint: Option<String>,
}

/// Action recommendations accompanying the draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestions {
    pub tone: Tone,
    pub objectives: Vec<Objective>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up_date: Option<String>,
    pub reminders: Vec<String>,
}

/// Draft reply. The operator may edit a copy of it (see `crate::draft`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedResponse {
    pub subject: String,
    pub body: String,
    pub remarks: String,
}

/// Everything the pipeline derives from one email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantReport {
    pub analysis: EmailAnalysis,
    pub suggestions: Suggestions,
    pub response: SuggestedResponse,
}
