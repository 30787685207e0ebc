//! Email analysis and reply drafting pipeline.
//!
//! Every email flows through, with no state kept between calls:
//! 1. `classify` — category, urgency and emotion from keyword rules
//! 2. `extract` — summary, key points, follow-up date, history hint
//! 3. `suggest` — tone, objectives and reminders for the category
//! 4. `respond` — templated subject, body and remarks
//!
//! `report::Assistant` runs the stages for one email; `book` builds reports
//! for a whole set. Keyword tables live in `rules` as swappable data.

pub mod book;
pub mod classify;
pub mod extract;
pub mod normalize;
pub mod report;
pub mod respond;
pub mod rules;
pub mod suggest;
pub mod types;

pub use book::{ReportBook, ReportCache, build_reports};
pub use report::{Assistant, build_assistant_report};
pub use rules::Lexicon;
pub use types::{
    AssistantReport, Category, EmailAnalysis, EmailMessage, EmailMetadata, Emotion, Objective,
    SuggestedResponse, Suggestions, Tone, Urgency,
};
