//! Report assembly: runs every analyzer for one email.

use std::sync::LazyLock;

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::config::AssistantConfig;
use crate::error::ConfigError;
use crate::pipeline::classify::{detect_category, detect_emotion, detect_urgency};
use crate::pipeline::extract::{extract_key_points, follow_up_date, history_hint, summarize};
use crate::pipeline::respond::suggested_response;
use crate::pipeline::rules::{Lexicon, Rules};
use crate::pipeline::suggest::{objectives_for, reminders_for, tone_for};
use crate::pipeline::types::{AssistantReport, EmailAnalysis, EmailMessage, Suggestions};

static DEFAULT_ASSISTANT: LazyLock<Assistant> = LazyLock::new(|| {
    Assistant::new(AssistantConfig::default(), &Lexicon::default())
        .expect("built-in lexicon compiles")
});

/// A configured, stateless analysis pipeline.
///
/// `report` takes `&self` and keeps nothing between calls: the same email
/// and reference date always give an identical report.
#[derive(Debug, Clone)]
pub struct Assistant {
    config: AssistantConfig,
    rules: Rules,
}

impl Assistant {
    pub fn new(config: AssistantConfig, lexicon: &Lexicon) -> Result<Self, ConfigError> {
        config.validate()?;
        let rules = Rules::compile(lexicon)?;
        Ok(Self { config, rules })
    }

    /// Build from a configuration, loading its lexicon override if any.
    pub fn from_config(config: AssistantConfig) -> Result<Self, ConfigError> {
        let lexicon = match &config.lexicon_path {
            Some(path) => Lexicon::from_file(path)?,
            None => Lexicon::default(),
        };
        Self::new(config, &lexicon)
    }

    /// Classification and extraction only.
    pub fn analyze(&self, email: &EmailMessage) -> EmailAnalysis {
        let analysis = EmailAnalysis {
            category: detect_category(email, &self.rules),
            urgency: detect_urgency(email, &self.rules),
            dominant_emotion: detect_emotion(email, &self.rules),
            summary: summarize(&email.body, self.config.summary_max_chars),
            key_points: extract_key_points(&email.body, self.config.fallback_point_limit),
            history_hint: history_hint(email, &self.rules),
        };

        debug!(
            id = %email.id,
            category = analysis.category.id(),
            urgency = analysis.urgency.id(),
            emotion = analysis.dominant_emotion.id(),
            key_points = analysis.key_points.len(),
            "Email analyzed"
        );

        analysis
    }

    /// Full report for `email`, with `today` as the reference for date inference.
    pub fn report(&self, email: &EmailMessage, today: NaiveDate) -> AssistantReport {
        let analysis = self.analyze(email);
        let follow_up_date = follow_up_date(&email.body, today, &self.rules);

        let response = suggested_response(
            &email.subject,
            &analysis,
            follow_up_date.as_deref(),
            self.config.reply_point_limit,
        );

        let suggestions = Suggestions {
            tone: tone_for(analysis.category),
            objectives: objectives_for(analysis.category),
            follow_up_date,
            reminders: reminders_for(analysis.urgency, analysis.dominant_emotion),
        };

        AssistantReport {
            analysis,
            suggestions,
            response,
        }
    }
}

/// Report for one email with the built-in lexicon, relative to the local date.
pub fn build_assistant_report(email: &EmailMessage) -> AssistantReport {
    DEFAULT_ASSISTANT.report(email, Local::now().date_naive())
}
