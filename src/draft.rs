//! Operator-editable reply draft.
//!
//! A draft starts as a copy of a report's suggested response. Edits stay on
//! the draft; the report it came from is never touched.

use serde::{Deserialize, Serialize};

use crate::pipeline::types::{AssistantReport, SuggestedResponse};

/// Shown in the preview when the remarks field is left blank.
const NO_REMARKS: &str = "Aucune, à valider.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseDraft {
    response: SuggestedResponse,
}

impl ResponseDraft {
    pub fn from_report(report: &AssistantReport) -> Self {
        Self {
            response: report.response.clone(),
        }
    }

    pub fn subject(&self) -> &str {
        &self.response.subject
    }

    pub fn body(&self) -> &str {
        &self.response.body
    }

    pub fn remarks(&self) -> &str {
        &self.response.remarks
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.response.subject = subject.into();
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.response.body = body.into();
    }

    pub fn set_remarks(&mut self, remarks: impl Into<String>) {
        self.response.remarks = remarks.into();
    }

    /// Whether the draft differs from the report's suggestion.
    pub fn is_modified(&self, report: &AssistantReport) -> bool {
        self.response != report.response
    }

    /// Throw away edits and start again from the suggestion.
    pub fn reset(&mut self, report: &AssistantReport) {
        self.response = report.response.clone();
    }

    pub fn as_response(&self) -> &SuggestedResponse {
        &self.response
    }

    /// Plain-text block to paste when asking for approval before sending.
    pub fn validation_preview(&self) -> String {
        let remarks = match self.response.remarks.trim() {
            "" => NO_REMARKS,
            r => r,
        };
        format!(
            "Objet du mail : {}\n\nRéponse proposée :\n{}\n\n- Remarques éventuelles : {}\n",
            self.response.subject,
            self.response.body.trim(),
            remarks,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::types::{
        Category, EmailAnalysis, Emotion, Objective, Suggestions, Tone, Urgency,
    };

    fn make_report() -> AssistantReport {
        AssistantReport {
            analysis: EmailAnalysis {
                category: Category::Personal,
                urgency: Urgency::Normal,
                dominant_emotion: Emotion::Neutral,
                summary: "Coucou".into(),
                key_points: vec![],
                history_hint: None,
            },
            suggestions: Suggestions {
                tone: Tone::Benevolent,
                objectives: vec![Objective::Thank],
                follow_up_date: None,
                reminders: vec![],
            },
            response: SuggestedResponse {
                subject: "Re: Coucou".into(),
                body: "Salut,\n\nMerci !\n".into(),
                remarks: "Relire avant envoi.".into(),
            },
        }
    }

    #[test]
    fn starts_as_copy_of_suggestion() {
        let report = make_report();
        let draft = ResponseDraft::from_report(&report);
        assert_eq!(draft.as_response(), &report.response);
        assert!(!draft.is_modified(&report));
    }

    #[test]
    fn edits_do_not_touch_report() {
        let report = make_report();
        let mut draft = ResponseDraft::from_report(&report);
        draft.set_body("Salut, ok pour samedi.");
        draft.set_subject("Re: Samedi");

        assert!(draft.is_modified(&report));
        assert_eq!(draft.body(), "Salut, ok pour samedi.");
        assert_eq!(report.response.subject, "Re: Coucou");
    }

    #[test]
    fn reset_restores_suggestion() {
        let report = make_report();
        let mut draft = ResponseDraft::from_report(&report);
        draft.set_remarks("");
        draft.reset(&report);
        assert_eq!(draft.remarks(), "Relire avant envoi.");
        assert!(!draft.is_modified(&report));
    }

    #[test]
    fn preview_layout() {
        let draft = ResponseDraft::from_report(&make_report());
        assert_eq!(
            draft.validation_preview(),
            "Objet du mail : Re: Coucou\n\nRéponse proposée :\nSalut,\n\nMerci !\n\n\
             - Remarques éventuelles : Relire avant envoi.\n"
        );
    }

    #[test]
    fn preview_with_blank_remarks() {
        let mut draft = ResponseDraft::from_report(&make_report());
        draft.set_remarks("   ");
        assert!(
            draft
                .validation_preview()
                .ends_with("- Remarques éventuelles : Aucune, à valider.\n")
        );
    }
}
