//! Category, urgency and emotion detectors.
//!
//! Each detector is an ordered list of checks where the first match wins,
//! with an unconditional fallback so every email resolves to a variant.

use tracing::debug;

use crate::pipeline::normalize::{contains_any, normalize};
use crate::pipeline::rules::Rules;
use crate::pipeline::types::{Category, EmailMessage, Emotion, Urgency};

/// Professional if the email carries a project or thread reference, or if the
/// body uses work vocabulary; personal otherwise.
pub fn detect_category(email: &EmailMessage, rules: &Rules) -> Category {
    if email.project().is_some() || email.thread_ref().is_some() {
        debug!(id = %email.id, "Category from project/thread context");
        return Category::Professional;
    }
    if contains_any(&normalize(&email.body), &rules.professional) {
        return Category::Professional;
    }
    Category::Personal
}

pub fn detect_urgency(email: &EmailMessage, rules: &Rules) -> Urgency {
    let text = normalize(&email.body);
    if contains_any(&text, &rules.urgency) {
        return Urgency::Urgent;
    }

    // Broad: "nouvelles" also matches plain chit-chat.
    if contains_any(&text, &rules.follow_up) {
        return Urgency::ToFollowUp;
    }

    if rules
        .deadline
        .as_ref()
        .is_some_and(|re| re.is_match(&email.body))
    {
        debug!(id = %email.id, "Urgency from deadline word");
        return Urgency::Urgent;
    }

    Urgency::Normal
}

pub fn detect_emotion(email: &EmailMessage, rules: &Rules) -> Emotion {
    let text = normalize(&email.body);
    if contains_any(&text, &rules.positive) {
        Emotion::Positive
    } else if contains_any(&text, &rules.disappointed) {
        Emotion::Disappointed
    } else if contains_any(&text, &rules.stressed) {
        Emotion::Stressed
    } else if text.contains('?') {
        Emotion::Inquisitive
    } else {
        Emotion::Neutral
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::pipeline::rules::Lexicon;
    use crate::pipeline::types::EmailMetadata;

    fn rules() -> Rules {
        Rules::compile(&Lexicon::default()).unwrap()
    }

    fn make_email(body: &str) -> EmailMessage {
        EmailMessage {
            id: "test-1".into(),
            sender: "Alice".into(),
            subject: "Objet".into(),
            body: body.into(),
            received_at: Utc::now(),
            thread_ref: None,
            metadata: None,
        }
    }

    #[test]
    fn thread_ref_forces_professional() {
        let mut email = make_email("On se fait un ciné ?");
        email.thread_ref = Some("Contrat #4588".into());
        assert_eq!(detect_category(&email, &rules()), Category::Professional);
    }

    #[test]
    fn project_forces_professional() {
        let mut email = make_email("Coucou !");
        email.metadata = Some(EmailMetadata {
            project: Some("Riviera".into()),
            related_to: None,
        });
        assert_eq!(detect_category(&email, &rules()), Category::Professional);
    }

    #[test]
    fn empty_project_does_not_force_professional() {
        let mut email = make_email("Coucou !");
        email.metadata = Some(EmailMetadata::default());
        email.thread_ref = Some(String::new());
        assert_eq!(detect_category(&email, &rules()), Category::Personal);
    }

    #[test]
    fn work_vocabulary_matches_without_accents() {
        let email = make_email("Je prépare la REUNION de demain.");
        assert_eq!(detect_category(&email, &rules()), Category::Professional);
    }

    #[test]
    fn chit_chat_is_personal() {
        let email = make_email("Hey ! Ça te dirait de venir ?");
        assert_eq!(detect_category(&email, &rules()), Category::Personal);
    }

    #[test]
    fn urgency_keyword_beats_follow_up_keyword() {
        let email = make_email("Petite relance : c'est urgent.");
        assert_eq!(detect_urgency(&email, &rules()), Urgency::Urgent);
    }

    #[test]
    fn accented_urgency_keyword_matches() {
        let email = make_email("Réponds dès que possible stp");
        assert_eq!(detect_urgency(&email, &rules()), Urgency::Urgent);
    }

    #[test]
    fn follow_up_keyword() {
        let email = make_email("Je te relance pour le devis.");
        assert_eq!(detect_urgency(&email, &rules()), Urgency::ToFollowUp);
    }

    #[test]
    fn news_token_over_triggers_follow_up() {
        let email = make_email("Donne-moi de tes nouvelles !");
        assert_eq!(detect_urgency(&email, &rules()), Urgency::ToFollowUp);
    }

    #[test]
    fn deadline_word_is_urgent() {
        let email = make_email("On en parle Demain ?");
        assert_eq!(detect_urgency(&email, &rules()), Urgency::Urgent);
    }

    #[test]
    fn nothing_matches_is_normal() {
        let email = make_email("Voici les photos de la soirée.");
        assert_eq!(detect_urgency(&email, &rules()), Urgency::Normal);
    }

    #[test]
    fn positive_wins_over_disappointment() {
        let email = make_email("Merci, même si c'est dommage.");
        assert_eq!(detect_emotion(&email, &rules()), Emotion::Positive);
    }

    #[test]
    fn disappointment_wins_over_stress() {
        let email = make_email("Je suis déçu, encore un retard.");
        assert_eq!(detect_emotion(&email, &rules()), Emotion::Disappointed);
    }

    #[test]
    fn stress_keyword() {
        let email = make_email("Je suis inquiet pour la suite.");
        assert_eq!(detect_emotion(&email, &rules()), Emotion::Stressed);
    }

    #[test]
    fn question_mark_is_inquisitive() {
        let email = make_email("Hey ! Ça te dirait de venir ?");
        assert_eq!(detect_emotion(&email, &rules()), Emotion::Inquisitive);
    }

    #[test]
    fn fallback_is_neutral() {
        let email = make_email("Voici le lien.");
        assert_eq!(detect_emotion(&email, &rules()), Emotion::Neutral);
    }
}
