//! Tone, objectives and reminders recommended alongside the draft.

use crate::pipeline::types::{Category, Emotion, Objective, Tone, Urgency};

pub fn tone_for(category: Category) -> Tone {
    match category {
        Category::Professional => Tone::Professional,
        Category::Personal => Tone::Benevolent,
    }
}

/// Advisory objectives, most important first.
pub fn objectives_for(category: Category) -> Vec<Objective> {
    match category {
        Category::Professional => vec![Objective::Clarify, Objective::Schedule, Objective::Forward],
        Category::Personal => vec![Objective::Thank, Objective::Support, Objective::Schedule],
    }
}

/// Urgency reminder first, then the emotion one; empty when neither applies.
pub fn reminders_for(urgency: Urgency, emotion: Emotion) -> Vec<String> {
    let mut reminders = Vec::new();
    if urgency == Urgency::Urgent {
        reminders.push("Planifier un rappel automatique si aucune réponse reçue.".to_string());
    }
    if emotion == Emotion::Disappointed {
        reminders.push("Prévoir un point téléphonique pour personnaliser le suivi.".to_string());
    }
    reminders
}
