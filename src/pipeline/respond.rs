//! Draft reply composition.
//!
//! Pure templating over an `EmailAnalysis`: no keyword or pattern logic
//! lives here. Wording branches on category; remarks on urgency and emotion.

use crate::pipeline::types::{Category, EmailAnalysis, Emotion, SuggestedResponse, Urgency};

const REMARK_SEPARATOR: &str = " • ";

/// Per-category fixed wording.
struct Template {
    salutation: &'static str,
    intro: &'static str,
    clarification: &'static str,
    closing: &'static str,
}

fn template(category: Category) -> Template {
    match category {
        Category::Professional => Template {
            salutation: "Bonjour",
            intro: "Merci pour votre message et pour les précisions apportées.",
            clarification: "N'hésitez pas à me dire si vous souhaitez un échange rapide pour valider les détails.",
            closing: "Bien cordialement,\n[Votre nom]",
        },
        Category::Personal => Template {
            salutation: "Salut",
            intro: "Merci pour ton message, ça me fait très plaisir d’avoir de tes nouvelles.",
            clarification: "Dis-moi ce qui t’arrangerait le plus et on s’organise.",
            closing: "À très vite,\n[Votre prénom]",
        },
    }
}

/// Uppercase the first character, leaving the rest untouched.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// "Re: " + subject, unless it already is a reply. Idempotent.
pub fn reply_subject(subject: &str) -> String {
    let base = subject.trim();
    if base.to_lowercase().starts_with("re:") {
        base.to_string()
    } else {
        format!("Re: {base}").trim_end().to_string()
    }
}

fn action_lines(analysis: &EmailAnalysis, point_limit: usize) -> String {
    analysis
        .key_points
        .iter()
        .take(point_limit)
        .enumerate()
        .map(|(i, point)| match analysis.category {
            Category::Professional => {
                format!("{}. {} — voici ma réponse :", i + 1, capitalize(point))
            }
            Category::Personal => format!("• {}.", capitalize(point)),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn commitment(analysis: &EmailAnalysis, follow_up_date: Option<&str>) -> String {
    match analysis.category {
        Category::Professional => match follow_up_date {
            Some(date) => format!(
                "Je vous confirme que je peux traiter les points mentionnés d’ici {date}."
            ),
            None => "Je vous confirme que je peux traiter les points mentionnés.".to_string(),
        },
        Category::Personal => {
            let topic = analysis
                .key_points
                .first()
                .filter(|p| !p.is_empty())
                .map(|p| p.to_lowercase())
                .unwrap_or_else(|| "poursuivre la discussion".to_string());
            format!("Je serais ravi(e) de {topic}.")
        }
    }
}

/// Full reply body: salutation, intro, addressed points, commitment, closing.
pub fn reply_body(
    analysis: &EmailAnalysis,
    follow_up_date: Option<&str>,
    point_limit: usize,
) -> String {
    let t = template(analysis.category);
    format!(
        "{salutation},\n\n{intro}\n\n{actions}\n\n{commitment}\n{clarification}\n\n{closing}",
        salutation = t.salutation,
        intro = t.intro,
        actions = action_lines(analysis, point_limit),
        commitment = commitment(analysis, follow_up_date),
        clarification = t.clarification,
        closing = t.closing,
    )
}

/// Operator remarks, joined with " • ".
pub fn remarks(analysis: &EmailAnalysis) -> String {
    let mut notes: Vec<&str> = Vec::new();

    match analysis.urgency {
        Urgency::Urgent => notes.push("Répondre avant la fin de journée pour respecter la demande."),
        Urgency::ToFollowUp => notes.push("Prévoir une relance si aucune réponse sous 48h."),
        Urgency::Normal => {}
    }

    match analysis.dominant_emotion {
        Emotion::Stressed => notes.push("Soigner le ton rassurant, proposer une solution concrète."),
        Emotion::Disappointed => {
            notes.push("Inclure des excuses si nécessaire et un plan de correction.")
        }
        Emotion::Positive | Emotion::Inquisitive | Emotion::Neutral => {}
    }

    if notes.is_empty() {
        notes.push("Relire avant envoi pour confirmer les informations clés.");
    }

    notes.join(REMARK_SEPARATOR)
}

pub fn suggested_response(
    subject: &str,
    analysis: &EmailAnalysis,
    follow_up_date: Option<&str>,
    point_limit: usize,
) -> SuggestedResponse {
    SuggestedResponse {
        subject: reply_subject(subject),
        body: reply_body(analysis, follow_up_date, point_limit),
        remarks: remarks(analysis),
    }
}
