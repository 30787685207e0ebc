//! Extractors deriving structured fragments from the raw body.
//!
//! All of them are total: absence is `None` or an empty `Vec`, never an error.

use std::sync::LazyLock;

use chrono::{Locale, NaiveDate, NaiveTime};
use regex::Regex;
use tracing::warn;

use crate::pipeline::rules::Rules;
use crate::pipeline::types::EmailMessage;

/// D/M/Y with a 1–2 digit day and month and a 2 or 4 digit year.
static DATE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([0-9]{1,2})/([0-9]{1,2})/([0-9]{4}|[0-9]{2})\b").unwrap()
});

const ELLIPSIS: &str = "...";

/// First non-blank line, whitespace-collapsed, capped at `max_chars` characters.
///
/// A body with only blank lines falls back to the whole body (so possibly "").
pub fn summarize(body: &str, max_chars: usize) -> String {
    let first = body
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap_or(body);
    let collapsed = first.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() > max_chars {
        let keep = max_chars.saturating_sub(ELLIPSIS.len());
        let truncated: String = collapsed.chars().take(keep).collect();
        format!("{truncated}{ELLIPSIS}")
    } else {
        collapsed
    }
}

fn is_point_marker(c: char) -> bool {
    c == '-' || c == '•' || c.is_ascii_digit()
}

fn is_marker_residue(c: char) -> bool {
    is_point_marker(c) || matches!(c, '.' | '(' | ')') || c.is_whitespace()
}

/// Bullet and numbered lines with their markers stripped, in source order.
///
/// Without any such line, the first `fallback_limit` non-empty sentence or
/// line segments are used instead.
pub fn extract_key_points(body: &str, fallback_limit: usize) -> Vec<String> {
    let points: Vec<String> = body
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with(is_point_marker))
        .map(|line| line.trim_start_matches(is_marker_residue).trim().to_string())
        .collect();

    if !points.is_empty() {
        return points;
    }

    body.split(['\n', '.', '!', '?'])
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .take(fallback_limit)
        .map(String::from)
        .collect()
}

/// Parse the first D/M/Y token of `body`. Two-digit years are 20YY.
pub fn parse_date_token(body: &str) -> Option<NaiveDate> {
    let caps = DATE_TOKEN.captures(body)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year_digits = &caps[3];
    let mut year: i32 = year_digits.parse().ok()?;
    if year_digits.len() == 2 {
        year += 2000;
    }

    let date = NaiveDate::from_ymd_opt(year, month, day);
    if date.is_none() {
        warn!(token = &caps[0], "Ignoring impossible date token");
    }
    date
}

/// Long French date, e.g. "jeudi 14 janvier 2027".
pub fn format_long_date(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .format_localized("%A %-d %B %Y", Locale::fr_FR)
        .to_string()
}

/// Follow-up date suggested by the body, relative to `today`.
///
/// An explicit date strictly after `today` wins; otherwise the first marker
/// weekday mentioned yields its fixed "(prochain)" phrase.
pub fn follow_up_date(body: &str, today: NaiveDate, rules: &Rules) -> Option<String> {
    if let Some(date) = parse_date_token(body).filter(|d| *d > today) {
        return Some(format_long_date(date));
    }

    let lower = body.to_lowercase();
    rules
        .follow_up_days
        .iter()
        .find(|marker| lower.contains(&marker.word))
        .map(|marker| marker.phrase.clone())
}

/// Context the operator should keep in mind when replying.
pub fn history_hint(email: &EmailMessage, rules: &Rules) -> Option<String> {
    if let Some(project) = email.project() {
        return Some(format!(
            "Dernier échange sur « {} », référence {}.",
            project,
            email.thread_ref().unwrap_or("N/A"),
        ));
    }

    let lower = email.body.to_lowercase();
    if rules.continuation.iter().any(|m| lower.contains(m.as_str())) {
        return Some("L'expéditeur attend un retour depuis un précédent message.".to_string());
    }

    None
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

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
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
    fn summary_takes_first_non_blank_line() {
        let body = "\n   \nBonjour,   comment\tvas-tu ?\nDeuxième ligne";
        assert_eq!(summarize(body, 140), "Bonjour, comment vas-tu ?");
    }

    #[test]
    fn summary_is_ellipsized_at_limit() {
        let line = "é".repeat(200);
        let summary = summarize(&line, 140);
        assert_eq!(summary.chars().count(), 140);
        assert!(summary.ends_with("..."));
        assert!(summary.starts_with("ééé"));
    }

    #[test]
    fn summary_exactly_at_limit_is_untouched() {
        let line = "a".repeat(140);
        assert_eq!(summarize(&line, 140), line);
    }

    #[test]
    fn summary_of_blank_body_is_empty() {
        assert_eq!(summarize("  \n \t \n", 140), "");
        assert_eq!(summarize("", 140), "");
    }

    #[test]
    fn dash_bullets_become_points() {
        let body = "Bonjour,\n- Premier point\n  - Deuxième point\n-Troisième\nMerci";
        assert_eq!(
            extract_key_points(body, 3),
            vec!["Premier point", "Deuxième point", "Troisième"]
        );
    }

    #[test]
    fn numbered_and_glyph_bullets_become_points() {
        let body = "1. Les chiffres\n2) La section\n• Une synthèse\n(3) ignoré";
        assert_eq!(
            extract_key_points(body, 3),
            vec!["Les chiffres", "La section", "Une synthèse"]
        );
    }

    #[test]
    fn all_bullets_are_kept_beyond_fallback_limit() {
        let body = "- a\n- b\n- c\n- d";
        assert_eq!(extract_key_points(body, 3).len(), 4);
    }

    #[test]
    fn sentences_are_the_fallback() {
        let body = "Salut ! Tu viens samedi ? On sera nombreux. Réponds-moi vite.";
        assert_eq!(
            extract_key_points(body, 3),
            vec!["Salut", "Tu viens samedi", "On sera nombreux"]
        );
    }

    #[test]
    fn blank_body_has_no_points() {
        assert!(extract_key_points("   \n\n  ", 3).is_empty());
    }

    #[test]
    fn parses_four_and_two_digit_years() {
        assert_eq!(
            parse_date_token("avant le 14/01/2027 svp"),
            NaiveDate::from_ymd_opt(2027, 1, 14)
        );
        assert_eq!(
            parse_date_token("le 5/3/27"),
            NaiveDate::from_ymd_opt(2027, 3, 5)
        );
    }

    #[test]
    fn impossible_or_malformed_dates_are_absent() {
        assert_eq!(parse_date_token("le 31/02/2027"), None);
        assert_eq!(parse_date_token("le 14/01/202"), None);
        assert_eq!(parse_date_token("pas de date"), None);
    }

    #[test]
    fn long_date_is_french() {
        let date = NaiveDate::from_ymd_opt(2027, 1, 14).unwrap();
        assert_eq!(format_long_date(date), "jeudi 14 janvier 2027");
    }

    #[test]
    fn future_explicit_date_wins_over_weekday() {
        let got = follow_up_date("Livraison le 14/01/2027, ou mercredi", today(), &rules());
        assert_eq!(got.as_deref(), Some("jeudi 14 janvier 2027"));
    }

    #[test]
    fn past_or_same_day_date_falls_back_to_weekday() {
        let got = follow_up_date("Prévu le 18/10/2026, sinon Jeudi", today(), &rules());
        assert_eq!(got.as_deref(), Some("Jeudi (prochain)"));

        let got = follow_up_date("Prévu le 01/01/2020", today(), &rules());
        assert_eq!(got, None);
    }

    #[test]
    fn wednesday_has_priority_over_thursday() {
        let got = follow_up_date("jeudi ou mercredi", today(), &rules());
        assert_eq!(got.as_deref(), Some("Mercredi (prochain)"));
    }

    #[test]
    fn history_hint_from_project() {
        let mut email = make_email("Bonjour");
        email.metadata = Some(EmailMetadata {
            project: Some("Riviera".into()),
            related_to: None,
        });
        assert_eq!(
            history_hint(&email, &rules()).as_deref(),
            Some("Dernier échange sur « Riviera », référence N/A.")
        );

        email.thread_ref = Some("Contrat #4588".into());
        assert_eq!(
            history_hint(&email, &rules()).as_deref(),
            Some("Dernier échange sur « Riviera », référence Contrat #4588.")
        );
    }

    #[test]
    fn history_hint_from_continuation_marker() {
        let email = make_email("J'attends toujours ton RETOUR.");
        assert_eq!(
            history_hint(&email, &rules()).as_deref(),
            Some("L'expéditeur attend un retour depuis un précédent message.")
        );
    }

    #[test]
    fn no_history_hint() {
        assert_eq!(history_hint(&make_email("Coucou"), &rules()), None);
    }
}
