use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;

use mail_assist::config::AssistantConfig;
use mail_assist::dataset::{load_emails, sample_emails};
use mail_assist::draft::ResponseDraft;
use mail_assist::pipeline::{
    Assistant, AssistantReport, Category, EmailMessage, ReportBook, Urgency, build_reports,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays clean for reports
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let format = match std::env::var("MAIL_ASSIST_FORMAT").as_deref() {
        Ok("json") => OutputFormat::Json,
        Ok("text") | Err(_) => OutputFormat::Text,
        Ok(other) => anyhow::bail!("MAIL_ASSIST_FORMAT must be \"text\" or \"json\", got {other:?}"),
    };

    let config = AssistantConfig::from_env()?;
    let assistant = Assistant::from_config(config).context("Failed to build assistant")?;

    let emails = match std::env::var("MAIL_ASSIST_INPUT") {
        Ok(path) => {
            let path = PathBuf::from(path);
            load_emails(&path).with_context(|| format!("Failed to load {}", path.display()))?
        }
        Err(_) => sample_emails(),
    };

    eprintln!("📬 Mail Assist v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Emails: {}", emails.len());

    let book = build_reports(&assistant, &emails, Local::now().date_naive())?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&book)?),
        OutputFormat::Text => {
            println!("{}\n", render_tallies(&book));
            for email in &emails {
                if let Some(report) = book.get(&email.id) {
                    println!("{}", render_overview(email, report));
                }
            }
        }
    }

    Ok(())
}

fn render_tallies(book: &ReportBook) -> String {
    let count = |keep: &dyn Fn(&AssistantReport) -> bool| {
        book.iter().filter(|(_, report)| keep(report)).count()
    };
    format!(
        "Professionnels : {} · Personnels : {} · Urgents : {}",
        count(&|r| r.analysis.category == Category::Professional),
        count(&|r| r.analysis.category == Category::Personal),
        count(&|r| r.analysis.urgency == Urgency::Urgent),
    )
}

fn render_overview(email: &EmailMessage, report: &AssistantReport) -> String {
    let analysis = &report.analysis;
    let suggestions = &report.suggestions;
    let mut out = String::new();

    out.push_str(&format!("═══ {} ═══\n", email.subject));
    out.push_str(&format!("De : {}\n", email.sender));
    out.push_str(&format!(
        "Reçu le {}\n",
        email
            .received_at
            .with_timezone(&Local)
            .format("%d/%m/%Y %H:%M:%S")
    ));
    if let Some(project) = email.project() {
        out.push_str(&format!("Projet : {project}\n"));
    }
    if let Some(reference) = email.thread_ref() {
        out.push_str(&format!("Référence : {reference}\n"));
    }
    out.push_str(&format!(
        "[{}] Ton recommandé : {} · Emotion détectée : {}\n\n",
        analysis.urgency.badge(),
        suggestions.tone,
        analysis.dominant_emotion,
    ));

    out.push_str(&format!("Résumé : {}\n", analysis.summary));
    out.push_str("Points clés :\n");
    for point in &analysis.key_points {
        out.push_str(&format!("  - {point}\n"));
    }

    let objectives: Vec<String> = suggestions.objectives.iter().map(|o| o.to_string()).collect();
    out.push_str(&format!("Objectifs : {}\n", objectives.join(", ")));
    match &suggestions.follow_up_date {
        Some(date) => out.push_str(&format!("Suivi : Prévoir un point le {date}\n")),
        None => out.push_str("Suivi : Pas de deadline explicite détectée\n"),
    }
    if suggestions.reminders.is_empty() {
        out.push_str("Rappel : Pas de rappel additionnel requis\n");
    }
    for reminder in &suggestions.reminders {
        out.push_str(&format!("Rappel : {reminder}\n"));
    }
    if let Some(hint) = &analysis.history_hint {
        out.push_str(&format!("Contexte : {hint}\n"));
    }

    out.push('\n');
    out.push_str(&ResponseDraft::from_report(report).validation_preview());
    out
}
