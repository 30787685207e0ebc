//! Email datasets: the bundled samples and JSON files.

use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};
use tracing::info;

use crate::error::DatasetError;
use crate::pipeline::types::{EmailMessage, EmailMetadata};

/// Load a JSON array of emails.
pub fn load_emails(path: &Path) -> Result<Vec<EmailMessage>, DatasetError> {
    let raw = std::fs::read_to_string(path)?;
    let emails: Vec<EmailMessage> = serde_json::from_str(&raw)?;
    info!(path = %path.display(), count = emails.len(), "Loaded emails");
    Ok(emails)
}

fn at(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0)
        .single()
        .unwrap_or_default()
}

/// Three representative messages: an HR follow-up, a friend's invitation and
/// a client's review of a delivered report.
pub fn sample_emails() -> Vec<EmailMessage> {
    vec![
        EmailMessage {
            id: "mail-001".into(),
            sender: "Sophie Martin · RH".into(),
            subject: "Suivi entretien et documents manquants".into(),
            received_at: at(2025, 1, 14, 8, 45),
            thread_ref: None,
            metadata: None,
            body: "Bonjour,

Merci encore pour l’entretien de vendredi. Nous avons eu un excellent retour de l’équipe.

Pour finaliser ton dossier avant la proposition officielle, nous aurions besoin :
- D’une copie de ton diplôme de master
- De tes disponibilités pour une éventuelle prise de poste
- De savoir si tu as des contraintes particulières sur le télétravail

Peux-tu nous transmettre ces éléments d’ici mercredi ?

Bien cordialement,
Sophie"
                .into(),
        },
        EmailMessage {
            id: "mail-002".into(),
            sender: "Guillaume · Ami de promo".into(),
            subject: "Des nouvelles & invitation".into(),
            received_at: at(2025, 1, 13, 19, 12),
            thread_ref: None,
            metadata: None,
            body: "Hey !

Ça fait une éternité ! On organise un dîner de retrouvailles samedi prochain avec la bande de promo.
Ça te dirait de venir ? On peut garder une place à côté de toi si tu ne veux pas être coincé à côté de Julien ;)

Au passage, comment avance ton projet de freelance ? Toujours preneur d’un coup de main si tu veux qu’on brainstorme.

On t’embrasse,
Gui"
                .into(),
        },
        EmailMessage {
            id: "mail-003".into(),
            sender: "Claire Durand · Cliente".into(),
            subject: "Point sur la livraison du rapport trimestriel".into(),
            received_at: at(2025, 1, 12, 11, 30),
            thread_ref: Some("Contrat #4588".into()),
            metadata: Some(EmailMetadata {
                project: Some("Accompagnement stratégique Riviera".into()),
                related_to: Some("Rapport Q4".into()),
            }),
            body: "Bonjour,

Nous avons bien reçu la première version du rapport trimestriel hier.

Plusieurs éléments nécessitent des clarifications avant la réunion de jeudi :
1. Les chiffres de la page 7 ne correspondent pas aux indicateurs communiqués en réunion de décembre.
2. La section recommandation manque d’exemples concrets sur les prochaines étapes.
3. Pouvez-vous ajouter une synthèse exécutive en début de document ?

Merci de nous dire si vous pouvez intégrer ces retours d’ici mercredi midi afin que nous puissions valider avant la présentation.

Bien à vous,
Claire"
                .into(),
        },
    ]
}
