//! Reports for a whole set of emails.
//!
//! `ReportBook` is the eager form: every report is computed up front and the
//! book is only handed out once complete. `ReportCache` is the lazy form,
//! memoized by email id and invalidated whenever the email differs from the
//! one its report was built from.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::ser::{Serialize, Serializer};
use tracing::{debug, info};

use crate::error::DatasetError;
use crate::pipeline::report::Assistant;
use crate::pipeline::types::{AssistantReport, EmailMessage};

/// Reports keyed by email id, iterated in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportBook {
    entries: Vec<(String, AssistantReport)>,
    index: HashMap<String, usize>,
}

impl ReportBook {
    pub fn get(&self, id: &str) -> Option<&AssistantReport> {
        self.index.get(id).map(|&i| &self.entries[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AssistantReport)> {
        self.entries.iter().map(|(id, report)| (id.as_str(), report))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ReportBook {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Compute every report before returning.
///
/// Fails without a partial result if two emails share an id.
pub fn build_reports(
    assistant: &Assistant,
    emails: &[EmailMessage],
    today: NaiveDate,
) -> Result<ReportBook, DatasetError> {
    let mut book = ReportBook::default();

    for email in emails {
        if book.index.contains_key(&email.id) {
            return Err(DatasetError::DuplicateId(email.id.clone()));
        }
        let report = assistant.report(email, today);
        book.index.insert(email.id.clone(), book.entries.len());
        book.entries.push((email.id.clone(), report));
    }

    info!(count = book.len(), "Built assistant reports");
    Ok(book)
}

/// On-demand reports, recomputed only when an email's content changes.
#[derive(Debug)]
pub struct ReportCache<'a> {
    assistant: &'a Assistant,
    today: NaiveDate,
    /// Each report next to the exact email it was built from.
    entries: HashMap<String, (EmailMessage, AssistantReport)>,
}

impl<'a> ReportCache<'a> {
    pub fn new(assistant: &'a Assistant, today: NaiveDate) -> Self {
        Self {
            assistant,
            today,
            entries: HashMap::new(),
        }
    }

    /// Cached report for `email`, computing it if absent or stale.
    pub fn get_or_build(&mut self, email: &EmailMessage) -> &AssistantReport {
        let stale = self
            .entries
            .get(&email.id)
            .is_none_or(|(cached, _)| cached != email);

        if stale {
            debug!(id = %email.id, "Computing report");
            let report = self.assistant.report(email, self.today);
            self.entries.insert(email.id.clone(), (email.clone(), report));
        }

        &self.entries[&email.id].1
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop the cached report for `id`, if any.
    pub fn invalidate(&mut self, id: &str) -> bool {
        self.entries.remove(id).is_some()
    }
}
