//! Mail Assist — email classification and reply drafting.

pub mod config;
pub mod dataset;
pub mod draft;
pub mod error;
pub mod pipeline;

pub use pipeline::{AssistantReport, EmailMessage, build_assistant_report};
