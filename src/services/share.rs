//! Share payloads for a trip plan.

use crate::types::trip::TripPlan;

/// Title, text and link handed to the system share sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    pub fn for_plan(plan: &TripPlan, url: &str) -> Self {
        Self {
            title: format!("Trip to {}", plan.destination),
            text: format!("{}-day plan · budget {}", plan.day_count(), plan.budget_label()),
            url: url.to_string(),
        }
    }

    /// Clipboard fallback: title, text and link on separate lines.
    pub fn clipboard_text(&self) -> String {
        format!("{}\n{}\n{}", self.title, self.text, self.url)
    }
}
