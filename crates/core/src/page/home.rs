use serde_json::Value;

use crate::document::{render_document, ContentDocument};
use crate::lead::LeadSubmission;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadField {
    Name,
    Company,
    Email,
    Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

impl FormStatus {
    /// Text on the submit button.
    pub fn label(self) -> &'static str {
        match self {
            FormStatus::Idle => "Send Message",
            FormStatus::Sending => "Sending...",
            FormStatus::Sent => "Message Sent!",
            FormStatus::Failed => "Error sending message.",
        }
    }
}

#[derive(Debug, Clone)]
pub enum HomeEvent {
    ContentFetched(Result<Value, String>),
    FieldEdited(LeadField, String),
    SubmitStarted,
    SubmitResolved(Result<(), String>),
}

/// Snapshot of the public landing page.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeState {
    pub content: ContentDocument,
    pub form: LeadSubmission,
    pub form_status: FormStatus,
}

impl HomeState {
    /// Initial snapshot: default content until the fetch resolves.
    pub fn new() -> Self {
        Self {
            content: ContentDocument::builtin(),
            form: LeadSubmission::default(),
            form_status: FormStatus::Idle,
        }
    }

    pub fn apply(mut self, event: HomeEvent) -> Self {
        match event {
            HomeEvent::ContentFetched(fetched) => {
                self.content = render_document(fetched, &ContentDocument::builtin());
            }
            HomeEvent::FieldEdited(field, value) => {
                let slot = match field {
                    LeadField::Name => &mut self.form.name,
                    LeadField::Company => &mut self.form.company,
                    LeadField::Email => &mut self.form.email,
                    LeadField::Message => &mut self.form.message,
                };
                *slot = value;
            }
            HomeEvent::SubmitStarted => self.form_status = FormStatus::Sending,
            HomeEvent::SubmitResolved(Ok(())) => {
                self.form_status = FormStatus::Sent;
                self.form = LeadSubmission::default();
            }
            HomeEvent::SubmitResolved(Err(err)) => {
                tracing::warn!(error = %err, "lead submission failed");
                self.form_status = FormStatus::Failed;
            }
        }
        self
    }
}

impl Default for HomeState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filled() -> HomeState {
        [
            (LeadField::Name, "Ada"),
            (LeadField::Company, "Acme"),
            (LeadField::Email, "ada@acme.io"),
            (LeadField::Message, "We need a mobile app."),
        ]
        .into_iter()
        .fold(HomeState::new(), |state, (field, value)| {
            state.apply(HomeEvent::FieldEdited(field, value.to_string()))
        })
    }

    #[test]
    fn successful_submit_clears_every_field() {
        let state = filled()
            .apply(HomeEvent::SubmitStarted)
            .apply(HomeEvent::SubmitResolved(Ok(())));

        assert_eq!(state.form, LeadSubmission::default());
        assert_eq!(state.form_status.label(), "Message Sent!");
    }

    #[test]
    fn failed_submit_keeps_entered_values() {
        let before = filled();
        let state = before
            .clone()
            .apply(HomeEvent::SubmitStarted)
            .apply(HomeEvent::SubmitResolved(Err("503".to_string())));

        assert_eq!(state.form, before.form);
        assert_eq!(state.form_status, FormStatus::Failed);
    }

    #[test]
    fn sending_label_while_in_flight() {
        let state = filled().apply(HomeEvent::SubmitStarted);
        assert_eq!(state.form_status.label(), "Sending...");
    }

    #[test]
    fn fetched_content_is_merged() {
        let state = HomeState::new().apply(HomeEvent::ContentFetched(Ok(json!({
            "hero": { "badge": "X" },
            "services": [],
        }))));
        assert_eq!(state.content.hero.badge, "X");
        assert!(state.content.services.is_empty());
        assert_eq!(state.content.about, ContentDocument::builtin().about);
    }

    #[test]
    fn failed_fetch_keeps_defaults() {
        let state =
            HomeState::new().apply(HomeEvent::ContentFetched(Err("offline".to_string())));
        assert_eq!(state.content, ContentDocument::builtin());
    }
}
