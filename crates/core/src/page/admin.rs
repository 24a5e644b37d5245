use serde_json::Value;

use crate::document::{parse_editor_text, pretty_print, ValidationError};
use crate::lead::Lead;

pub const CONTENT_LOAD_ALERT: &str = "Failed to load content";
pub const LEADS_LOAD_ALERT: &str = "Failed to load leads";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Content,
    Leads,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveStatus {
    #[default]
    Idle,
    Saving,
    Saved,
    InvalidJson,
    SaveFailed,
}

impl SaveStatus {
    pub fn label(self) -> &'static str {
        match self {
            SaveStatus::Idle => "",
            SaveStatus::Saving => "Saving...",
            SaveStatus::Saved => "Saved Successfully!",
            SaveStatus::InvalidJson => "Error: Invalid JSON format",
            SaveStatus::SaveFailed => "Error: Could not save changes",
        }
    }

    pub fn is_error(self) -> bool {
        matches!(self, SaveStatus::InvalidJson | SaveStatus::SaveFailed)
    }
}

#[derive(Debug, Clone)]
pub enum AdminEvent {
    ContentFetched(Result<Value, String>),
    LeadsFetched(Result<Vec<Lead>, String>),
    EditorChanged(String),
    TabSelected(AdminTab),
    SaveResolved(Result<(), String>),
    StatusCleared,
    AlertsDismissed,
}

/// Snapshot of the admin panel.
///
/// `document` is the last version known to be persisted: what was fetched or
/// what the last successful save sent. A rejected or failed save never
/// touches it.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminState {
    pub editor_text: String,
    pub document: Option<Value>,
    pub leads: Vec<Lead>,
    pub tab: AdminTab,
    pub status: SaveStatus,
    pub alerts: Vec<String>,
    pending: Option<Value>,
}

impl AdminState {
    pub fn new() -> Self {
        Self {
            editor_text: "{}".to_string(),
            document: None,
            leads: Vec::new(),
            tab: AdminTab::Content,
            status: SaveStatus::Idle,
            alerts: Vec::new(),
            pending: None,
        }
    }

    pub fn apply(mut self, event: AdminEvent) -> Self {
        match event {
            AdminEvent::ContentFetched(Ok(value)) => {
                self.editor_text = pretty_print(&value);
                self.document = Some(value);
            }
            AdminEvent::ContentFetched(Err(err)) => {
                tracing::warn!(error = %err, "admin content fetch failed");
                self.alerts.push(CONTENT_LOAD_ALERT.to_string());
            }
            AdminEvent::LeadsFetched(Ok(leads)) => self.leads = leads,
            AdminEvent::LeadsFetched(Err(err)) => {
                tracing::warn!(error = %err, "admin leads fetch failed");
                self.alerts.push(LEADS_LOAD_ALERT.to_string());
            }
            AdminEvent::EditorChanged(text) => self.editor_text = text,
            AdminEvent::TabSelected(tab) => self.tab = tab,
            AdminEvent::SaveResolved(Ok(())) => {
                self.status = SaveStatus::Saved;
                if let Some(saved) = self.pending.take() {
                    self.document = Some(saved);
                }
            }
            AdminEvent::SaveResolved(Err(err)) => {
                tracing::warn!(error = %err, "content save failed");
                self.status = SaveStatus::SaveFailed;
                self.pending = None;
            }
            AdminEvent::StatusCleared => self.status = SaveStatus::Idle,
            AdminEvent::AlertsDismissed => self.alerts.clear(),
        }
        self
    }

    /// Start a save. Returns the payload to send verbatim, or the parse error
    /// when the editor text is not JSON, in which case nothing must be sent.
    pub fn begin_save(mut self) -> (Self, Result<Value, ValidationError>) {
        match parse_editor_text(&self.editor_text) {
            Ok(payload) => {
                self.status = SaveStatus::Saving;
                self.pending = Some(payload.clone());
                (self, Ok(payload))
            }
            Err(err) => {
                self.status = SaveStatus::InvalidJson;
                (self, Err(err))
            }
        }
    }
}

impl Default for AdminState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn loaded() -> AdminState {
        AdminState::new().apply(AdminEvent::ContentFetched(Ok(json!({
            "contact_email": "deep@makebetter.tech",
        }))))
    }

    #[test]
    fn fetched_content_is_pretty_printed() {
        let state = loaded();
        assert_eq!(
            state.editor_text,
            "{\n    \"contact_email\": \"deep@makebetter.tech\"\n}"
        );
    }

    #[test]
    fn invalid_json_rejects_save_and_keeps_document() {
        let state = loaded().apply(AdminEvent::EditorChanged("{ broken".to_string()));
        let before = state.document.clone();

        let (state, payload) = state.begin_save();

        assert!(matches!(payload, Err(ValidationError::InvalidJson(_))));
        assert_eq!(state.status.label(), "Error: Invalid JSON format");
        assert!(state.status.is_error());
        assert_eq!(state.document, before);
        assert_eq!(state.editor_text, "{ broken");
    }

    #[test]
    fn incomplete_document_is_sent_as_typed() {
        let state = loaded().apply(AdminEvent::EditorChanged(r#"{"hero":{}}"#.to_string()));
        let (state, payload) = state.begin_save();

        assert_eq!(payload.unwrap(), json!({ "hero": {} }));
        assert_eq!(state.status, SaveStatus::Saving);

        let state = state.apply(AdminEvent::SaveResolved(Ok(())));
        assert_eq!(state.document, Some(json!({ "hero": {} })));
        assert_eq!(state.status.label(), "Saved Successfully!");

        let state = state.apply(AdminEvent::StatusCleared);
        assert_eq!(state.status, SaveStatus::Idle);
    }

    #[test]
    fn failed_save_keeps_last_persisted_document() {
        let state = loaded().apply(AdminEvent::EditorChanged("[]".to_string()));
        let (state, payload) = state.begin_save();
        assert!(payload.is_ok());

        let state = state.apply(AdminEvent::SaveResolved(Err("500".to_string())));
        assert_eq!(state.status, SaveStatus::SaveFailed);
        assert_eq!(
            state.document,
            Some(json!({ "contact_email": "deep@makebetter.tech" }))
        );
    }

    #[test]
    fn fetch_failures_are_independent_and_order_free() {
        let leads_first = AdminState::new()
            .apply(AdminEvent::LeadsFetched(Ok(Vec::new())))
            .apply(AdminEvent::ContentFetched(Err("timeout".to_string())));
        assert_eq!(leads_first.alerts, vec![CONTENT_LOAD_ALERT.to_string()]);

        let content_first = AdminState::new()
            .apply(AdminEvent::ContentFetched(Ok(json!({}))))
            .apply(AdminEvent::LeadsFetched(Err("timeout".to_string())));
        assert_eq!(content_first.alerts, vec![LEADS_LOAD_ALERT.to_string()]);
        assert_eq!(content_first.document, Some(json!({})));

        let cleared = content_first.apply(AdminEvent::AlertsDismissed);
        assert!(cleared.alerts.is_empty());
    }

    #[test]
    fn tabs_switch() {
        let state = AdminState::new().apply(AdminEvent::TabSelected(AdminTab::Leads));
        assert_eq!(state.tab, AdminTab::Leads);
    }
}
