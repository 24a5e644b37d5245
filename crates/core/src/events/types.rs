use serde::{Deserialize, Serialize};

/// Session changes pushed by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SessionEvent {
    #[serde(rename_all = "camelCase")]
    SignedIn { user_email: String },
    SignedOut,
    TokenRefreshed,
}

impl SessionEvent {
    /// Whether a session exists after this event.
    pub fn has_session(&self) -> bool {
        !matches!(self, SessionEvent::SignedOut)
    }
}
