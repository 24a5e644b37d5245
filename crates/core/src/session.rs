//! Session gate protecting the admin surface.
//!
//! Three states, not a boolean: while the session check is in flight the gate
//! shows a neutral loading view instead of redirecting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::events::SessionEvent;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const ADMIN_PATH: &str = "/admin";

/// Session issued by the identity provider. Opaque to this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub user_email: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Unknown,
    Authorized,
    Unauthorized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateView {
    /// "Checking access..."
    Loading,
    Protected,
    Redirect(&'static str),
}

#[derive(Debug, Clone)]
pub struct SessionGate {
    state: GateState,
    history: Vec<GateState>,
}

impl SessionGate {
    pub fn new() -> Self {
        Self {
            state: GateState::Unknown,
            history: vec![GateState::Unknown],
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    /// Every distinct state the gate has been in, oldest first.
    pub fn history(&self) -> &[GateState] {
        &self.history
    }

    /// Settle the initial session check. Ignored once settled.
    pub fn resolve(&mut self, has_session: bool) {
        if self.state != GateState::Unknown {
            return;
        }
        self.transition(if has_session {
            GateState::Authorized
        } else {
            GateState::Unauthorized
        });
    }

    /// Apply a provider notification.
    ///
    /// Notifications arriving before the initial check settles are dropped;
    /// the check result is authoritative for leaving `Unknown`.
    pub fn apply(&mut self, event: &SessionEvent) {
        if self.state == GateState::Unknown {
            return;
        }
        self.transition(if event.has_session() {
            GateState::Authorized
        } else {
            GateState::Unauthorized
        });
    }

    pub fn view(&self) -> GateView {
        match self.state {
            GateState::Unknown => GateView::Loading,
            GateState::Authorized => GateView::Protected,
            GateState::Unauthorized => GateView::Redirect(LOGIN_PATH),
        }
    }

    fn transition(&mut self, next: GateState) {
        if next != self.state {
            tracing::debug!(from = ?self.state, to = ?next, "session gate transition");
            self.state = next;
            self.history.push(next);
        }
    }
}

impl Default for SessionGate {
    fn default() -> Self {
        Self::new()
    }
}
