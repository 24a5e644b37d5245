//! Async drivers that run store and provider calls and feed the results
//! into the page state containers.

use std::time::Duration;

use makebetter_core::events::Subscription;
use makebetter_core::page::{
    AdminEvent, AdminState, HomeEvent, HomeState, LoginEvent, LoginState,
};
use makebetter_core::session::{GateState, GateView, SessionGate, ADMIN_PATH, LOGIN_PATH};

use crate::auth::IdentityProvider;
use crate::store::ContentStore;

/// How long "Saved Successfully!" stays up.
pub const SAVED_STATUS_TTL: Duration = Duration::from_secs(2);

/// Load the landing page. Never fails: an unreachable backend renders defaults.
pub async fn load_home(store: &dyn ContentStore) -> HomeState {
    let fetched = store.fetch_document().await.map_err(|e| e.to_string());
    HomeState::new().apply(HomeEvent::ContentFetched(fetched))
}

/// Submit the contact form once. On failure the visitor resubmits by hand.
pub async fn submit_lead(store: &dyn ContentStore, state: HomeState) -> HomeState {
    let state = state.apply(HomeEvent::SubmitStarted);
    let result = store
        .submit_lead(&state.form)
        .await
        .map_err(|e| e.to_string());
    state.apply(HomeEvent::SubmitResolved(result))
}

/// Load the admin panel. Content and leads are fetched concurrently and
/// either may fail without affecting the other.
pub async fn load_admin(store: &dyn ContentStore) -> AdminState {
    let (content, leads) = tokio::join!(store.fetch_document(), store.fetch_leads());
    AdminState::new()
        .apply(AdminEvent::ContentFetched(content.map_err(|e| e.to_string())))
        .apply(AdminEvent::LeadsFetched(leads.map_err(|e| e.to_string())))
}

/// Re-fetch only the document (the editor's refresh button).
pub async fn refresh_content(store: &dyn ContentStore, state: AdminState) -> AdminState {
    let fetched = store.fetch_document().await.map_err(|e| e.to_string());
    state.apply(AdminEvent::ContentFetched(fetched))
}

/// Save the editor text. Invalid JSON is rejected here without any request.
pub async fn save_content(store: &dyn ContentStore, state: AdminState) -> AdminState {
    let (state, payload) = state.begin_save();
    let payload = match payload {
        Ok(payload) => payload,
        Err(err) => {
            tracing::info!(error = %err, "editor text rejected, nothing sent");
            return state;
        }
    };

    let result = store
        .save_document(&payload)
        .await
        .map_err(|e| e.to_string());
    state.apply(AdminEvent::SaveResolved(result))
}

/// Clear the success status after [`SAVED_STATUS_TTL`].
pub async fn expire_saved_status(state: AdminState) -> AdminState {
    tokio::time::sleep(SAVED_STATUS_TTL).await;
    state.apply(AdminEvent::StatusCleared)
}

/// A session gate mounted over the admin surface.
///
/// Holds its provider subscription until [`MountedGate::teardown`] or drop.
#[derive(Debug)]
pub struct MountedGate {
    gate: SessionGate,
    subscription: Subscription,
}

impl MountedGate {
    pub fn state(&self) -> GateState {
        self.gate.state()
    }

    pub fn view(&self) -> GateView {
        self.gate.view()
    }

    pub fn history(&self) -> &[GateState] {
        self.gate.history()
    }

    /// Wait for the next provider notification and apply it.
    /// Returns `false` once the provider's bus is gone.
    pub async fn next_event(&mut self) -> bool {
        match self.subscription.recv().await {
            Some(event) => {
                self.gate.apply(&event);
                true
            }
            None => false,
        }
    }

    /// Apply every notification already delivered, without waiting.
    pub fn drain_events(&mut self) {
        while let Some(event) = self.subscription.try_recv() {
            self.gate.apply(&event);
        }
    }

    /// Unmount: end the subscription and hand back the final gate state.
    pub fn teardown(self) -> SessionGate {
        self.subscription.unsubscribe();
        self.gate
    }
}

/// Mount a gate: subscribe first so no change is missed, then check the session.
pub async fn mount_gate(provider: &dyn IdentityProvider) -> MountedGate {
    let subscription = provider.events().subscribe();
    let mut gate = SessionGate::new();
    let has_session = provider.current_session().await.is_some();
    gate.resolve(has_session);
    MountedGate { gate, subscription }
}

/// Run the login form. Returns the route to navigate to on success.
pub async fn log_in(
    provider: &dyn IdentityProvider,
    state: LoginState,
) -> (LoginState, Option<&'static str>) {
    let state = state.apply(LoginEvent::SubmitStarted);
    let result = provider
        .sign_in_with_password(&state.email, &state.password)
        .await;
    match result {
        Ok(_) => (state.apply(LoginEvent::SubmitResolved(Ok(()))), Some(ADMIN_PATH)),
        Err(err) => (
            state.apply(LoginEvent::SubmitResolved(Err(err.to_string()))),
            None,
        ),
    }
}

/// Sign out and return the login route. The local session is gone even if
/// the provider call fails.
pub async fn log_out(provider: &dyn IdentityProvider) -> &'static str {
    if let Err(err) = provider.sign_out().await {
        tracing::warn!(error = %err, "sign-out request failed");
    }
    LOGIN_PATH
}
