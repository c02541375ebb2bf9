//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] owns the authentication state (bearer token plus
//! cached [`User`] snapshot), restores it from persisted storage on mount,
//! and mirrors every change back. Views obtain a copyable [`SessionHandle`]
//! through [`use_session`] and drive login, signup, logout, and profile
//! refresh through it.

use api::ApiClient;
use dioxus::prelude::*;
use store::{SessionVault, User};

use crate::storage::make_storage;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
    /// True until the persisted session has been restored.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            token: None,
            user: None,
            loading: true,
        }
    }
}

impl SessionState {
    /// A present token counts as authenticated even while the user snapshot
    /// is still being fetched.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Get the session handle provided by [`SessionProvider`].
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
}

/// Copyable handle over the shared session state.
#[derive(Clone, Copy)]
pub struct SessionHandle {
    state: Signal<SessionState>,
}

impl SessionHandle {
    /// Reactive read of the current state; subscribes the calling scope.
    pub fn get(&self) -> SessionState {
        (self.state)()
    }

    /// Current token without subscribing.
    pub fn token(&self) -> Option<String> {
        self.state.peek().token.clone()
    }

    /// Log in and establish the session.
    ///
    /// The token is persisted and the state marked authenticated before
    /// the profile fetch runs. Failures are reported as `false`, never
    /// raised.
    pub async fn login(&mut self, email: &str, password: &str) -> bool {
        let client = ApiClient::new();
        let token = match client.login(email, password).await {
            Ok(response) => response.access_token,
            Err(err) => {
                tracing::warn!("login failed: {err}");
                return false;
            }
        };

        let vault = SessionVault::new(make_storage());
        vault.save_token(&token).await;
        self.state.write().token = Some(token.clone());

        match client.current_user(&token).await {
            Ok(user) => {
                vault.save_user(Some(&user)).await;
                self.state.write().user = Some(user);
            }
            // The snapshot is fetched again on the next restore or refresh.
            Err(err) => tracing::warn!("profile fetch after login failed: {err}"),
        }
        true
    }

    /// Create an account. Does not log the new user in.
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> bool {
        match ApiClient::new().signup(name, email, password).await {
            Ok(_) => true,
            Err(err) => {
                tracing::warn!("signup failed: {err}");
                false
            }
        }
    }

    /// Drop the session from state and persisted storage. Idempotent.
    pub async fn logout(&mut self) {
        SessionVault::new(make_storage()).clear().await;
        let mut state = self.state.write();
        state.token = None;
        state.user = None;
        state.loading = false;
    }

    /// Re-fetch and cache the profile; no-op when unauthenticated.
    ///
    /// Used after server-side changes to the user, e.g. editing the
    /// monthly limit.
    pub async fn refresh_user(&mut self) {
        let Some(token) = self.token() else {
            return;
        };
        match ApiClient::new().current_user(&token).await {
            Ok(user) => {
                SessionVault::new(make_storage()).save_user(Some(&user)).await;
                self.state.write().user = Some(user);
            }
            Err(err) => tracing::warn!("failed to refresh user: {err}"),
        }
    }

    /// Restore the persisted session on startup.
    ///
    /// A restored token without a user snapshot triggers a profile fetch;
    /// if the backend rejects the token the session is dropped.
    async fn restore(&mut self) {
        let vault = SessionVault::new(make_storage());
        let session = vault.load().await;
        {
            let mut state = self.state.write();
            state.token = session.token.clone();
            state.user = session.user.clone();
        }

        if let (Some(token), None) = (&session.token, &session.user) {
            match ApiClient::new().current_user(token).await {
                Ok(user) => {
                    vault.save_user(Some(&user)).await;
                    self.state.write().user = Some(user);
                }
                Err(err) => {
                    tracing::warn!("session restore failed, logging out: {err}");
                    vault.clear().await;
                    let mut state = self.state.write();
                    state.token = None;
                    state.user = None;
                }
            }
        }
        self.state.write().loading = false;
    }
}

/// Provider component that manages the session.
/// Wrap the app with this component to enable authentication.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let state = use_signal(SessionState::default);
    let handle = SessionHandle { state };
    use_context_provider(|| handle);

    // Restore the persisted session once on mount.
    let _ = use_resource(move || async move {
        let mut handle = handle;
        handle.restore().await;
    });

    rsx! {
        {children}
    }
}
