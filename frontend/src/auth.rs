//! Auth context
//!
//! Owns the one `HrClient` of the app and mirrors its session into signals so
//! views re-render on login and logout. The session itself lives in
//! `localStorage`; the signals are only a snapshot, refreshed after every
//! operation that can change it.

use hrdesk::{ClientConfig, HrClient, Navigator, Role, Session};
use leptos::prelude::*;

use crate::web::{BrowserStorage, FetchHttpClient};

pub type AppClient = HrClient<FetchHttpClient, BrowserStorage, BrowserNavigator>;

/// Base URL baked in at build time, e.g. `HRDESK_API_URL=https://hr.example/api trunk build`.
fn client_config() -> ClientConfig {
    match option_env!("HRDESK_API_URL") {
        Some(url) if !url.trim().is_empty() => ClientConfig::new(url),
        _ => ClientConfig::default(),
    }
}

/// Hands redirects requested outside the router (401 teardown, logout) to
/// the router through a signal.
#[derive(Clone, Copy)]
pub struct BrowserNavigator {
    redirects: RwSignal<Option<String>>,
}

impl Navigator for BrowserNavigator {
    fn redirect(&self, path: &str) {
        web_sys::console::log_1(&format!("[Auth] Redirect requested: {path}").into());
        self.redirects.set(Some(path.to_string()));
    }
}

#[derive(Clone, Copy)]
pub struct AuthContext {
    client: StoredValue<AppClient, LocalStorage>,
    session: RwSignal<Option<Session>>,
    redirects: RwSignal<Option<String>>,
}

impl AuthContext {
    pub fn new() -> Self {
        let redirects = RwSignal::new(None);
        let client = HrClient::new(
            client_config(),
            FetchHttpClient::new(),
            BrowserStorage,
            BrowserNavigator { redirects },
        );
        client.session().hydrate();
        let session = RwSignal::new(client.session().session());

        Self {
            client: StoredValue::new_local(client),
            session,
            redirects,
        }
    }

    /// Cheap handle to the client; clones share everything.
    pub fn client(&self) -> AppClient {
        self.client.get_value()
    }

    /// Re-read the session snapshot from storage.
    pub fn refresh(&self) {
        let current = self.client.with_value(|c| c.session().session());
        if self.session.get_untracked() != current {
            self.session.set(current);
        }
    }

    pub fn session(&self) -> Option<Session> {
        self.session.get()
    }

    pub fn user_name(&self) -> String {
        self.session
            .with(|s| s.as_ref().map(|s| s.user_name.clone()))
            .unwrap_or_default()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.with(|s| s.as_ref().and_then(|s| s.role))
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }

    /// Injected into the router, keeping it independent of this module.
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let session = self.session;
        Signal::derive(move || session.with(Option::is_some))
    }

    pub fn redirects(&self) -> RwSignal<Option<String>> {
        self.redirects
    }

    /// Clears storage and asks the router to show the login page.
    pub fn logout(&self) {
        self.client.with_value(|c| c.logout());
        self.refresh();
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}
