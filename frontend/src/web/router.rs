//! Router service
//!
//! Wraps the History API; every `window.history` call lives in this module.
//! Each navigation goes through the core guard: request -> check -> redirect
//! or load.

use hrdesk::{AppRoute, GuardOutcome};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use crate::auth::AuthContext;

/// Current path including the query string.
fn current_path() -> String {
    web_sys::window()
        .map(|w| {
            let location = w.location();
            let path = location.pathname().unwrap_or_else(|_| "/".to_string());
            let search = location.search().unwrap_or_default();
            format!("{path}{search}")
        })
        .unwrap_or_else(|| "/".to_string())
}

/// Current query string, with its leading `?`.
pub fn current_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

fn log(message: &str) {
    web_sys::console::log_1(&format!("[Router] {message}").into());
}

#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    auth: AuthContext,
}

impl RouterService {
    fn new(auth: AuthContext) -> Self {
        let path = current_path();
        let outcome = auth.client().guard().initial_route(&path);
        if let GuardOutcome::Redirect { to, reason } = &outcome {
            log(&format!("Entry {path} redirected to {to} ({reason:?})"));
            replace_history_state(to);
        }
        let (current_route, set_route) = signal(AppRoute::from_path(&outcome.target()));

        Self {
            current_route,
            set_route,
            auth,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// Guarded navigation with a new history entry.
    pub fn navigate(&self, path: &str) {
        self.navigate_to(path, true);
    }

    /// Guarded navigation replacing the current history entry.
    pub fn replace(&self, path: &str) {
        self.navigate_to(path, false);
    }

    fn navigate_to(&self, path: &str, use_push: bool) {
        let outcome = self.auth.client().guard().check(path);
        let target = match &outcome {
            GuardOutcome::Allow(_) => path.to_string(),
            GuardOutcome::Redirect { to, reason } => {
                log(&format!("{path} denied ({reason:?}), going to {to}"));
                to.clone()
            }
        };

        if use_push {
            push_history_state(&target);
        } else {
            replace_history_state(&target);
        }
        self.set_route.set(AppRoute::from_path(&target));
    }

    /// Back/forward buttons go through the guard too.
    fn init_popstate_listener(&self) {
        let router = *self;
        let closure = Closure::<dyn Fn()>::new(move || {
            let path = current_path();
            match router.auth.client().guard().check(&path) {
                GuardOutcome::Allow(route) => router.set_route.set(route),
                GuardOutcome::Redirect { to, .. } => {
                    replace_history_state(&to);
                    router.set_route.set(AppRoute::from_path(&to));
                }
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Listener lives as long as the page.
        closure.forget();
    }

    /// Redirects requested through the navigator (401 teardown, logout).
    fn setup_redirect_listener(&self) {
        let router = *self;
        let redirects = self.auth.redirects();

        Effect::new(move |_| {
            if let Some(to) = redirects.get() {
                redirects.set(None);
                router.auth.refresh();
                router.replace(&to);
            }
        });
    }

    /// Re-run the guard on the current page whenever auth state flips.
    fn setup_auth_redirect(&self) {
        let router = *self;
        let is_authenticated = self.auth.is_authenticated_signal();

        Effect::new(move |prev: Option<bool>| {
            let is_auth = is_authenticated.get();
            if prev.is_some_and(|was| was != is_auth) {
                log(&format!("Auth state changed (logged in: {is_auth})"));
                router.replace(&current_path());
            }
            is_auth
        });
    }
}

fn provide_router(auth: AuthContext) -> RouterService {
    let router = RouterService::new(auth);

    router.init_popstate_listener();
    router.setup_redirect_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// Components
// ============================================================================

/// Provides the router context; place at the app root.
#[component]
pub fn Router(auth: AuthContext, children: Children) -> impl IntoView {
    provide_router(auth);

    children()
}

/// Renders the view of the current route.
#[component]
pub fn RouterOutlet(matcher: fn(AppRoute) -> AnyView) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// In-app link that navigates without a page load.
#[component]
pub fn Link(
    #[prop(into)] to: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let target = to.clone();
    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate(&target);
    };

    view! {
        <a href=to class=class on:click=on_click>
            {children()}
        </a>
    }
}
