//! Layout pieces shared by every page.

use hrdesk::{AppRoute, Role};
use leptos::prelude::*;

use crate::auth::use_auth;
use crate::web::router::Link;

/// Toast message: text and whether it is an error.
pub type Notification = RwSignal<Option<(String, bool)>>;

pub fn notify_ok(notice: Notification, text: impl Into<String>) {
    notice.set(Some((text.into(), false)));
}

pub fn notify_err(notice: Notification, text: impl Into<String>) {
    notice.set(Some((text.into(), true)));
}

/// Toast in the top corner, cleared after three seconds.
#[component]
pub fn Toast(notice: Notification) -> impl IntoView {
    Effect::new(move |_| {
        if notice.get().is_some() {
            set_timeout(move || notice.set(None), std::time::Duration::from_secs(3));
        }
    });

    view! {
        <Show when=move || notice.get().is_some()>
            <div class="toast toast-top toast-end z-50">
                <div class=move || {
                    if notice.get().is_some_and(|(_, is_err)| is_err) {
                        "alert alert-error shadow-lg"
                    } else {
                        "alert alert-success shadow-lg"
                    }
                }>
                    <span>{move || notice.get().map(|(text, _)| text).unwrap_or_default()}</span>
                </div>
            </div>
        </Show>
    }
}

fn nav_links(role: Option<Role>) -> Vec<(&'static str, AppRoute)> {
    let mut links = vec![("Home", AppRoute::Home)];
    match role {
        Some(Role::Admin) => links.extend([
            ("Employees", AppRoute::Employees),
            ("Positions", AppRoute::Positions),
            ("Attendance", AppRoute::AdminAttendance),
            ("Time tracking", AppRoute::TimeTracking),
            ("Leave", AppRoute::AdminLeave),
            ("Files", AppRoute::Files),
        ]),
        Some(Role::Employee) => links.extend([
            ("Check in/out", AppRoute::CheckInOut),
            ("Attendance", AppRoute::Attendance),
            ("Leave", AppRoute::Leave),
        ]),
        None => {}
    }
    links.push(("Profile", AppRoute::Profile));
    links
}

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = use_auth();

    view! {
        <div class="navbar bg-base-100 rounded-box shadow-xl">
            <div class="flex-1 gap-2 flex-wrap">
                <span class="btn btn-ghost text-xl">"HR Desk"</span>
                {move || {
                    nav_links(auth.role())
                        .into_iter()
                        .map(|(label, route)| {
                            view! {
                                <Link to=route.to_path() class="btn btn-ghost btn-sm">
                                    {label}
                                </Link>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <div class="flex-none gap-2">
                <span class="badge badge-neutral hidden md:inline-flex">
                    {move || auth.user_name()}
                    " · "
                    {move || auth.role().map(|r| r.as_str()).unwrap_or("?")}
                </span>
                <button on:click=move |_| auth.logout() class="btn btn-outline btn-error btn-sm">
                    "Logout"
                </button>
            </div>
        </div>
    }
}

/// Nav bar, toast and a content column.
#[component]
pub fn Page(#[prop(into)] title: String, notice: Notification, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-6">
                <Toast notice=notice />
                <NavBar />
                <h1 class="text-2xl font-bold">{title}</h1>
                {children()}
            </div>
        </div>
    }
}

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="flex justify-center py-8">
            <span class="loading loading-spinner loading-lg text-primary"></span>
        </div>
    }
}

#[component]
pub fn EmptyRow(colspan: u32, #[prop(into)] text: String) -> impl IntoView {
    view! {
        <tr>
            <td colspan=colspan class="text-center py-8 text-base-content/50">{text}</td>
        </tr>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="text-center space-y-4">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="text-xl">"Page not found"</p>
                <Link to=AppRoute::Home.to_path() class="btn btn-primary">"Back home"</Link>
            </div>
        </div>
    }
}
