//! HR Desk browser app
//!
//! Thin Leptos shell over the `hrdesk` core:
//! - `web`: fetch, `localStorage` and History API bindings
//! - `auth`: the app-wide client and its session signals
//! - `components`: pages

mod auth;
mod components {
    pub mod admin_attendance;
    pub mod attendance;
    pub mod common;
    pub mod employees;
    pub mod files;
    pub mod home;
    pub mod leave;
    pub mod login;
    pub mod positions;
    pub mod register;
}

use hrdesk::AppRoute;
use leptos::prelude::*;

use crate::auth::AuthContext;
use crate::components::admin_attendance::{AdminAttendancePage, TimeTrackingPage};
use crate::components::attendance::{AttendancePage, CheckInOutPage};
use crate::components::common::NotFoundPage;
use crate::components::employees::{EmployeeDetailPage, EmployeeFormPage, EmployeesPage, ProfilePage};
use crate::components::files::FilesPage;
use crate::components::home::HomePage;
use crate::components::leave::{AdminLeavePage, LeavePage};
use crate::components::login::LoginPage;
use crate::components::positions::{PositionDetailPage, PositionFormPage, PositionsPage};
use crate::components::register::RegisterPage;

// Browser API bindings, used directly instead of gloo-* to keep the wasm small.
pub(crate) mod web {
    pub mod http;
    pub mod router;
    mod storage;

    pub use http::FetchHttpClient;
    pub use storage::BrowserStorage;
}

use web::router::{Router, RouterOutlet};

fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage /> }.into_any(),
        AppRoute::Employees => view! { <EmployeesPage /> }.into_any(),
        AppRoute::AddEmployee => view! { <EmployeeFormPage id=None /> }.into_any(),
        AppRoute::EmployeeDetail(id) => view! { <EmployeeDetailPage id=id /> }.into_any(),
        AppRoute::EditEmployee(id) => view! { <EmployeeFormPage id=Some(id) /> }.into_any(),
        AppRoute::Positions => view! { <PositionsPage /> }.into_any(),
        AppRoute::AddPosition => view! { <PositionFormPage /> }.into_any(),
        AppRoute::PositionDetail(id) => view! { <PositionDetailPage id=id /> }.into_any(),
        AppRoute::AdminAttendance => view! { <AdminAttendancePage /> }.into_any(),
        AppRoute::AdminLeave => view! { <AdminLeavePage /> }.into_any(),
        AppRoute::TimeTracking => view! { <TimeTrackingPage /> }.into_any(),
        AppRoute::Files => view! { <FilesPage /> }.into_any(),
        AppRoute::Attendance => view! { <AttendancePage /> }.into_any(),
        AppRoute::CheckInOut => view! { <CheckInOutPage /> }.into_any(),
        AppRoute::Leave => view! { <LeavePage /> }.into_any(),
        AppRoute::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Session is hydrated from localStorage before the router runs its entry check.
    let auth = AuthContext::new();
    provide_context(auth);

    view! {
        <Router auth=auth>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
