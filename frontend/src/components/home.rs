use hrdesk::services::AdminOverview;
use hrdesk::shared::AttendanceAlert;
use hrdesk::AppRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::use_auth;
use crate::components::attendance::ClockPanel;
use crate::components::common::{Notification, Page, Spinner, notify_err};
use crate::web::router::Link;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let notice: Notification = RwSignal::new(None);

    view! {
        <Page title="Home" notice=notice>
            <p class="text-base-content/70">{move || format!("Welcome, {}", auth.user_name())}</p>
            {move || if auth.is_admin() {
                view! { <AdminHome notice=notice /> }.into_any()
            } else {
                view! { <EmployeeHome notice=notice /> }.into_any()
            }}
        </Page>
    }
}

#[component]
fn AdminHome(notice: Notification) -> impl IntoView {
    let auth = use_auth();
    let (overview, set_overview) = signal(Option::<AdminOverview>::None);

    let client = auth.client();
    spawn_local(async move {
        match client.overview().admin_overview().await {
            Ok(o) => set_overview.set(Some(o)),
            Err(e) => notify_err(notice, e.user_message()),
        }
    });

    view! {
        {move || match overview.get() {
            None => view! { <Spinner /> }.into_any(),
            Some(o) => view! {
                <div class="stats stats-vertical md:stats-horizontal shadow w-full">
                    <div class="stat">
                        <div class="stat-title">"Employees"</div>
                        <div class="stat-value">{o.employee_count()}</div>
                        <div class="stat-actions">
                            <Link to=AppRoute::Employees.to_path() class="btn btn-xs">"Manage"</Link>
                        </div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">"Pending leave requests"</div>
                        <div class="stat-value text-warning">{o.pending_count()}</div>
                        <div class="stat-actions">
                            <Link to=AppRoute::AdminLeave.to_path() class="btn btn-xs">"Review"</Link>
                        </div>
                    </div>
                </div>
            }.into_any(),
        }}
    }
}

#[component]
fn EmployeeHome(notice: Notification) -> impl IntoView {
    let auth = use_auth();
    let (alerts, set_alerts) = signal(Vec::<AttendanceAlert>::new());

    let client = auth.client();
    spawn_local(async move {
        match client.alerts().mine().await {
            Ok(list) => set_alerts.set(list),
            Err(e) => notify_err(notice, e.user_message()),
        }
    });

    let mark_read = move |alert_id: u32| {
        let client = auth.client();
        spawn_local(async move {
            match client.alerts().mark_read(alert_id).await {
                Ok(()) => set_alerts.update(|list| {
                    if let Some(a) = list.iter_mut().find(|a| a.alert_id == alert_id) {
                        a.is_read = true;
                    }
                }),
                Err(e) => notify_err(notice, e.user_message()),
            }
        });
    };

    view! {
        <div class="grid md:grid-cols-2 gap-6">
            <ClockPanel notice=notice />
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title">"Alerts"</h2>
                    {move || {
                        let unread: Vec<_> = alerts.get().into_iter().filter(|a| !a.is_read).collect();
                        if unread.is_empty() {
                            return view! { <p class="text-base-content/50">"No new alerts"</p> }.into_any();
                        }
                        unread
                            .into_iter()
                            .map(|a| {
                                let id = a.alert_id;
                                view! {
                                    <div role="alert" class="alert alert-warning">
                                        <div>
                                            <div class="font-bold">{a.alert_type}</div>
                                            <div class="text-sm">{a.message}</div>
                                            <div class="text-xs opacity-70">{a.alert_date}</div>
                                        </div>
                                        <button class="btn btn-xs" on:click=move |_| mark_read(id)>
                                            "Dismiss"
                                        </button>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </div>
            </div>
        </div>
    }
}
