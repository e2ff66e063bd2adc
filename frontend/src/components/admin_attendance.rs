use chrono::{Datelike, Local, NaiveDate};
use hrdesk::services::RosterEntry;
use hrdesk::shared::date::{format_date, parse_date};
use hrdesk::shared::{Attendance, AttendanceStats, DateRange, Employee};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::use_auth;
use crate::components::attendance::{AttendanceTable, StatsCards};
use crate::components::common::{EmptyRow, Notification, Page, Spinner, notify_err};

/// One employee's month: statistics and daily records.
#[component]
pub fn AdminAttendancePage() -> impl IntoView {
    let auth = use_auth();
    let notice: Notification = RwSignal::new(None);

    let (employees, set_employees) = signal(Vec::<Employee>::new());
    let selected = RwSignal::new(Option::<u32>::None);
    // Any day of the month on display.
    let month = RwSignal::new(Local::now().date_naive());
    let (records, set_records) = signal(Vec::<Attendance>::new());
    let (stats, set_stats) = signal(Option::<AttendanceStats>::None);

    let client = auth.client();
    spawn_local(async move {
        match client.employees().list().await {
            Ok(list) => set_employees.set(list),
            Err(e) => notify_err(notice, e.user_message()),
        }
    });

    Effect::new(move |_| {
        let (Some(employee_id), day) = (selected.get(), month.get()) else {
            return;
        };
        let client = auth.client();
        spawn_local(async move {
            let service = client.attendance();
            match service
                .employee_attendance(employee_id, DateRange::month_of(day))
                .await
            {
                Ok(list) => set_records.set(list),
                Err(e) => notify_err(notice, e.user_message()),
            }
            match service.employee_stats(employee_id, day.year(), day.month()).await {
                Ok(s) => set_stats.set(Some(s)),
                Err(e) => {
                    set_stats.set(None);
                    notify_err(notice, e.user_message());
                }
            }
        });
    });

    view! {
        <Page title="Attendance" notice=notice>
            <div class="flex flex-wrap gap-2">
                <select
                    class="select select-bordered select-sm"
                    on:change=move |ev| selected.set(event_target_value(&ev).parse::<u32>().ok().filter(|id| *id != 0))
                >
                    <option value="0">"Select an employee"</option>
                    {move || {
                        employees
                            .get()
                            .into_iter()
                            .filter_map(|e| e.id.map(|id| (id, e.name)))
                            .map(|(id, name)| view! { <option value=id.to_string()>{name}</option> })
                            .collect_view()
                    }}
                </select>
                <input
                    type="month"
                    class="input input-bordered input-sm"
                    prop:value=move || month.get().format("%Y-%m").to_string()
                    on:change=move |ev| {
                        if let Some(day) = parse_date(&format!("{}-01", event_target_value(&ev))) {
                            month.set(day);
                        }
                    }
                />
            </div>
            <Show
                when=move || selected.get().is_some()
                fallback=|| view! { <p class="text-base-content/50">"Pick an employee to see their month."</p> }
            >
                {move || stats.get().map(|s| view! { <StatsCards stats=s /> })}
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <AttendanceTable records=records />
                    </div>
                </div>
            </Show>
        </Page>
    }
}

/// Who is in today, one row per employee.
#[component]
pub fn TimeTrackingPage() -> impl IntoView {
    let auth = use_auth();
    let notice: Notification = RwSignal::new(None);

    let day = RwSignal::new(Local::now().date_naive());
    let (roster, set_roster) = signal(Option::<Vec<RosterEntry>>::None);

    Effect::new(move |_| {
        let day: NaiveDate = day.get();
        set_roster.set(None);
        let client = auth.client();
        spawn_local(async move {
            match client.overview().daily_roster(day).await {
                Ok(list) => set_roster.set(Some(list)),
                Err(e) => {
                    set_roster.set(Some(Vec::new()));
                    notify_err(notice, e.user_message());
                }
            }
        });
    });

    let present = move || {
        roster
            .get()
            .map(|list| list.iter().filter(|r| r.is_present()).count())
            .unwrap_or(0)
    };

    view! {
        <Page title="Time tracking" notice=notice>
            <div class="flex items-center gap-4">
                <input
                    type="date"
                    class="input input-bordered input-sm"
                    prop:value=move || format_date(day.get())
                    on:change=move |ev| {
                        if let Some(d) = parse_date(&event_target_value(&ev)) {
                            day.set(d);
                        }
                    }
                />
                <span class="badge badge-success">{move || format!("{} present", present())}</span>
            </div>
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body overflow-x-auto">
                    {move || match roster.get() {
                        None => view! { <Spinner /> }.into_any(),
                        Some(list) => view! {
                            <table class="table table-zebra">
                                <thead>
                                    <tr>
                                        <th>"Employee"</th>
                                        <th>"Clock in"</th>
                                        <th>"Clock out"</th>
                                        <th>"Mode"</th>
                                        <th>"Report"</th>
                                        <th>"Status"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {if list.is_empty() {
                                        view! { <EmptyRow colspan=6 text="No employees" /> }.into_any()
                                    } else {
                                        list.into_iter().map(roster_row).collect_view().into_any()
                                    }}
                                </tbody>
                            </table>
                        }.into_any(),
                    }}
                </div>
            </div>
        </Page>
    }
}

fn roster_row(entry: RosterEntry) -> impl IntoView {
    let badge = if entry.is_present() { "badge badge-success" } else { "badge badge-ghost" };
    let name = entry.employee.name;
    match entry.record {
        Some(r) => view! {
            <tr>
                <td>{name}</td>
                <td>{r.clock_in.unwrap_or_else(|| "-".into())}</td>
                <td>{r.clock_out.unwrap_or_else(|| "-".into())}</td>
                <td>{r.work_mode}</td>
                <td>{if r.daily_report_submitted { "Submitted" } else { "-" }}</td>
                <td>
                    <span class=badge>{r.status}</span>
                </td>
            </tr>
        }
        .into_any(),
        None => view! {
            <tr>
                <td>{name}</td>
                <td>"-"</td>
                <td>"-"</td>
                <td>"-"</td>
                <td>"-"</td>
                <td><span class="badge badge-ghost">"No record"</span></td>
            </tr>
        }
        .into_any(),
    }
}
