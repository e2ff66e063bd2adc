//! Employee attendance: the clock panel, the check-in page and the history.

use chrono::{Datelike, Local};
use hrdesk::ApiResult;
use hrdesk::shared::{Attendance, AttendanceStats, DateRange, WorkMode};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::use_auth;
use crate::components::common::{EmptyRow, Notification, Page, Spinner, notify_err, notify_ok};

fn dash(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

fn status_badge(status: &str) -> &'static str {
    match status {
        "Present" => "badge badge-success",
        "Late" => "badge badge-warning",
        "Absent" => "badge badge-error",
        "OnLeave" | "Leave" => "badge badge-info",
        _ => "badge badge-ghost",
    }
}

#[derive(Clone, Copy)]
enum ClockAction {
    ClockIn,
    ClockOut,
    StartBreak,
    EndBreak,
}

impl ClockAction {
    fn done_message(self) -> &'static str {
        match self {
            ClockAction::ClockIn => "Clocked in",
            ClockAction::ClockOut => "Clocked out",
            ClockAction::StartBreak => "Break started",
            ClockAction::EndBreak => "Break ended",
        }
    }
}

/// Today's record with clock and break buttons plus the daily report.
#[component]
pub fn ClockPanel(notice: Notification) -> impl IntoView {
    let auth = use_auth();

    let (today, set_today) = signal(Option::<Attendance>::None);
    let (loading, set_loading) = signal(true);
    let (busy, set_busy) = signal(false);
    let work_mode = RwSignal::new(WorkMode::default());
    let report = RwSignal::new(String::new());

    let load = move || {
        set_loading.set(true);
        let client = auth.client();
        spawn_local(async move {
            match client.attendance().today(Local::now().date_naive()).await {
                Ok(record) => set_today.set(record),
                Err(e) => notify_err(notice, e.user_message()),
            }
            set_loading.set(false);
        });
    };
    load();

    let run = move |action: ClockAction| {
        if busy.get_untracked() {
            return;
        }
        set_busy.set(true);
        let client = auth.client();
        spawn_local(async move {
            let service = client.attendance();
            let result: ApiResult<Attendance> = match action {
                ClockAction::ClockIn => service.clock_in(work_mode.get_untracked()).await,
                ClockAction::ClockOut => service.clock_out().await,
                ClockAction::StartBreak => service.start_break().await,
                ClockAction::EndBreak => service.end_break().await,
            };
            match result {
                Ok(record) => {
                    set_today.set(Some(record));
                    notify_ok(notice, action.done_message());
                }
                Err(e) => notify_err(notice, e.user_message()),
            }
            set_busy.set(false);
        });
    };

    let submit_report = move |_| {
        if busy.get_untracked() {
            return;
        }
        set_busy.set(true);
        let client = auth.client();
        spawn_local(async move {
            match client
                .attendance()
                .submit_daily_report(&report.get_untracked())
                .await
            {
                Ok(record) => {
                    set_today.set(Some(record));
                    report.set(String::new());
                    notify_ok(notice, "Daily report submitted");
                }
                Err(e) => notify_err(notice, e.user_message()),
            }
            set_busy.set(false);
        });
    };

    let record = move || today.get();
    let clocked_in = move || record().is_some_and(|r| r.is_clocked_in());
    let can_clock_out = move || record().is_some_and(|r| r.can_clock_out());
    let can_start_break = move || record().is_some_and(|r| r.can_start_break());
    let on_break = move || record().is_some_and(|r| r.is_on_break());
    let report_done = move || record().is_some_and(|r| r.daily_report_submitted);

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body space-y-4">
                <h2 class="card-title">"Today"</h2>
                <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                    <div class="stats stats-vertical md:stats-horizontal shadow">
                        <div class="stat">
                            <div class="stat-title">"Clock in"</div>
                            <div class="stat-value text-lg">
                                {move || record().map(|r| dash(&r.clock_in)).unwrap_or_else(|| "-".into())}
                            </div>
                        </div>
                        <div class="stat">
                            <div class="stat-title">"Clock out"</div>
                            <div class="stat-value text-lg">
                                {move || record().map(|r| dash(&r.clock_out)).unwrap_or_else(|| "-".into())}
                            </div>
                        </div>
                        <div class="stat">
                            <div class="stat-title">"Status"</div>
                            <div class="stat-value text-lg">
                                {move || record().map(|r| r.status).unwrap_or_else(|| "Not clocked in".into())}
                            </div>
                        </div>
                    </div>

                    <Show when=move || !clocked_in()>
                        <div class="flex flex-wrap gap-2 items-center">
                            <select
                                class="select select-bordered select-sm"
                                on:change=move |ev| {
                                    if let Some(mode) = WorkMode::parse(&event_target_value(&ev)) {
                                        work_mode.set(mode);
                                    }
                                }
                            >
                                {WorkMode::ALL
                                    .into_iter()
                                    .map(|m| view! { <option value=m.as_str()>{m.as_str()}</option> })
                                    .collect_view()}
                            </select>
                            <button
                                class="btn btn-primary btn-sm"
                                disabled=move || busy.get()
                                on:click=move |_| run(ClockAction::ClockIn)
                            >
                                "Clock in"
                            </button>
                        </div>
                    </Show>

                    <div class="flex flex-wrap gap-2">
                        <Show when=can_start_break>
                            <button
                                class="btn btn-outline btn-sm"
                                disabled=move || busy.get()
                                on:click=move |_| run(ClockAction::StartBreak)
                            >
                                "Start break"
                            </button>
                        </Show>
                        <Show when=on_break>
                            <button
                                class="btn btn-outline btn-sm"
                                disabled=move || busy.get()
                                on:click=move |_| run(ClockAction::EndBreak)
                            >
                                "End break"
                            </button>
                        </Show>
                        <Show when=can_clock_out>
                            <button
                                class="btn btn-error btn-sm"
                                disabled=move || busy.get()
                                on:click=move |_| run(ClockAction::ClockOut)
                            >
                                "Clock out"
                            </button>
                        </Show>
                    </div>

                    <Show when=move || clocked_in() && !report_done()>
                        <div class="form-control gap-2">
                            <label class="label">
                                <span class="label-text">"Daily report"</span>
                            </label>
                            <textarea
                                class="textarea textarea-bordered"
                                rows="3"
                                prop:value=report
                                on:input=move |ev| report.set(event_target_value(&ev))
                            ></textarea>
                            <button
                                class="btn btn-secondary btn-sm self-start"
                                disabled=move || busy.get()
                                on:click=submit_report
                            >
                                "Submit report"
                            </button>
                        </div>
                    </Show>
                </Show>
            </div>
        </div>
    }
}

#[component]
pub fn CheckInOutPage() -> impl IntoView {
    let notice: Notification = RwSignal::new(None);

    view! {
        <Page title="Check in / out" notice=notice>
            <ClockPanel notice=notice />
        </Page>
    }
}

#[component]
pub fn StatsCards(stats: AttendanceStats) -> impl IntoView {
    view! {
        <div class="stats stats-vertical md:stats-horizontal shadow w-full">
            <div class="stat">
                <div class="stat-title">"Present"</div>
                <div class="stat-value text-success">{stats.present_days}</div>
                <div class="stat-desc">{format!("of {} days", stats.total_days)}</div>
            </div>
            <div class="stat">
                <div class="stat-title">"Late"</div>
                <div class="stat-value text-warning">{stats.late_days}</div>
            </div>
            <div class="stat">
                <div class="stat-title">"Absent"</div>
                <div class="stat-value text-error">{stats.absent_days}</div>
            </div>
            <div class="stat">
                <div class="stat-title">"Attendance"</div>
                <div class="stat-value">{format!("{:.1}%", stats.attendance_percentage)}</div>
                <div class="stat-desc">{format!("Reports {:.1}%", stats.report_submission_rate)}</div>
            </div>
        </div>
    }
}

#[component]
pub fn AttendanceTable(records: ReadSignal<Vec<Attendance>>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="table table-zebra">
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th>"Clock in"</th>
                        <th>"Clock out"</th>
                        <th>"Mode"</th>
                        <th>"Hours"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = records.get();
                        if rows.is_empty() {
                            return view! { <EmptyRow colspan=6 text="No attendance records" /> }.into_any();
                        }
                        rows.into_iter()
                            .map(|r| {
                                let badge = status_badge(&r.status);
                                view! {
                                    <tr>
                                        <td>{r.date.clone()}</td>
                                        <td>{dash(&r.clock_in)}</td>
                                        <td>{dash(&r.clock_out)}</td>
                                        <td>{r.work_mode.clone()}</td>
                                        <td>{dash(&r.total_work_hours)}</td>
                                        <td><span class=badge>{r.status.clone()}</span></td>
                                    </tr>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </tbody>
            </table>
        </div>
    }
}

/// The last 30 days and this month's statistics.
#[component]
pub fn AttendancePage() -> impl IntoView {
    let auth = use_auth();
    let notice: Notification = RwSignal::new(None);

    let (records, set_records) = signal(Vec::<Attendance>::new());
    let (stats, set_stats) = signal(Option::<AttendanceStats>::None);
    let (loading, set_loading) = signal(true);

    let client = auth.client();
    spawn_local(async move {
        let today = Local::now().date_naive();
        let service = client.attendance();
        match service.my_attendance(DateRange::last_days(today, 30)).await {
            Ok(list) => set_records.set(list),
            Err(e) => notify_err(notice, e.user_message()),
        }
        match service.my_stats(today.year(), today.month()).await {
            Ok(s) => set_stats.set(Some(s)),
            Err(e) => notify_err(notice, e.user_message()),
        }
        set_loading.set(false);
    });

    view! {
        <Page title="My attendance" notice=notice>
            <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
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
