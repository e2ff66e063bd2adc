//! Leave requests: the employee form and history, and the admin review queue.

use hrdesk::LeaveForm;
use hrdesk::shared::{LeaveRequest, LeaveType};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::use_auth;
use crate::components::common::{EmptyRow, Notification, Page, Spinner, notify_err, notify_ok};

/// Form fields as signals.
///
/// `RwSignal` is `Copy`, so the whole state can be handed to closures and
/// child components freely.
#[derive(Clone, Copy)]
pub struct LeaveFormState {
    pub leave_type_id: RwSignal<u32>,
    pub start_date: RwSignal<String>,
    pub end_date: RwSignal<String>,
    pub reason: RwSignal<String>,
}

impl LeaveFormState {
    pub fn new() -> Self {
        Self {
            leave_type_id: RwSignal::new(0),
            start_date: RwSignal::new(String::new()),
            end_date: RwSignal::new(String::new()),
            reason: RwSignal::new(String::new()),
        }
    }

    pub fn reset(&self) {
        self.leave_type_id.set(0);
        self.start_date.set(String::new());
        self.end_date.set(String::new());
        self.reason.set(String::new());
    }

    /// Snapshot for validation; `0` means no type picked.
    pub fn to_form(&self) -> LeaveForm {
        LeaveForm {
            leave_type_id: Some(self.leave_type_id.get_untracked()).filter(|id| *id != 0),
            start_date: self.start_date.get_untracked(),
            end_date: self.end_date.get_untracked(),
            reason: self.reason.get_untracked(),
        }
    }
}

impl Default for LeaveFormState {
    fn default() -> Self {
        Self::new()
    }
}

fn status_badge(status: &str) -> &'static str {
    match status {
        "Approved" => "badge badge-success",
        "Rejected" => "badge badge-error",
        _ => "badge badge-warning",
    }
}

#[component]
pub fn LeavePage() -> impl IntoView {
    let auth = use_auth();
    let notice: Notification = RwSignal::new(None);
    let form = LeaveFormState::new();

    let (types, set_types) = signal(Vec::<LeaveType>::new());
    let (requests, set_requests) = signal(Vec::<LeaveRequest>::new());
    let (loading, set_loading) = signal(true);
    let (is_submitting, set_is_submitting) = signal(false);

    let load = move || {
        let client = auth.client();
        spawn_local(async move {
            let service = client.leave();
            match service.types().await {
                Ok(list) => set_types.set(list),
                Err(e) => notify_err(notice, e.user_message()),
            }
            match service.mine().await {
                Ok(list) => set_requests.set(list),
                Err(e) => notify_err(notice, e.user_message()),
            }
            set_loading.set(false);
        });
    };
    load();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }
        set_is_submitting.set(true);
        let client = auth.client();
        let leave_form = form.to_form();
        spawn_local(async move {
            match client.leave().submit(&leave_form).await {
                Ok(created) => {
                    set_requests.update(|list| list.insert(0, created));
                    form.reset();
                    notify_ok(notice, "Leave request submitted");
                }
                Err(e) => notify_err(notice, e.user_message()),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <Page title="Leave" notice=notice>
            <div class="grid lg:grid-cols-3 gap-6">
                <div class="card bg-base-100 shadow-xl">
                    <form class="card-body space-y-2" on:submit=on_submit>
                        <h2 class="card-title">"New request"</h2>
                        <select
                            class="select select-bordered"
                            prop:value=move || form.leave_type_id.get().to_string()
                            on:change=move |ev| {
                                form.leave_type_id.set(event_target_value(&ev).parse().unwrap_or(0));
                            }
                        >
                            <option value="0">"Leave type"</option>
                            {move || {
                                types
                                    .get()
                                    .into_iter()
                                    .map(|t| {
                                        let label = format!("{} ({} days/year)", t.name, t.max_days_per_year);
                                        view! { <option value=t.leave_type_id.to_string()>{label}</option> }
                                    })
                                    .collect_view()
                            }}
                        </select>
                        <label class="label"><span class="label-text">"From"</span></label>
                        <input
                            type="date"
                            class="input input-bordered"
                            prop:value=form.start_date
                            on:input=move |ev| form.start_date.set(event_target_value(&ev))
                        />
                        <label class="label"><span class="label-text">"To"</span></label>
                        <input
                            type="date"
                            class="input input-bordered"
                            prop:value=form.end_date
                            on:input=move |ev| form.end_date.set(event_target_value(&ev))
                        />
                        <textarea
                            class="textarea textarea-bordered"
                            placeholder="Reason"
                            prop:value=form.reason
                            on:input=move |ev| form.reason.set(event_target_value(&ev))
                        ></textarea>
                        <button class="btn btn-primary" disabled=move || is_submitting.get()>
                            {move || if is_submitting.get() { "Submitting..." } else { "Submit" }}
                        </button>
                    </form>
                </div>

                <div class="card bg-base-100 shadow-xl lg:col-span-2">
                    <div class="card-body">
                        <h2 class="card-title">"My requests"</h2>
                        <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                            <div class="overflow-x-auto">
                                <table class="table table-zebra">
                                    <thead>
                                        <tr>
                                            <th>"Type"</th>
                                            <th>"Dates"</th>
                                            <th>"Days"</th>
                                            <th>"Status"</th>
                                            <th>"Note"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {move || {
                                            let rows = requests.get();
                                            if rows.is_empty() {
                                                return view! { <EmptyRow colspan=5 text="No leave requests yet" /> }.into_any();
                                            }
                                            rows.into_iter()
                                                .map(|r| {
                                                    let badge = status_badge(&r.status);
                                                    view! {
                                                        <tr>
                                                            <td>{r.leave_type_name}</td>
                                                            <td>{format!("{} → {}", r.start_date, r.end_date)}</td>
                                                            <td>{r.total_days}</td>
                                                            <td><span class=badge>{r.status}</span></td>
                                                            <td>{r.rejection_reason.unwrap_or_default()}</td>
                                                        </tr>
                                                    }
                                                })
                                                .collect_view()
                                                .into_any()
                                        }}
                                    </tbody>
                                </table>
                            </div>
                        </Show>
                    </div>
                </div>
            </div>
        </Page>
    }
}

/// Pending requests with approve and reject-with-reason actions.
#[component]
pub fn AdminLeavePage() -> impl IntoView {
    let auth = use_auth();
    let notice: Notification = RwSignal::new(None);

    let (pending, set_pending) = signal(Vec::<LeaveRequest>::new());
    let (loading, set_loading) = signal(true);
    let (busy, set_busy) = signal(false);
    // Request being rejected and the reason typed so far.
    let rejecting = RwSignal::new(Option::<u32>::None);
    let reason = RwSignal::new(String::new());

    let client = auth.client();
    spawn_local(async move {
        match client.leave().pending().await {
            Ok(list) => set_pending.set(list),
            Err(e) => notify_err(notice, e.user_message()),
        }
        set_loading.set(false);
    });

    let decide = move |id: u32, approve: bool| {
        if busy.get_untracked() {
            return;
        }
        set_busy.set(true);
        let client = auth.client();
        let reason_text = reason.get_untracked();
        spawn_local(async move {
            let service = client.leave();
            let result = if approve {
                service.approve(id).await
            } else {
                service.reject(id, &reason_text).await
            };
            match result {
                Ok(_) => {
                    set_pending.update(|list| list.retain(|r| r.leave_request_id != id));
                    rejecting.set(None);
                    reason.set(String::new());
                    notify_ok(notice, if approve { "Request approved" } else { "Request rejected" });
                }
                Err(e) => notify_err(notice, e.user_message()),
            }
            set_busy.set(false);
        });
    };

    view! {
        <Page title="Leave requests" notice=notice>
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                        <div class="overflow-x-auto">
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"Employee"</th>
                                        <th>"Type"</th>
                                        <th>"Dates"</th>
                                        <th>"Reason"</th>
                                        <th class="text-right">"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {move || {
                                        let rows = pending.get();
                                        if rows.is_empty() {
                                            return view! { <EmptyRow colspan=5 text="Nothing to review" /> }.into_any();
                                        }
                                        rows.into_iter()
                                            .map(|r| {
                                                let id = r.leave_request_id;
                                                view! {
                                                    <tr>
                                                        <td>{r.employee_name}</td>
                                                        <td>{r.leave_type_name}</td>
                                                        <td>{format!("{} → {} ({} days)", r.start_date, r.end_date, r.total_days)}</td>
                                                        <td>{r.reason}</td>
                                                        <td class="text-right space-x-1">
                                                            <Show
                                                                when=move || rejecting.get() == Some(id)
                                                                fallback=move || view! {
                                                                    <button
                                                                        class="btn btn-success btn-xs"
                                                                        disabled=move || busy.get()
                                                                        on:click=move |_| decide(id, true)
                                                                    >
                                                                        "Approve"
                                                                    </button>
                                                                    <button
                                                                        class="btn btn-error btn-xs"
                                                                        on:click=move |_| {
                                                                            reason.set(String::new());
                                                                            rejecting.set(Some(id));
                                                                        }
                                                                    >
                                                                        "Reject"
                                                                    </button>
                                                                }
                                                            >
                                                                <input
                                                                    class="input input-bordered input-xs"
                                                                    placeholder="Reason"
                                                                    prop:value=reason
                                                                    on:input=move |ev| reason.set(event_target_value(&ev))
                                                                />
                                                                <button
                                                                    class="btn btn-error btn-xs"
                                                                    disabled=move || busy.get()
                                                                    on:click=move |_| decide(id, false)
                                                                >
                                                                    "Confirm"
                                                                </button>
                                                                <button class="btn btn-ghost btn-xs" on:click=move |_| rejecting.set(None)>
                                                                    "Cancel"
                                                                </button>
                                                            </Show>
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()
                                            .into_any()
                                    }}
                                </tbody>
                            </table>
                        </div>
                    </Show>
                </div>
            </div>
        </Page>
    }
}
