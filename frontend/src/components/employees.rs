use hrdesk::AppRoute;
use hrdesk::shared::{Employee, EmployeeInput, EmployeeFile, Position};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::use_auth;
use crate::components::common::{EmptyRow, Notification, Page, Spinner, notify_err, notify_ok};
use crate::web::router::{Link, use_router};

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let auth = use_auth();
    let notice: Notification = RwSignal::new(None);

    let (employees, set_employees) = signal(Vec::<Employee>::new());
    let (loading, set_loading) = signal(true);

    let client = auth.client();
    spawn_local(async move {
        match client.employees().list().await {
            Ok(list) => set_employees.set(list),
            Err(e) => notify_err(notice, e.user_message()),
        }
        set_loading.set(false);
    });

    let delete = move |id: u32, name: String| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message(&format!("Delete {name}?")).ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let client = auth.client();
        spawn_local(async move {
            match client.employees().delete(id).await {
                Ok(()) => {
                    set_employees.update(|list| list.retain(|e| e.id != Some(id)));
                    notify_ok(notice, "Employee deleted");
                }
                Err(e) => notify_err(notice, e.user_message()),
            }
        });
    };

    view! {
        <Page title="Employees" notice=notice>
            <div class="flex justify-end">
                <Link to=AppRoute::AddEmployee.to_path() class="btn btn-primary btn-sm">"Add employee"</Link>
            </div>
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                        <div class="overflow-x-auto">
                            <table class="table table-zebra">
                                <thead>
                                    <tr>
                                        <th>"Name"</th>
                                        <th>"Email"</th>
                                        <th>"Position"</th>
                                        <th class="text-right">"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {move || {
                                        let rows = employees.get();
                                        if rows.is_empty() {
                                            return view! { <EmptyRow colspan=4 text="No employees" /> }.into_any();
                                        }
                                        rows.into_iter()
                                            .filter_map(|e| e.id.map(|id| (id, e)))
                                            .map(|(id, e)| {
                                                let name = e.name.clone();
                                                view! {
                                                    <tr>
                                                        <td>
                                                            <Link to=AppRoute::EmployeeDetail(id).to_path() class="link">
                                                                {e.name}
                                                            </Link>
                                                        </td>
                                                        <td>{e.email}</td>
                                                        <td>{e.position_name.unwrap_or_default()}</td>
                                                        <td class="text-right space-x-1">
                                                            <Link to=AppRoute::EditEmployee(id).to_path() class="btn btn-ghost btn-xs">
                                                                "Edit"
                                                            </Link>
                                                            <button
                                                                class="btn btn-error btn-xs"
                                                                on:click=move |_| delete(id, name.clone())
                                                            >
                                                                "Delete"
                                                            </button>
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

#[component]
fn EmployeeCard(employee: Employee) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h2 class="card-title">{employee.name}</h2>
                <p>{employee.email}</p>
                <p class="text-base-content/70">
                    {employee.position_name.unwrap_or_else(|| format!("Position #{}", employee.position_id))}
                </p>
                {employee.created_at.map(|at| view! { <p class="text-xs opacity-60">"Joined " {at}</p> })}
            </div>
        </div>
    }
}

#[component]
pub fn EmployeeDetailPage(id: u32) -> impl IntoView {
    let auth = use_auth();
    let notice: Notification = RwSignal::new(None);

    let (employee, set_employee) = signal(Option::<Employee>::None);
    let (files, set_files) = signal(Vec::<EmployeeFile>::new());

    let client = auth.client();
    spawn_local(async move {
        match client.employees().get(id).await {
            Ok(e) => set_employee.set(Some(e)),
            Err(e) => notify_err(notice, e.user_message()),
        }
        match client.files().by_employee(id).await {
            Ok(list) => set_files.set(list),
            Err(e) => notify_err(notice, e.user_message()),
        }
    });

    view! {
        <Page title="Employee" notice=notice>
            {move || match employee.get() {
                None => view! { <Spinner /> }.into_any(),
                Some(e) => view! { <EmployeeCard employee=e /> }.into_any(),
            }}
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title">"Files"</h2>
                    <ul class="list-disc pl-6">
                        {move || {
                            files
                                .get()
                                .into_iter()
                                .map(|f| view! { <li>{f.file_name} " · " {f.file_category.unwrap_or_default()}</li> })
                                .collect_view()
                        }}
                    </ul>
                </div>
            </div>
            <div class="flex gap-2">
                <Link to=AppRoute::EditEmployee(id).to_path() class="btn btn-primary btn-sm">"Edit"</Link>
                <Link to=AppRoute::Employees.to_path() class="btn btn-ghost btn-sm">"Back"</Link>
            </div>
        </Page>
    }
}

/// Add form when `id` is `None`, edit form otherwise.
#[component]
pub fn EmployeeFormPage(id: Option<u32>) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let notice: Notification = RwSignal::new(None);

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let position_id = RwSignal::new(0u32);
    let (positions, set_positions) = signal(Vec::<Position>::new());
    let (is_submitting, set_is_submitting) = signal(false);

    let client = auth.client();
    spawn_local(async move {
        match client.positions().list().await {
            Ok(list) => set_positions.set(list),
            Err(e) => notify_err(notice, e.user_message()),
        }
        if let Some(id) = id {
            match client.employees().get(id).await {
                Ok(e) => {
                    name.set(e.name);
                    email.set(e.email);
                    position_id.set(e.position_id);
                }
                Err(e) => notify_err(notice, e.user_message()),
            }
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }
        set_is_submitting.set(true);
        let input = EmployeeInput {
            name: name.get_untracked(),
            email: email.get_untracked(),
            position_id: position_id.get_untracked(),
        };
        let client = auth.client();
        spawn_local(async move {
            let service = client.employees();
            let result = match id {
                Some(id) => service.update(id, input).await,
                None => service.create(&input).await,
            };
            match result {
                Ok(_) => router.navigate(&AppRoute::Employees.to_path()),
                Err(e) => notify_err(notice, e.user_message()),
            }
            set_is_submitting.set(false);
        });
    };

    let title = if id.is_some() { "Edit employee" } else { "Add employee" };

    view! {
        <Page title=title notice=notice>
            <div class="card bg-base-100 shadow-xl max-w-xl">
                <form class="card-body space-y-2" on:submit=on_submit>
                    <input
                        class="input input-bordered"
                        placeholder="Name"
                        prop:value=name
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        type="email"
                        class="input input-bordered"
                        placeholder="Email"
                        prop:value=email
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <select
                        class="select select-bordered"
                        prop:value=move || position_id.get().to_string()
                        on:change=move |ev| position_id.set(event_target_value(&ev).parse().unwrap_or(0))
                    >
                        <option value="0">"Select a position"</option>
                        {move || {
                            positions
                                .get()
                                .into_iter()
                                .map(|p| view! { <option value=p.position_id.to_string()>{p.name}</option> })
                                .collect_view()
                        }}
                    </select>
                    <div class="flex gap-2">
                        <button class="btn btn-primary" disabled=move || is_submitting.get()>"Save"</button>
                        <Link to=AppRoute::Employees.to_path() class="btn btn-ghost">"Cancel"</Link>
                    </div>
                </form>
            </div>
        </Page>
    }
}

/// The signed-in user's own record.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    let notice: Notification = RwSignal::new(None);
    let (me, set_me) = signal(Option::<Employee>::None);
    let (failed, set_failed) = signal(false);

    let client = auth.client();
    spawn_local(async move {
        match client.employees().me().await {
            Ok(e) => set_me.set(Some(e)),
            Err(e) => {
                set_failed.set(true);
                notify_err(notice, e.user_message());
            }
        }
    });

    view! {
        <Page title="Profile" notice=notice>
            {move || match (me.get(), failed.get()) {
                (Some(e), _) => view! { <EmployeeCard employee=e /> }.into_any(),
                (None, true) => view! {
                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body">
                            <h2 class="card-title">{auth.user_name()}</h2>
                            <p>{auth.session().map(|s| s.user_email).unwrap_or_default()}</p>
                            <p class="badge badge-neutral">{auth.role().map(|r| r.as_str()).unwrap_or("?")}</p>
                        </div>
                    </div>
                }.into_any(),
                (None, false) => view! { <Spinner /> }.into_any(),
            }}
        </Page>
    }
}
