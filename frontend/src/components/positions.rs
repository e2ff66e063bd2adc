use hrdesk::AppRoute;
use hrdesk::shared::{PaginatedResponse, Position, PositionInput};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::use_auth;
use crate::components::common::{EmptyRow, Notification, Page, Spinner, notify_err, notify_ok};
use crate::web::router::{Link, use_router};

#[component]
pub fn PositionsPage() -> impl IntoView {
    let auth = use_auth();
    let notice: Notification = RwSignal::new(None);

    let page_number = RwSignal::new(1u32);
    let (page, set_page) = signal(Option::<PaginatedResponse<Position>>::None);

    // Reloads whenever the page number changes.
    Effect::new(move |_| {
        let number = page_number.get();
        let client = auth.client();
        spawn_local(async move {
            let size = client.config().default_page_size;
            match client.positions().page(number, size).await {
                Ok(p) => set_page.set(Some(p)),
                Err(e) => notify_err(notice, e.user_message()),
            }
        });
    });

    let delete = move |id: u32| {
        let client = auth.client();
        spawn_local(async move {
            match client.positions().delete(id).await {
                Ok(()) => {
                    notify_ok(notice, "Position deleted");
                    // refetch the current page
                    page_number.update(|_| {});
                }
                Err(e) => notify_err(notice, e.user_message()),
            }
        });
    };

    view! {
        <Page title="Positions" notice=notice>
            <div class="flex justify-end">
                <Link to=AppRoute::AddPosition.to_path() class="btn btn-primary btn-sm">"Add position"</Link>
            </div>
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    {move || match page.get() {
                        None => view! { <Spinner /> }.into_any(),
                        Some(p) => {
                            let has_previous = p.has_previous;
                            let has_next = p.has_next;
                            let footer = format!("Page {} of {} ({} total)", p.current_page, p.total_pages.max(1), p.total_count);
                            let rows = if p.items.is_empty() {
                                view! { <EmptyRow colspan=3 text="No positions" /> }.into_any()
                            } else {
                                p.items
                                    .into_iter()
                                    .map(|pos| {
                                        let id = pos.position_id;
                                        view! {
                                            <tr>
                                                <td>
                                                    <Link to=AppRoute::PositionDetail(id).to_path() class="link">{pos.name}</Link>
                                                </td>
                                                <td>{pos.description.unwrap_or_default()}</td>
                                                <td class="text-right">
                                                    <button class="btn btn-error btn-xs" on:click=move |_| delete(id)>
                                                        "Delete"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            };
                            view! {
                                <table class="table table-zebra">
                                    <thead>
                                        <tr>
                                            <th>"Name"</th>
                                            <th>"Description"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>{rows}</tbody>
                                </table>
                                <div class="flex justify-between items-center">
                                    <span class="text-sm opacity-70">{footer}</span>
                                    <div class="join">
                                        <button
                                            class="join-item btn btn-sm"
                                            disabled=!has_previous
                                            on:click=move |_| page_number.update(|n| *n = n.saturating_sub(1).max(1))
                                        >
                                            "«"
                                        </button>
                                        <button
                                            class="join-item btn btn-sm"
                                            disabled=!has_next
                                            on:click=move |_| page_number.update(|n| *n += 1)
                                        >
                                            "»"
                                        </button>
                                    </div>
                                </div>
                            }.into_any()
                        }
                    }}
                </div>
            </div>
        </Page>
    }
}

#[component]
pub fn PositionFormPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let notice: Notification = RwSignal::new(None);

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let (is_submitting, set_is_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }
        set_is_submitting.set(true);
        let desc = description.get_untracked();
        let input = PositionInput {
            name: name.get_untracked(),
            description: Some(desc).filter(|d| !d.trim().is_empty()),
        };
        let client = auth.client();
        spawn_local(async move {
            match client.positions().create(&input).await {
                Ok(_) => router.navigate(&AppRoute::Positions.to_path()),
                Err(e) => notify_err(notice, e.user_message()),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <Page title="Add position" notice=notice>
            <div class="card bg-base-100 shadow-xl max-w-xl">
                <form class="card-body space-y-2" on:submit=on_submit>
                    <input
                        class="input input-bordered"
                        placeholder="Name"
                        prop:value=name
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <textarea
                        class="textarea textarea-bordered"
                        placeholder="Description"
                        prop:value=description
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                    <div class="flex gap-2">
                        <button class="btn btn-primary" disabled=move || is_submitting.get()>"Save"</button>
                        <Link to=AppRoute::Positions.to_path() class="btn btn-ghost">"Cancel"</Link>
                    </div>
                </form>
            </div>
        </Page>
    }
}

/// Editable position with the employees holding it.
#[component]
pub fn PositionDetailPage(id: u32) -> impl IntoView {
    let auth = use_auth();
    let notice: Notification = RwSignal::new(None);

    let (position, set_position) = signal(Option::<Position>::None);
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    let client = auth.client();
    spawn_local(async move {
        match client.positions().get(id).await {
            Ok(p) => {
                name.set(p.name.clone());
                description.set(p.description.clone().unwrap_or_default());
                set_position.set(Some(p));
            }
            Err(e) => notify_err(notice, e.user_message()),
        }
    });

    let save = move |_| {
        let desc = description.get_untracked();
        let input = PositionInput {
            name: name.get_untracked(),
            description: Some(desc).filter(|d| !d.trim().is_empty()),
        };
        let client = auth.client();
        spawn_local(async move {
            match client.positions().update(id, input).await {
                Ok(p) => {
                    set_position.update(|current| {
                        if let Some(current) = current {
                            current.name = p.name;
                            current.description = p.description;
                        }
                    });
                    notify_ok(notice, "Position updated");
                }
                Err(e) => notify_err(notice, e.user_message()),
            }
        });
    };

    view! {
        <Page title="Position" notice=notice>
            <Show when=move || position.get().is_some() fallback=|| view! { <Spinner /> }>
                <div class="card bg-base-100 shadow-xl max-w-xl">
                    <div class="card-body space-y-2">
                        <input
                            class="input input-bordered"
                            prop:value=name
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                        <textarea
                            class="textarea textarea-bordered"
                            prop:value=description
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                        <button class="btn btn-primary btn-sm self-start" on:click=save>"Save"</button>
                    </div>
                </div>
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">"Employees"</h2>
                        <ul class="list-disc pl-6">
                            {move || {
                                position
                                    .get()
                                    .map(|p| p.employees)
                                    .unwrap_or_default()
                                    .into_iter()
                                    .map(|e| {
                                        let label = format!("{} ({})", e.name, e.email);
                                        match e.id {
                                            Some(eid) => view! {
                                                <li><Link to=AppRoute::EmployeeDetail(eid).to_path() class="link">{label}</Link></li>
                                            }.into_any(),
                                            None => view! { <li>{label}</li> }.into_any(),
                                        }
                                    })
                                    .collect_view()
                            }}
                        </ul>
                    </div>
                </div>
            </Show>
            <Link to=AppRoute::Positions.to_path() class="btn btn-ghost btn-sm">"Back"</Link>
        </Page>
    }
}
