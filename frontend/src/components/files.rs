//! Employee documents: paged list, upload, download, preview and delete.

use hrdesk::services::{FileUpload, format_file_size};
use hrdesk::shared::{Employee, EmployeeFile, PaginatedResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::auth::use_auth;
use crate::components::common::{EmptyRow, Notification, Page, Spinner, notify_err, notify_ok};
use crate::web::http::bytes_to_blob;

const FILE_INPUT_ID: &str = "upload-file";

/// First file picked in the upload input, read into memory.
async fn picked_file() -> Result<Option<(String, Option<String>, Vec<u8>)>, JsValue> {
    let Some(input) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(FILE_INPUT_ID))
        .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
    else {
        return Ok(None);
    };
    let Some(file) = input.files().and_then(|list| list.get(0)) else {
        return Ok(None);
    };

    let buffer = JsFuture::from(file.array_buffer()).await?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let content_type = Some(file.type_()).filter(|t| !t.is_empty());
    input.set_value("");
    Ok(Some((file.name(), content_type, bytes)))
}

/// Hand downloaded bytes to the browser as a file save.
fn save_bytes(file_name: &str, content_type: &str, bytes: &[u8]) -> Result<(), JsValue> {
    let blob = bytes_to_blob(bytes, Some(content_type))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();
    web_sys::Url::revoke_object_url(&url)
}

fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(url, "_blank");
    }
}

#[component]
pub fn FilesPage() -> impl IntoView {
    let auth = use_auth();
    let notice: Notification = RwSignal::new(None);

    let page_number = RwSignal::new(1u32);
    let (page, set_page) = signal(Option::<PaginatedResponse<EmployeeFile>>::None);
    let (employees, set_employees) = signal(Vec::<Employee>::new());
    let upload_employee = RwSignal::new(0u32);
    let category = RwSignal::new(String::new());
    let (uploading, set_uploading) = signal(false);

    let client = auth.client();
    spawn_local(async move {
        match client.employees().list().await {
            Ok(list) => set_employees.set(list),
            Err(e) => notify_err(notice, e.user_message()),
        }
    });

    Effect::new(move |_| {
        let number = page_number.get();
        let client = auth.client();
        spawn_local(async move {
            let size = client.config().default_page_size;
            match client.files().list(number, size).await {
                Ok(p) => set_page.set(Some(p)),
                Err(e) => notify_err(notice, e.user_message()),
            }
        });
    });

    let on_upload = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if uploading.get_untracked() {
            return;
        }
        set_uploading.set(true);
        let client = auth.client();
        spawn_local(async move {
            let (file_name, content_type, bytes) = match picked_file().await {
                Ok(Some(file)) => file,
                Ok(None) => (String::new(), None, Vec::new()),
                Err(e) => {
                    notify_err(notice, format!("Could not read file: {e:?}"));
                    set_uploading.set(false);
                    return;
                }
            };
            let upload = FileUpload {
                employee_id: upload_employee.get_untracked(),
                file_name,
                content_type,
                bytes,
                category: Some(category.get_untracked()),
            };
            match client.files().upload(upload).await {
                Ok(file) => {
                    notify_ok(notice, format!("Uploaded {}", file.file_name));
                    category.set(String::new());
                    page_number.set(1);
                }
                Err(e) => notify_err(notice, e.user_message()),
            }
            set_uploading.set(false);
        });
    };

    let download = move |file: EmployeeFile| {
        let client = auth.client();
        spawn_local(async move {
            match client.files().download(file.employee_file_id).await {
                Ok(bytes) => {
                    if let Err(e) = save_bytes(&file.file_name, &file.file_type, &bytes) {
                        notify_err(notice, format!("Download failed: {e:?}"));
                    }
                }
                Err(e) => notify_err(notice, e.user_message()),
            }
        });
    };

    let preview = move |id: u32| {
        let client = auth.client();
        spawn_local(async move {
            match client.files().preview_url(id).await {
                Ok(url) => open_in_new_tab(&url),
                Err(e) => notify_err(notice, e.user_message()),
            }
        });
    };

    let delete = move |id: u32| {
        let client = auth.client();
        spawn_local(async move {
            match client.files().delete(id).await {
                Ok(()) => {
                    notify_ok(notice, "File deleted");
                    set_page.update(|p| {
                        if let Some(p) = p {
                            p.items.retain(|f| f.employee_file_id != id);
                        }
                    });
                }
                Err(e) => notify_err(notice, e.user_message()),
            }
        });
    };

    view! {
        <Page title="Files" notice=notice>
            <div class="card bg-base-100 shadow-xl">
                <form class="card-body flex-row flex-wrap gap-2 items-end" on:submit=on_upload>
                    <select
                        class="select select-bordered select-sm"
                        on:change=move |ev| upload_employee.set(event_target_value(&ev).parse().unwrap_or(0))
                    >
                        <option value="0">"Employee"</option>
                        {move || {
                            employees
                                .get()
                                .into_iter()
                                .filter_map(|e| e.id.map(|id| (id, e.name)))
                                .map(|(id, name)| view! { <option value=id.to_string()>{name}</option> })
                                .collect_view()
                        }}
                    </select>
                    <input id=FILE_INPUT_ID type="file" class="file-input file-input-bordered file-input-sm" />
                    <input
                        class="input input-bordered input-sm"
                        placeholder="Category"
                        prop:value=category
                        on:input=move |ev| category.set(event_target_value(&ev))
                    />
                    <button class="btn btn-primary btn-sm" disabled=move || uploading.get()>
                        {move || if uploading.get() { "Uploading..." } else { "Upload" }}
                    </button>
                </form>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body overflow-x-auto">
                    {move || match page.get() {
                        None => view! { <Spinner /> }.into_any(),
                        Some(p) => {
                            let has_previous = p.has_previous;
                            let has_next = p.has_next;
                            let footer = format!("Page {} of {}", p.current_page, p.total_pages.max(1));
                            let rows = if p.items.is_empty() {
                                view! { <EmptyRow colspan=5 text="No files" /> }.into_any()
                            } else {
                                p.items
                                    .into_iter()
                                    .map(|f| {
                                        let id = f.employee_file_id;
                                        let for_download = f.clone();
                                        view! {
                                            <tr>
                                                <td>{f.file_name}</td>
                                                <td>{f.employee_name}</td>
                                                <td>{f.file_category.unwrap_or_default()}</td>
                                                <td>{format_file_size(f.file_size)}</td>
                                                <td class="text-right space-x-1">
                                                    <button class="btn btn-ghost btn-xs" on:click=move |_| preview(id)>"Preview"</button>
                                                    <button
                                                        class="btn btn-ghost btn-xs"
                                                        on:click=move |_| download(for_download.clone())
                                                    >
                                                        "Download"
                                                    </button>
                                                    <button class="btn btn-error btn-xs" on:click=move |_| delete(id)>"Delete"</button>
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
                                            <th>"Employee"</th>
                                            <th>"Category"</th>
                                            <th>"Size"</th>
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
