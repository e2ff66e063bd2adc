use hrdesk::shared::{Position, RegisterRequest};
use hrdesk::{AppRoute, Role};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::use_auth;
use crate::web::router::{Link, use_router};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Employee);
    let position_id = RwSignal::new(0u32);

    let (positions, set_positions) = signal(Vec::<Position>::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (success, set_success) = signal(false);

    // Positions feed the select; a failure leaves it empty.
    let client = auth.client();
    spawn_local(async move {
        match client.positions().list().await {
            Ok(list) => set_positions.set(list),
            Err(e) => web_sys::console::log_1(&format!("[Register] positions: {e}").into()),
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }
        let req = RegisterRequest {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm.get_untracked(),
            role: role.get_untracked(),
            position_id: Some(position_id.get_untracked()).filter(|id| *id != 0),
        };
        set_is_submitting.set(true);
        set_error_msg.set(None);

        let client = auth.client();
        spawn_local(async move {
            match client.auth().register(&req).await {
                Ok(()) => {
                    set_success.set(true);
                    set_timeout(
                        move || router.navigate(&AppRoute::Login.to_path()),
                        std::time::Duration::from_millis(1500),
                    );
                }
                Err(e) => set_error_msg.set(Some(e.user_message())),
            }
            set_is_submitting.set(false);
        });
    };

    let text_input = move |id: &'static str, label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <div class="form-control">
                <label class="label" for=id>
                    <span class="label-text">{label}</span>
                </label>
                <input
                    id=id
                    type=kind
                    class="input input-bordered"
                    prop:value=value
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </div>
        }
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold">"Create an account"</h1>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>
                        <Show when=move || success.get()>
                            <div role="alert" class="alert alert-success text-sm py-2">
                                <span>"Registration successful! Redirecting to login..."</span>
                            </div>
                        </Show>

                        {text_input("name", "Full name", "text", name)}
                        {text_input("email", "Email", "email", email)}
                        {text_input("password", "Password", "password", password)}
                        {text_input("confirm", "Confirm password", "password", confirm)}

                        <div class="form-control">
                            <label class="label" for="role">
                                <span class="label-text">"Role"</span>
                            </label>
                            <select
                                id="role"
                                class="select select-bordered"
                                on:change=move |ev| {
                                    if let Some(r) = Role::parse(&event_target_value(&ev)) {
                                        role.set(r);
                                    }
                                }
                            >
                                <option value="Employee" selected=true>"Employee"</option>
                                <option value="Admin">"Admin"</option>
                            </select>
                        </div>

                        <Show when=move || role.get() == Role::Employee>
                            <div class="form-control">
                                <label class="label" for="position">
                                    <span class="label-text">"Position"</span>
                                </label>
                                <select
                                    id="position"
                                    class="select select-bordered"
                                    on:change=move |ev| {
                                        position_id.set(event_target_value(&ev).parse().unwrap_or(0));
                                    }
                                >
                                    <option value="0">"Select a position"</option>
                                    {move || {
                                        positions
                                            .get()
                                            .into_iter()
                                            .map(|p| {
                                                view! {
                                                    <option value=p.position_id.to_string()>{p.name}</option>
                                                }
                                            })
                                            .collect_view()
                                    }}
                                </select>
                            </div>
                        </Show>

                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() { "Registering..." } else { "Register" }}
                            </button>
                        </div>
                        <p class="text-sm text-center">
                            "Already registered? "
                            <Link to="/login" class="link link-primary">"Sign in"</Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
