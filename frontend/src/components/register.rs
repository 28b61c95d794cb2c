use crate::api::use_services;
use crate::auth::use_auth;
use leptos::prelude::*;
use leptos::task::spawn_local;
use service_desk::validation::validate_credentials;
use service_desk::{AppError, AuthMode};

const REGISTER_FAILED: &str = "Registration failed. Please try again.";
const REGISTER_SUCCESS: &str = "Account created. Please login.";

#[component]
pub fn RegisterForm() -> impl IntoView {
    let auth = use_auth();
    let services = StoredValue::new(use_services());

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let email = email.get();
        let password = password.get();

        if let Err(errors) = validate_credentials(&email, &password) {
            set_error_msg.set(Some(AppError::from(errors).user_message().to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = services.get_value().auth();
        spawn_local(async move {
            match api.register(&email, &password).await {
                Ok(()) => {
                    // 切到登录页，弹窗内的表单随之替换
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(REGISTER_SUCCESS);
                    }
                    auth.open_modal(AuthMode::Login);
                }
                Err(e) => {
                    log::warn!("[Register] {}", e);
                    set_error_msg.set(Some(REGISTER_FAILED.to_string()));
                    set_is_submitting.set(false);
                }
            }
        });
    };

    view! {
        <form class="flex flex-col gap-2" on:submit=on_submit>
            <h3 class="text-2xl font-bold">"Create an account"</h3>
            <p class="text-base-content/70 text-sm">"Book trusted technicians in minutes"</p>

            <Show when=move || error_msg.get().is_some()>
                <div role="alert" class="alert alert-error text-sm py-2">
                    <span>{move || error_msg.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <div class="form-control">
                <label class="label" for="register-email">
                    <span class="label-text">"Email"</span>
                </label>
                <input
                    id="register-email"
                    type="email"
                    placeholder="you@example.com"
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    prop:value=email
                    class="input input-bordered"
                />
            </div>
            <div class="form-control">
                <label class="label" for="register-password">
                    <span class="label-text">"Password"</span>
                </label>
                <input
                    id="register-password"
                    type="password"
                    placeholder="At least 6 characters"
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    prop:value=password
                    class="input input-bordered"
                />
            </div>
            <div class="form-control mt-4">
                <button class="btn btn-primary" disabled=move || is_submitting.get()>
                    {move || if is_submitting.get() {
                        view! { <span class="loading loading-spinner"></span> "Creating..." }.into_any()
                    } else {
                        "Register".into_any()
                    }}
                </button>
            </div>
        </form>
    }
}
