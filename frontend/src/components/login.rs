use crate::api::use_services;
use crate::auth::use_auth;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use service_desk::validation::validate_credentials;
use service_desk::{AppError, AppRoute};

#[component]
pub fn LoginForm() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let services = StoredValue::new(use_services());

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let email = email.get();
        let password = password.get();

        // 校验失败不发请求
        if let Err(errors) = validate_credentials(&email, &password) {
            set_error_msg.set(Some(AppError::from(errors).user_message().to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = services.get_value().auth();
        spawn_local(async move {
            match api.login(&email, &password).await {
                Ok(role) => {
                    auth.refresh();
                    auth.close_modal();
                    router.navigate_to_route(AppRoute::landing_for(role));
                }
                Err(e) => {
                    log::warn!("[Login] {}", e);
                    set_error_msg.set(Some(e.user_message().to_string()));
                }
            }
            // 登录成功后弹窗已卸载，信号可能已释放
            set_is_submitting.try_set(false);
        });
    };

    view! {
        <form class="flex flex-col gap-2" on:submit=on_submit>
            <h3 class="text-2xl font-bold">"Welcome back"</h3>
            <p class="text-base-content/70 text-sm">"Sign in to manage your bookings"</p>

            <Show when=move || error_msg.get().is_some()>
                <div role="alert" class="alert alert-error text-sm py-2">
                    <span>{move || error_msg.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <div class="form-control">
                <label class="label" for="login-email">
                    <span class="label-text">"Email"</span>
                </label>
                <input
                    id="login-email"
                    type="email"
                    placeholder="you@example.com"
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    prop:value=email
                    class="input input-bordered"
                />
            </div>
            <div class="form-control">
                <label class="label" for="login-password">
                    <span class="label-text">"Password"</span>
                </label>
                <input
                    id="login-password"
                    type="password"
                    placeholder="••••••••"
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    prop:value=password
                    class="input input-bordered"
                />
            </div>
            <div class="form-control mt-4">
                <button class="btn btn-primary" disabled=move || is_submitting.get()>
                    {move || if is_submitting.get() {
                        view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                    } else {
                        "Login".into_any()
                    }}
                </button>
            </div>
        </form>
    }
}
