use crate::auth::use_auth;
use crate::components::login::LoginForm;
use crate::components::register::RegisterForm;
use leptos::prelude::*;
use service_desk::AuthMode;

/// 全局登录/注册弹窗
///
/// 打开与切换完全由 `AuthModal` 驱动，这里只负责渲染。
#[component]
pub fn AuthModalView() -> impl IntoView {
    let auth = use_auth();
    let modal_state = auth.modal_state;

    let is_open = move || modal_state.get().is_open;
    let mode = move || modal_state.get().mode;

    let tab_class = move |m: AuthMode| {
        if mode() == m { "tab tab-active" } else { "tab" }
    };

    view! {
        <div class=move || if is_open() { "modal modal-open" } else { "modal" }>
            <div class="modal-box max-w-md">
                <button
                    class="btn btn-sm btn-circle btn-ghost absolute right-2 top-2"
                    on:click=move |_| auth.close_modal()
                >
                    "✕"
                </button>

                <div role="tablist" class="tabs tabs-bordered mb-4">
                    <a
                        role="tab"
                        class=move || tab_class(AuthMode::Login)
                        on:click=move |_| auth.open_modal(AuthMode::Login)
                    >
                        "Login"
                    </a>
                    <a
                        role="tab"
                        class=move || tab_class(AuthMode::Register)
                        on:click=move |_| auth.open_modal(AuthMode::Register)
                    >
                        "Register"
                    </a>
                </div>

                // 关闭时卸载表单，重新打开即为空表单
                <Show when=is_open>
                    {move || match mode() {
                        AuthMode::Login => view! { <LoginForm /> }.into_any(),
                        AuthMode::Register => view! { <RegisterForm /> }.into_any(),
                    }}
                </Show>
            </div>
            <div class="modal-backdrop" on:click=move |_| auth.close_modal()></div>
        </div>
    }
}
