//! 路由服务模块 - 核心引擎
//!
//! 封装 History API，所有对 window.history 的操作都集中在此。
//! 每次导航都先交给核心库的 `RouteGuard` 判定，再决定推入、替换或保持不动。

use leptos::prelude::*;
use service_desk::{AppRoute, GuardDecision, RouteGuard};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::storage::BrowserStorage;

pub type BrowserGuard = RouteGuard<BrowserStorage>;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 路由器服务
///
/// 通过 Signal 驱动界面更新；守卫和认证信号由外部注入。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    guard: StoredValue<BrowserGuard>,
    is_authenticated: Signal<bool>,
}

impl RouterService {
    /// 创建路由服务，首屏同样经过守卫
    ///
    /// 首屏被拒绝（弹出登录框）时落到首页。
    fn new(guard: BrowserGuard, is_authenticated: Signal<bool>) -> Self {
        let requested = AppRoute::from_path(&current_path());
        let initial_route = match guard.check(requested) {
            GuardDecision::Allow => requested,
            GuardDecision::DenyWithModal => {
                replace_history_state(AppRoute::Home.to_path());
                AppRoute::Home
            }
            GuardDecision::DenyWithRedirect(target) => {
                replace_history_state(target.to_path());
                target
            }
        };
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            guard: StoredValue::new(guard),
            is_authenticated,
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// **核心方法：导航与守卫**
    pub fn navigate(&self, path: &str) {
        self.navigate_to_route(AppRoute::from_path(path));
    }

    pub fn navigate_to_route(&self, target_route: AppRoute) {
        let decision = self.guard.with_value(|g| g.check(target_route));
        match decision {
            GuardDecision::Allow => {
                push_history_state(target_route.to_path());
                self.set_route.set(target_route);
            }
            GuardDecision::DenyWithModal => {
                log::info!("[Router] {} requires login", target_route);
            }
            GuardDecision::DenyWithRedirect(redirect) => {
                log::warn!("[Router] {} forbidden for current role", target_route);
                replace_history_state(redirect.to_path());
                self.set_route.set(redirect);
            }
        }
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let guard = self.guard;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target_route = AppRoute::from_path(&current_path());
            match guard.with_value(|g| g.check(target_route)) {
                GuardDecision::Allow => set_route.set(target_route),
                GuardDecision::DenyWithModal => {
                    // 恢复地址栏，页面保持不变
                    replace_history_state(current_route.get_untracked().to_path());
                }
                GuardDecision::DenyWithRedirect(redirect) => {
                    replace_history_state(redirect.to_path());
                    set_route.set(redirect);
                }
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 登出时离开受保护页面
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        Effect::new(move |_| {
            let is_auth = is_authenticated.get();
            let route = current_route.get_untracked();
            if !is_auth && route.requires_auth() {
                log::info!("[Router] logged out, leaving {}", route);
                push_history_state(AppRoute::Home.to_path());
                set_route.set(AppRoute::Home);
            }
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(guard: BrowserGuard, is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(guard, is_authenticated);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
#[component]
pub fn Router(
    /// 路由守卫
    guard: BrowserGuard,
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    children: Children,
) -> impl IntoView {
    provide_router(guard, is_authenticated);

    children()
}

/// 路由出口组件
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// 站内链接，点击时走路由守卫
#[component]
pub fn Link(
    to: AppRoute,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate_to_route(to);
    };

    view! {
        <a href=to.to_path() class=class on:click=on_click>
            {children()}
        </a>
    }
}
