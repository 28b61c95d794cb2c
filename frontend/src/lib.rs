//! Service Desk 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::router`: 路由服务（核心引擎），导航统一经过核心库的 `RouteGuard`
//! - `auth`: 会话与登录弹窗状态，桥接为 Leptos 信号
//! - `api`: REST 服务工厂，请求自动附加鉴权头
//! - `components`: UI 组件层

mod api;
mod auth;
mod components {
    pub mod assignment_management;
    pub mod auth_modal;
    pub mod booking_page;
    pub mod customer_dashboard;
    pub mod home;
    mod login;
    pub mod navbar;
    pub mod notice;
    mod register;
    pub mod technician_dashboard;
    pub mod technician_onboard;
    pub mod technician_profile;
}

use crate::api::Services;
use crate::auth::AuthContext;
use crate::components::assignment_management::AssignmentManagementPage;
use crate::components::auth_modal::AuthModalView;
use crate::components::booking_page::BookingPage;
use crate::components::customer_dashboard::CustomerDashboardPage;
use crate::components::home::HomePage;
use crate::components::navbar::Navbar;
use crate::components::technician_dashboard::TechnicianDashboardPage;
use crate::components::technician_onboard::TechnicianOnboardPage;
use crate::components::technician_profile::TechnicianProfilePage;

use leptos::prelude::*;
use leptos::task::spawn_local;
use service_desk::{ApiConfig, AppRoute, AuthModal, RouteGuard, SessionRestorer, SessionStore};

// 浏览器 API 封装模块
// 核心库只定义 trait，这里提供基于 fetch / localStorage / History 的实现。
pub(crate) mod web {
    mod http;
    pub mod router;
    mod storage;

    pub use http::FetchClient;
    pub use storage::BrowserStorage;
}

use web::BrowserStorage;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Booking => view! { <BookingPage /> }.into_any(),
        AppRoute::CustomerBookings => view! { <CustomerDashboardPage /> }.into_any(),
        AppRoute::TechnicianOnboard => view! { <TechnicianOnboardPage /> }.into_any(),
        AppRoute::TechnicianDashboard => view! { <TechnicianDashboardPage /> }.into_any(),
        AppRoute::TechnicianProfile => view! { <TechnicianProfilePage /> }.into_any(),
        AppRoute::AdminAssignments => view! { <AssignmentManagementPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 会话存储与登录弹窗，整个应用各一份
    let store = SessionStore::new(BrowserStorage);
    let modal = AuthModal::new();

    let auth_ctx = AuthContext::new(store.clone(), modal.clone());
    provide_context(auth_ctx);

    let services = Services::new(ApiConfig::from_env(), store.clone());
    provide_context(services.clone());

    // 2. 启动时恢复会话，只执行一次，失败不影响页面
    let auth_api = services.auth();
    spawn_local(async move {
        let outcome = SessionRestorer::new().restore(&store, &auth_api).await;
        log::debug!("[App] session restore: {:?}", outcome);
        auth_ctx.refresh();
    });

    // 3. 认证信号与守卫注入路由服务
    let is_authenticated = auth_ctx.is_authenticated_signal();
    let guard = RouteGuard::new(auth_ctx.store(), modal);

    view! {
        <Router guard=guard is_authenticated=is_authenticated>
            <div class="min-h-screen bg-base-200">
                <Navbar />
                <main>
                    <RouterOutlet matcher=route_matcher />
                </main>
                <AuthModalView />
            </div>
        </Router>
    }
}
