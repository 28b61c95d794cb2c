//! 认证模块
//!
//! 会话的唯一来源是核心库的 `SessionStore`（写在 localStorage 中）。
//! 这里把它的快照和弹窗状态桥接成 Leptos 信号，供组件与路由订阅。

use crate::web::BrowserStorage;
use leptos::prelude::*;
use service_desk::observable::Subscription;
use service_desk_shared::Role;
use service_desk::{AuthMode, AuthModal, ModalState, Session, SessionStore};

pub type BrowserSession = SessionStore<BrowserStorage>;

/// 认证上下文
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 会话快照（只读）
    pub state: ReadSignal<Session>,
    set_state: WriteSignal<Session>,
    /// 弹窗状态（由 `AuthModal` 的订阅驱动）
    pub modal_state: ReadSignal<ModalState>,
    store: StoredValue<BrowserSession>,
    modal: StoredValue<AuthModal>,
    _subscriptions: StoredValue<Vec<Subscription>>,
}

impl AuthContext {
    pub fn new(store: BrowserSession, modal: AuthModal) -> Self {
        let (state, set_state) = signal(store.snapshot());
        let (modal_state, set_modal_state) = signal(modal.state());

        let subscriptions = vec![
            modal.subscribe_mode(move |mode| {
                set_modal_state.try_update(|s| s.mode = mode);
            }),
            modal.subscribe_open(move |open| {
                set_modal_state.try_update(|s| s.is_open = open);
            }),
        ];

        Self {
            state,
            set_state,
            modal_state,
            store: StoredValue::new(store),
            modal: StoredValue::new(modal),
            _subscriptions: StoredValue::new(subscriptions),
        }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated())
    }

    pub fn role_signal(&self) -> Signal<Option<Role>> {
        let state = self.state;
        Signal::derive(move || state.get().role())
    }

    pub fn store(&self) -> BrowserSession {
        self.store.get_value()
    }

    pub fn modal(&self) -> AuthModal {
        self.modal.get_value()
    }

    /// 重新读取存储中的会话
    pub fn refresh(&self) {
        self.set_state.set(self.store.with_value(|s| s.snapshot()));
    }

    pub fn open_modal(&self, mode: AuthMode) {
        self.modal.with_value(|m| m.open(mode));
    }

    pub fn close_modal(&self) {
        self.modal.with_value(|m| m.close());
    }

    /// 注销并清除状态
    ///
    /// 导航由路由服务的认证状态监听自动处理。
    pub fn logout(&self) {
        self.store.with_value(|s| s.logout());
        self.refresh();
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}
