//! 路由守卫
//!
//! 每次导航提交前同步判定：放行、打开登录弹窗并拒绝、或重定向。

use crate::modal::{AuthMode, AuthModal};
use crate::route::AppRoute;
use crate::session::SessionStore;
use crate::storage::SessionStorage;
use service_desk_shared::Role;

/// 守卫判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// 未登录，登录弹窗已打开
    DenyWithModal,
    /// 角色不符
    DenyWithRedirect(AppRoute),
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allow)
    }
}

/// 纯判定逻辑，不产生副作用
///
/// 角色缺失时按不在允许集合处理。
pub fn evaluate(allowed_roles: &[Role], authenticated: bool, role: Option<Role>) -> GuardDecision {
    if !authenticated {
        return GuardDecision::DenyWithModal;
    }
    if allowed_roles.is_empty() {
        return GuardDecision::Allow;
    }
    match role {
        Some(role) if allowed_roles.contains(&role) => GuardDecision::Allow,
        _ => GuardDecision::DenyWithRedirect(AppRoute::forbidden_redirect()),
    }
}

pub struct RouteGuard<S: SessionStorage> {
    session: SessionStore<S>,
    modal: AuthModal,
}

impl<S: SessionStorage> Clone for RouteGuard<S> {
    fn clone(&self) -> Self {
        Self {
            session: self.session.clone(),
            modal: self.modal.clone(),
        }
    }
}

impl<S: SessionStorage> RouteGuard<S> {
    pub fn new(session: SessionStore<S>, modal: AuthModal) -> Self {
        Self { session, modal }
    }

    /// 判定导航；未登录时顺带打开登录弹窗
    pub fn check(&self, route: AppRoute) -> GuardDecision {
        if !route.requires_auth() {
            return GuardDecision::Allow;
        }
        let decision = evaluate(
            route.allowed_roles(),
            self.session.is_authenticated(),
            self.session.current_role(),
        );
        if decision == GuardDecision::DenyWithModal {
            self.modal.open(AuthMode::Login);
        }
        log::debug!("guard {} -> {:?}", route, decision);
        decision
    }
}
