//! 登录/注册弹窗协调器
//!
//! 进程内唯一的弹窗状态，由路由守卫、导航栏和首页共同驱动。

use crate::observable::{Observable, Subscription};

/// 弹窗模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

/// 弹窗状态快照
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModalState {
    pub is_open: bool,
    pub mode: AuthMode,
}

#[derive(Clone)]
pub struct AuthModal {
    is_open: Observable<bool>,
    mode: Observable<AuthMode>,
}

impl Default for AuthModal {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthModal {
    pub fn new() -> Self {
        Self {
            is_open: Observable::new(false),
            mode: Observable::new(AuthMode::Login),
        }
    }

    /// 先发布模式，再发布打开
    ///
    /// 已打开时再次调用只替换模式。
    pub fn open(&self, mode: AuthMode) {
        self.mode.set(mode);
        self.is_open.set(true);
    }

    /// 关闭弹窗，模式保持不变
    pub fn close(&self) {
        self.is_open.set(false);
    }

    pub fn is_open(&self) -> bool {
        self.is_open.get()
    }

    pub fn mode(&self) -> AuthMode {
        self.mode.get()
    }

    pub fn state(&self) -> ModalState {
        ModalState {
            is_open: self.is_open(),
            mode: self.mode(),
        }
    }

    pub fn subscribe_open(&self, f: impl Fn(bool) + Send + Sync + 'static) -> Subscription {
        self.is_open.subscribe(move |v| f(*v))
    }

    pub fn subscribe_mode(&self, f: impl Fn(AuthMode) + Send + Sync + 'static) -> Subscription {
        self.mode.subscribe(move |v| f(*v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, PartialEq)]
    enum Event {
        Open(bool),
        Mode(AuthMode),
    }

    fn record(modal: &AuthModal) -> (Arc<Mutex<Vec<Event>>>, Vec<Subscription>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let l1 = Arc::clone(&log);
        let l2 = Arc::clone(&log);
        let subs = vec![
            modal.subscribe_open(move |v| l1.lock().unwrap().push(Event::Open(v))),
            modal.subscribe_mode(move |m| l2.lock().unwrap().push(Event::Mode(m))),
        ];
        log.lock().unwrap().clear();
        (log, subs)
    }

    #[test]
    fn test_open_publishes_mode_before_open_flag() {
        let modal = AuthModal::new();
        let (log, _subs) = record(&modal);

        modal.open(AuthMode::Register);

        assert_eq!(
            *log.lock().unwrap(),
            vec![Event::Mode(AuthMode::Register), Event::Open(true)]
        );
    }

    #[test]
    fn test_close_keeps_mode() {
        let modal = AuthModal::new();
        modal.open(AuthMode::Register);
        modal.close();
        assert_eq!(
            modal.state(),
            ModalState {
                is_open: false,
                mode: AuthMode::Register
            }
        );
    }

    #[test]
    fn test_open_while_open_replaces_mode() {
        let modal = AuthModal::new();
        modal.open(AuthMode::Login);
        modal.open(AuthMode::Register);
        assert!(modal.is_open());
        assert_eq!(modal.mode(), AuthMode::Register);
    }

    #[test]
    fn test_clones_share_state() {
        let modal = AuthModal::new();
        let other = modal.clone();
        other.open(AuthMode::Login);
        assert!(modal.is_open());
    }
}
