//! 会话存储
//!
//! 持久化访问令牌与最小用户信息。每次调用都重新读取存储，不做内存缓存，
//! 因此其他标签页或手动清除 `localStorage` 的结果会立即生效。

use crate::error::{AppError, AppResult};
use crate::storage::SessionStorage;
use serde::{Deserialize, Serialize};
use service_desk_shared::{AuthUser, Role};
use std::sync::Arc;

/// 令牌存储键，值为原始字符串
pub const TOKEN_KEY: &str = "access_token";
/// 用户存储键，值为 `SessionUser` 的 JSON
pub const USER_KEY: &str = "user";

/// 会话中的用户
///
/// 仅登录时只有 `role`，`id`/`email` 由会话恢复补齐。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: Role,
}

impl SessionUser {
    pub fn with_role(role: Role) -> Self {
        Self {
            id: None,
            email: None,
            role,
        }
    }
}

impl TryFrom<AuthUser> for SessionUser {
    type Error = AppError;

    fn try_from(user: AuthUser) -> AppResult<Self> {
        let role = Role::parse(&user.role)
            .ok_or_else(|| AppError::serialization(format!("unknown role: {}", user.role)))?;
        Ok(Self {
            id: Some(user.id),
            email: Some(user.email),
            role,
        })
    }
}

/// 某一时刻的会话快照
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<SessionUser>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }
}

/// 会话存储
///
/// 所有对会话的修改都经过 `login` / `logout` / `refresh_user`。
pub struct SessionStore<S: SessionStorage> {
    storage: Arc<S>,
}

impl<S: SessionStorage> Clone for SessionStore<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
        }
    }
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage: Arc::new(storage),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// 保存令牌与用户
    pub fn login(&self, token: &str, user: &SessionUser) -> AppResult<()> {
        let user_json = serde_json::to_string(user)?;
        self.storage
            .set(TOKEN_KEY, token)
            .map_err(|e| e.in_op("session.login"))?;
        self.storage
            .set(USER_KEY, &user_json)
            .map_err(|e| e.in_op("session.login"))?;
        log::info!("session started for role {}", user.role);
        Ok(())
    }

    /// 清除会话
    ///
    /// 先删令牌：即使用户记录删除失败，会话也已失效。
    pub fn logout(&self) {
        if let Err(e) = self.storage.delete(TOKEN_KEY) {
            log::error!("failed to remove token: {}", e);
        }
        if let Err(e) = self.storage.delete(USER_KEY) {
            log::warn!("failed to remove stored user: {}", e);
        }
        log::info!("session cleared");
    }

    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// 当前用户；没有令牌或记录无法解析时为 None
    pub fn current_user(&self) -> Option<SessionUser> {
        self.token()?;
        let raw = self.storage.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("ignoring unreadable stored user: {}", e);
                None
            }
        }
    }

    pub fn current_role(&self) -> Option<Role> {
        self.current_user().map(|u| u.role)
    }

    /// 覆盖用户记录，令牌不变
    pub fn refresh_user(&self, user: &SessionUser) -> AppResult<()> {
        let user_json = serde_json::to_string(user)?;
        self.storage
            .set(USER_KEY, &user_json)
            .map_err(|e| e.in_op("session.refresh_user"))
    }

    pub fn snapshot(&self) -> Session {
        match self.token() {
            Some(token) => Session {
                token: Some(token),
                user: self.current_user(),
            },
            None => Session::default(),
        }
    }
}
