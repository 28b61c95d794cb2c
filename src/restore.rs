//! 启动时的会话恢复
//!
//! 有令牌时拉取一次 `/api/auth/me` 刷新用户记录。失败只记录日志，
//! 保留原有会话，由后续请求的 401 暴露过期问题。

use crate::api::AuthApi;
use crate::error::AppError;
use crate::request::HttpClient;
use crate::session::{SessionStore, SessionUser};
use crate::storage::SessionStorage;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// 没有令牌，未发请求
    NoSession,
    /// 用户记录已刷新
    Refreshed(SessionUser),
    /// 刷新失败，保留原会话
    KeptStale(AppError),
    /// 已经执行过
    AlreadyRan,
}

/// 一次性的会话恢复器
#[derive(Debug, Default)]
pub struct SessionRestorer {
    started: AtomicBool,
}

impl SessionRestorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_run(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }

    pub async fn restore<C: HttpClient, S: SessionStorage>(
        &self,
        session: &SessionStore<S>,
        auth: &AuthApi<C, S>,
    ) -> RestoreOutcome {
        if self.started.swap(true, Ordering::SeqCst) {
            return RestoreOutcome::AlreadyRan;
        }
        if !session.is_authenticated() {
            log::info!("no stored session to restore");
            return RestoreOutcome::NoSession;
        }

        let result = match auth.me().await {
            Ok(user) => SessionUser::try_from(user),
            Err(e) => Err(e),
        };
        let user = match result {
            Ok(user) => user,
            Err(e) => {
                log::warn!("session restore failed, keeping stored session: {}", e);
                return RestoreOutcome::KeptStale(e);
            }
        };

        match session.refresh_user(&user) {
            Ok(()) => {
                log::info!("session restored for role {}", user.role);
                RestoreOutcome::Refreshed(user)
            }
            Err(e) => {
                log::error!("failed to store refreshed user: {}", e);
                RestoreOutcome::KeptStale(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::interceptor::AuthorizedClient;
    use crate::request::{HttpMethod, MockHttpClient};
    use crate::session::{TOKEN_KEY, USER_KEY};
    use crate::storage::MemoryStorage;
    use serde_json::json;
    use service_desk_shared::Role;

    const ME: &str = "http://localhost:8765/api/auth/me";

    fn logged_in() -> SessionStore<MemoryStorage> {
        SessionStore::new(MemoryStorage::with_entries([
            (TOKEN_KEY, "tok-1"),
            (USER_KEY, "{\"role\":\"CUSTOMER\"}"),
        ]))
    }

    #[tokio::test]
    async fn test_no_token_makes_no_request() {
        let mock = MockHttpClient::new();
        let session = SessionStore::new(MemoryStorage::new());
        let auth = AuthApi::new(&mock, ApiConfig::default(), session.clone());

        let outcome = SessionRestorer::new().restore(&session, &auth).await;

        assert_eq!(outcome, RestoreOutcome::NoSession);
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_success_overwrites_user_and_keeps_token() {
        let mock = MockHttpClient::new();
        mock.mock_response(
            HttpMethod::Get,
            ME,
            200,
            json!({ "id": "u-1", "email": "c@x.io", "role": "CUSTOMER" }),
        );
        let session = logged_in();
        let client = AuthorizedClient::new(&mock, session.clone());
        let auth = AuthApi::new(client, ApiConfig::default(), session.clone());

        let outcome = SessionRestorer::new().restore(&session, &auth).await;

        let user = session.current_user().unwrap();
        assert_eq!(outcome, RestoreOutcome::Refreshed(user.clone()));
        assert_eq!(user.email.as_deref(), Some("c@x.io"));
        assert_eq!(user.role, Role::Customer);
        assert_eq!(session.token().as_deref(), Some("tok-1"));
        assert_eq!(
            mock.last_request().unwrap().header("Authorization"),
            Some("Bearer tok-1")
        );
    }

    #[tokio::test]
    async fn test_failure_keeps_stale_session() {
        for status in [401u16, 500] {
            let mock = MockHttpClient::new();
            mock.mock_response(HttpMethod::Get, ME, status, json!({ "message": "nope" }));
            let session = logged_in();
            let auth = AuthApi::new(&mock, ApiConfig::default(), session.clone());

            let outcome = SessionRestorer::new().restore(&session, &auth).await;

            assert!(matches!(outcome, RestoreOutcome::KeptStale(_)));
            assert_eq!(session.token().as_deref(), Some("tok-1"));
            assert_eq!(session.current_role(), Some(Role::Customer));
        }
    }

    #[tokio::test]
    async fn test_network_error_keeps_stale_session() {
        let mock = MockHttpClient::new();
        let session = logged_in();
        let auth = AuthApi::new(&mock, ApiConfig::default(), session.clone());

        let outcome = SessionRestorer::new().restore(&session, &auth).await;

        assert!(matches!(outcome, RestoreOutcome::KeptStale(_)));
        assert!(session.is_authenticated());
    }

    #[tokio::test]
    async fn test_restore_runs_once() {
        let mock = MockHttpClient::new();
        mock.mock_response(
            HttpMethod::Get,
            ME,
            200,
            json!({ "id": "u-1", "email": "c@x.io", "role": "CUSTOMER" }),
        );
        let session = logged_in();
        let auth = AuthApi::new(&mock, ApiConfig::default(), session.clone());
        let restorer = SessionRestorer::new();

        restorer.restore(&session, &auth).await;
        let second = restorer.restore(&session, &auth).await;

        assert_eq!(second, RestoreOutcome::AlreadyRan);
        assert_eq!(mock.request_count(), 1);
        assert!(restorer.has_run());
    }
}
