use super::ApiClient;
use crate::config::ApiConfig;
use crate::error::{AppError, AppResult, ErrorKind};
use crate::request::HttpClient;
use crate::session::{SessionStore, SessionUser};
use crate::storage::SessionStorage;
use service_desk_shared::{AuthUser, LoginRequest, PATH_AUTH_ME, RegisterRequest, Role};

/// 登录失败时展示的统一文案
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// 认证服务
///
/// 登录成功后直接写入会话存储。
pub struct AuthApi<C: HttpClient, S: SessionStorage> {
    api: ApiClient<C>,
    session: SessionStore<S>,
}

impl<C: HttpClient, S: SessionStorage> AuthApi<C, S> {
    pub fn new(client: C, config: ApiConfig, session: SessionStore<S>) -> Self {
        Self {
            api: ApiClient::new(client, config),
            session,
        }
    }

    /// 登录，返回角色
    ///
    /// 凭据错误统一转换为 `INVALID_CREDENTIALS`，且不写入任何会话。
    pub async fn login(&self, email: &str, password: &str) -> AppResult<Role> {
        let req = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let resp = self.api.call("auth.login", &req).await.map_err(|e| {
            log::error!("login failed: {}", e);
            match e.kind {
                ErrorKind::Network => e,
                _ => AppError::new(ErrorKind::Authentication, INVALID_CREDENTIALS),
            }
        })?;

        let role = Role::parse(&resp.role).ok_or_else(|| {
            AppError::serialization(format!("unknown role: {}", resp.role)).in_op("auth.login")
        })?;
        self.session.login(&resp.token, &SessionUser::with_role(role))?;
        Ok(role)
    }

    /// 注册客户账户
    pub async fn register(&self, email: &str, password: &str) -> AppResult<()> {
        let req = RegisterRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
            role: Role::Customer,
        };
        self.api.call_discard("auth.register", &req).await
    }

    /// 获取当前用户的权威记录
    pub async fn me(&self) -> AppResult<AuthUser> {
        self.api.get_json("auth.me", PATH_AUTH_ME).await
    }

    pub fn logout(&self) {
        self.session.logout();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{HttpMethod, MockHttpClient};
    use crate::storage::MemoryStorage;
    use serde_json::json;

    const LOGIN: &str = "http://localhost:8765/api/auth/login";

    fn api(mock: &MockHttpClient) -> AuthApi<&MockHttpClient, MemoryStorage> {
        AuthApi::new(
            mock,
            ApiConfig::default(),
            SessionStore::new(MemoryStorage::new()),
        )
    }

    #[tokio::test]
    async fn test_login_stores_token_and_role() {
        let mock = MockHttpClient::new();
        mock.mock_response(
            HttpMethod::Post,
            LOGIN,
            200,
            json!({ "token": "jwt-1", "role": "TECHNICIAN" }),
        );
        let auth = api(&mock);

        let role = auth.login(" t@x.io ", "secret1").await.unwrap();

        assert_eq!(role, Role::Technician);
        assert_eq!(auth.session.token().as_deref(), Some("jwt-1"));
        assert_eq!(auth.session.current_role(), Some(Role::Technician));
        let body: serde_json::Value =
            serde_json::from_str(mock.last_request().unwrap().body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({ "email": "t@x.io", "password": "secret1" }));
    }

    #[tokio::test]
    async fn test_bad_credentials_leave_no_session() {
        let mock = MockHttpClient::new();
        mock.mock_response(HttpMethod::Post, LOGIN, 401, json!({ "message": "Bad" }));
        let auth = api(&mock);

        let err = auth.login("a@b.com", "wrong-pass").await.unwrap_err();

        assert_eq!(err.user_message(), INVALID_CREDENTIALS);
        assert!(!auth.session.is_authenticated());
    }

    #[tokio::test]
    async fn test_register_always_sends_customer_role() {
        let mock = MockHttpClient::new();
        mock.mock_response(
            HttpMethod::Post,
            "http://localhost:8765/api/auth/register",
            201,
            json!({ "id": "u1" }),
        );
        let auth = api(&mock);

        auth.register("new@x.io", "secret1").await.unwrap();

        let body = mock.last_request().unwrap().body.unwrap();
        assert!(body.contains("\"role\":\"CUSTOMER\""));
        assert!(!auth.session.is_authenticated());
    }
}
