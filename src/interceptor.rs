//! 请求鉴权头附加
//!
//! 登录、注册请求以及本地无 token 时原样放行，其余请求附加 `Authorization: Bearer <token>`。

use crate::error::AppResult;
use crate::request::{HttpClient, HttpRequest, HttpResponse};
use crate::session::SessionStore;
use crate::storage::SessionStorage;
use service_desk_shared::{AUTH_SCHEME_BEARER, HEADER_AUTHORIZATION};

/// 不携带令牌的接口后缀
const PUBLIC_SUFFIXES: [&str; 2] = ["/auth/login", "/auth/register"];

fn is_public_endpoint(url: &str) -> bool {
    let path = url.split('?').next().unwrap_or_default();
    PUBLIC_SUFFIXES.iter().any(|s| path.ends_with(s))
}

/// 为请求附加 `Authorization: Bearer <token>`
///
/// 每次发送时重新读取令牌。登录、注册接口和无令牌时原样发送。
pub struct AuthorizedClient<C: HttpClient, S: SessionStorage> {
    inner: C,
    session: SessionStore<S>,
}

impl<C: HttpClient + Clone, S: SessionStorage> Clone for AuthorizedClient<C, S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            session: self.session.clone(),
        }
    }
}

impl<C: HttpClient, S: SessionStorage> AuthorizedClient<C, S> {
    pub fn new(inner: C, session: SessionStore<S>) -> Self {
        Self { inner, session }
    }

    pub fn authorize(&self, req: HttpRequest) -> HttpRequest {
        if is_public_endpoint(&req.url) {
            return req;
        }
        match self.session.token() {
            Some(token) => req.with_header(
                HEADER_AUTHORIZATION,
                &format!("{} {}", AUTH_SCHEME_BEARER, token),
            ),
            None => req,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl<C: HttpClient, S: SessionStorage> HttpClient for AuthorizedClient<C, S> {
    async fn send(&self, req: HttpRequest) -> AppResult<HttpResponse> {
        let req = self.authorize(req);
        self.inner.send(req).await
    }
}
