//! REST 接口层
//!
//! 每个后端资源一个服务，都建立在 `ApiClient` 之上。
//! 服务只接受实现了 `HttpClient` 的客户端，不关心具体传输方式。

pub mod assignments;
pub mod auth;
pub mod bookings;
pub mod catalog;
pub mod technicians;

pub use assignments::AssignmentApi;
pub use auth::AuthApi;
pub use bookings::BookingApi;
pub use catalog::CatalogApi;
pub use technicians::TechnicianApi;

use crate::config::ApiConfig;
use crate::error::AppResult;
use crate::request::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use serde::Serialize;
use serde::de::DeserializeOwned;
use service_desk_shared::ApiRequest;

/// 基础 API 客户端：拼接地址、发送、检查状态码、解析响应
#[derive(Clone)]
pub struct ApiClient<C: HttpClient> {
    client: C,
    config: ApiConfig,
}

impl<C: HttpClient> ApiClient<C> {
    pub fn new(client: C, config: ApiConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn execute(&self, op: &str, req: HttpRequest) -> AppResult<HttpResponse> {
        let url = req.url.clone();
        let result = match self.client.send(req).await {
            Ok(resp) => resp.error_for_status(),
            Err(e) => Err(e),
        };
        result.map_err(|e| e.in_op_with(op, url))
    }

    /// GET 并解析 JSON
    pub async fn get_json<T: DeserializeOwned>(&self, op: &str, path: &str) -> AppResult<T> {
        let req = HttpRequest::get(&self.config.url(path));
        let resp = self.execute(op, req).await?;
        resp.json().map_err(|e| e.in_op(op))
    }

    /// 发送请求，忽略响应体
    pub async fn send<B: Serialize + ?Sized>(
        &self,
        op: &str,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> AppResult<()> {
        let mut req = HttpRequest::new(&self.config.url(path), method);
        if let Some(body) = body {
            req = req.with_json(body)?;
        }
        self.execute(op, req).await.map(|_| ())
    }

    /// 发送固定路径的请求并解析其声明的响应类型
    pub async fn call<R: ApiRequest>(&self, op: &str, request: &R) -> AppResult<R::Response> {
        let req = HttpRequest::new(&self.config.url(R::PATH), R::METHOD).with_json(request)?;
        let resp = self.execute(op, req).await?;
        resp.json().map_err(|e| e.in_op(op))
    }

    /// 发送固定路径的请求，忽略响应体
    pub async fn call_discard<R: ApiRequest>(&self, op: &str, request: &R) -> AppResult<()> {
        self.send(op, R::METHOD, R::PATH, Some(request)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::request::MockHttpClient;
    use serde_json::json;

    #[tokio::test]
    async fn test_failed_request_carries_operation_trace() {
        let mock = MockHttpClient::new();
        mock.mock_response(
            HttpMethod::Get,
            "http://localhost:8765/api/services",
            503,
            json!({ "message": "maintenance" }),
        );
        let api = ApiClient::new(&mock, ApiConfig::default());

        let err = api
            .get_json::<Vec<serde_json::Value>>("catalog.services", "/api/services")
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Backend);
        assert_eq!(err.status, Some(503));
        assert_eq!(err.user_message(), "maintenance");
        assert_eq!(err.spans()[0].operation, "catalog.services");
    }

    #[tokio::test]
    async fn test_transport_failure_is_network_error() {
        let mock = MockHttpClient::new();
        let api = ApiClient::new(&mock, ApiConfig::default());
        let err = api
            .send::<()>("x", HttpMethod::Put, "/api/bookings/1/cancel", None)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Network);
    }
}
