//! HTTP 请求封装模块
//!
//! 基于 `gloo-net` 的 fetch 实现，作为核心库 `HttpClient` 在浏览器中的实现。

use gloo_net::http::{Method, RequestBuilder};
use service_desk::{AppError, AppResult, HttpClient, HttpMethod, HttpRequest, HttpResponse};

fn to_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// 浏览器 fetch 客户端
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchClient;

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, req: HttpRequest) -> AppResult<HttpResponse> {
        let mut builder = RequestBuilder::new(&req.url).method(to_method(req.method));
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| AppError::network(format!("请求构建失败: {}", e)).in_op("fetch.build"))?;

        let response = request
            .send()
            .await
            .map_err(|e| AppError::network(e.to_string()).in_op_with("fetch.send", &req.url))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::network(e.to_string()).in_op("fetch.read_body"))?;

        Ok(HttpResponse { status, body })
    }
}
