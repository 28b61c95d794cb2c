use crate::error::{AppError, AppResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use service_desk_shared::ErrorBody;
use std::collections::HashMap;

pub use service_desk_shared::HttpMethod;

#[cfg(test)]
use std::cell::RefCell;

// =========================================================
// 核心抽象层 (HTTP Interface Abstraction)
// =========================================================

/// 通用 HTTP 请求结构
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(url: &str, method: HttpMethod) -> Self {
        Self {
            url: url.to_string(),
            method,
            headers: HashMap::new(),
            body: None,
        }
    }

    pub fn get(url: &str) -> Self {
        Self::new(url, HttpMethod::Get)
    }

    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.insert(key.to_string(), value.to_string());
        self
    }

    /// 序列化为 JSON 请求体，并设置 Content-Type
    pub fn with_json<T: Serialize + ?Sized>(mut self, body: &T) -> AppResult<Self> {
        self.body = Some(serde_json::to_string(body)?);
        Ok(self.with_header("Content-Type", "application/json"))
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }
}

/// 通用 HTTP 响应结构
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> AppResult<T> {
        serde_json::from_str(&self.body).map_err(AppError::from)
    }

    /// 非 2xx 时转换为错误，优先使用后端返回的 `message`
    pub fn error_for_status(self) -> AppResult<Self> {
        if self.is_success() {
            return Ok(self);
        }
        let message = serde_json::from_str::<ErrorBody>(&self.body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_default();
        Err(AppError::from_status(self.status, message))
    }
}

/// HTTP 客户端特性 (Trait)
/// 浏览器环境下 fetch 的 Future 不是 Send 的
#[async_trait::async_trait(?Send)]
pub trait HttpClient {
    async fn send(&self, req: HttpRequest) -> AppResult<HttpResponse>;
}

#[async_trait::async_trait(?Send)]
impl<'a, T: HttpClient + ?Sized> HttpClient for &'a T {
    async fn send(&self, req: HttpRequest) -> AppResult<HttpResponse> {
        (**self).send(req).await
    }
}

// =========================================================
// 测试工具: MockHttpClient
// =========================================================

#[cfg(test)]
pub struct MockHttpClient {
    // ("METHOD url", (Status, Response Body))
    responses: RefCell<HashMap<String, (u16, String)>>,
    // 记录发出的请求
    pub requests: RefCell<Vec<HttpRequest>>,
}

#[cfg(test)]
impl MockHttpClient {
    pub fn new() -> Self {
        Self {
            responses: RefCell::new(HashMap::new()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn mock_response(
        &self,
        method: HttpMethod,
        url: &str,
        status: u16,
        body: serde_json::Value,
    ) {
        self.responses.borrow_mut().insert(
            format!("{} {}", method.as_str(), url),
            (status, body.to_string()),
        );
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.borrow().last().cloned()
    }
}

#[cfg(test)]
#[async_trait::async_trait(?Send)]
impl HttpClient for MockHttpClient {
    async fn send(&self, req: HttpRequest) -> AppResult<HttpResponse> {
        let key = format!("{} {}", req.method.as_str(), req.url);
        self.requests.borrow_mut().push(req);

        let responses = self.responses.borrow();
        match responses.get(&key) {
            Some((status, body)) => Ok(HttpResponse {
                status: *status,
                body: body.clone(),
            }),
            None => Err(AppError::network(format!("no route for {}", key))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_with_json_sets_body_and_content_type() {
        let req = HttpRequest::new("http://x/api", HttpMethod::Post)
            .with_json(&json!({ "a": 1 }))
            .unwrap();
        assert_eq!(req.body.as_deref(), Some("{\"a\":1}"));
        assert_eq!(req.header("Content-Type"), Some("application/json"));
    }

    #[test]
    fn test_error_for_status_surfaces_backend_message() {
        let resp = HttpResponse {
            status: 409,
            body: json!({ "message": "Slot already taken" }).to_string(),
        };
        let err = resp.error_for_status().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Backend);
        assert_eq!(err.user_message(), "Slot already taken");

        let resp = HttpResponse {
            status: 401,
            body: "Unauthorized".into(),
        };
        let err = resp.error_for_status().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
        assert_eq!(err.user_message(), "");
    }
}
