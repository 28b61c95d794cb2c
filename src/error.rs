use std::fmt;

// =========================================================
// 错误类型枚举
// =========================================================

/// 错误类型枚举
/// 决定错误如何展示给用户，以及是否需要调用后端
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 表单校验失败，不会发出请求
    Validation,
    /// 401: 未登录或凭据无效
    Authentication,
    /// 403: 角色不允许
    Authorization,
    /// 请求未能到达后端
    Network,
    /// 其他非 2xx 响应
    Backend,
    /// JSON 解析或序列化错误
    Serialization,
    /// 浏览器存储读写失败
    Storage,
}

impl ErrorKind {
    pub fn error_code(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "VALIDATION",
            ErrorKind::Authentication => "UNAUTHENTICATED",
            ErrorKind::Authorization => "FORBIDDEN",
            ErrorKind::Network => "NETWORK",
            ErrorKind::Backend => "BACKEND",
            ErrorKind::Serialization => "SERIALIZATION",
            ErrorKind::Storage => "STORAGE",
        }
    }

    /// 根据 HTTP 状态码归类
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => ErrorKind::Authentication,
            403 => ErrorKind::Authorization,
            _ => ErrorKind::Backend,
        }
    }
}

// =========================================================
// 错误上下文追踪
// =========================================================

/// 错误追踪片段，如 `bookings.reschedule(b-12)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorSpan {
    pub operation: String,
    pub detail: Option<String>,
}

// =========================================================
// 核心错误类型
// =========================================================

/// 前端统一错误
///
/// - kind: 错误类型
/// - message: 可展示的错误消息（后端的 `message` 优先）
/// - status: 后端返回的 HTTP 状态码（如果有）
/// - spans: 调用追踪
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppError {
    pub kind: ErrorKind,
    pub message: String,
    pub status: Option<u16>,
    spans: Vec<ErrorSpan>,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            spans: Vec::new(),
        }
    }

    // --- Convenience constructors ---

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Network, message)
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization, message)
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Storage, message)
    }

    /// 由非 2xx 响应构造
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            ..Self::new(ErrorKind::from_status(status), message)
        }
    }

    // --- Context builders ---

    pub fn in_op(mut self, operation: impl Into<String>) -> Self {
        self.spans.push(ErrorSpan {
            operation: operation.into(),
            detail: None,
        });
        self
    }

    pub fn in_op_with(mut self, operation: impl Into<String>, detail: impl Into<String>) -> Self {
        self.spans.push(ErrorSpan {
            operation: operation.into(),
            detail: Some(detail.into()),
        });
        self
    }

    // --- Accessors ---

    pub fn error_code(&self) -> &'static str {
        self.kind.error_code()
    }

    pub fn spans(&self) -> &[ErrorSpan] {
        &self.spans
    }

    /// 横幅/弹窗中展示的文本
    pub fn user_message(&self) -> &str {
        &self.message
    }

    /// 用户消息，空消息时使用给定的兜底文本
    pub fn user_message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.message.trim().is_empty() {
            fallback
        } else {
            &self.message
        }
    }
}

// =========================================================
// Display & Error trait 实现
// =========================================================

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.error_code(), self.message)?;
        if let Some(status) = self.status {
            write!(f, " (HTTP {})", status)?;
        }
        if !self.spans.is_empty() {
            write!(f, " | trace: ")?;
            for (i, span) in self.spans.iter().enumerate() {
                if i > 0 {
                    write!(f, " -> ")?;
                }
                write!(f, "{}", span.operation)?;
                if let Some(detail) = &span.detail {
                    write!(f, "({})", detail)?;
                }
            }
        }
        Ok(())
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::serialization(e.to_string())
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_maps_to_kind() {
        assert_eq!(AppError::from_status(401, "x").kind, ErrorKind::Authentication);
        assert_eq!(AppError::from_status(403, "x").kind, ErrorKind::Authorization);
        assert_eq!(AppError::from_status(500, "x").kind, ErrorKind::Backend);
        assert_eq!(AppError::from_status(404, "x").status, Some(404));
    }

    #[test]
    fn test_display_includes_trace() {
        let err = AppError::from_status(500, "boom")
            .in_op("http.send")
            .in_op_with("bookings.cancel", "b-1");
        assert_eq!(
            err.to_string(),
            "[BACKEND] boom (HTTP 500) | trace: http.send -> bookings.cancel(b-1)"
        );
    }

    #[test]
    fn test_user_message_fallback() {
        let err = AppError::network("");
        assert_eq!(err.user_message_or("Failed to load"), "Failed to load");
        let err = AppError::network("offline");
        assert_eq!(err.user_message_or("Failed to load"), "offline");
    }
}
