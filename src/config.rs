// =========================================================
// 运行时配置 (Runtime Configuration)
// =========================================================

/// 后端地址默认值，构建时未设置 `SERVICE_DESK_API_URL` 时使用
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8765";

/// API 配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// 从编译期环境变量读取，读不到就用默认值
    pub fn from_env() -> Self {
        match option_env!("SERVICE_DESK_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    /// 拼接完整 URL
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let cfg = ApiConfig::new("https://api.example.com/");
        assert_eq!(cfg.base_url, "https://api.example.com");
        assert_eq!(cfg.url("/api/services"), "https://api.example.com/api/services");
        assert_eq!(cfg.url("api/services"), "https://api.example.com/api/services");
        assert_eq!(ApiConfig::default().url("/x"), "http://localhost:8765/x");
    }
}
