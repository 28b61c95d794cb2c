//! LocalStorage 封装模块
//!
//! 使用 `web_sys::Storage` 实现核心库的 `SessionStorage`。

use service_desk::{AppError, AppResult, SessionStorage};

/// 浏览器本地存储
///
/// 不持有 `web_sys::Storage`，每次操作时重新获取，因此可以跨线程共享。
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    /// 获取 LocalStorage 实例
    fn storage() -> AppResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| AppError::storage("无法获取 window 对象"))?
            .local_storage()
            .map_err(|e| AppError::storage(format!("{:?}", e)))?
            .ok_or_else(|| AppError::storage("localStorage 不可用"))
    }
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| AppError::storage(format!("{:?}", e)).in_op_with("storage.set", key))
    }

    fn delete(&self, key: &str) -> AppResult<()> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| AppError::storage(format!("{:?}", e)).in_op_with("storage.delete", key))
    }
}
