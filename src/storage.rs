//! 键值存储抽象
//!
//! 会话数据只通过 `SessionStorage` 读写，浏览器中由 `localStorage` 实现，
//! 测试和非浏览器宿主使用 `MemoryStorage`。

use crate::error::AppResult;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// 字符串键值存储
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
    fn delete(&self, key: &str) -> AppResult<()>;
}

/// 内存存储
#[derive(Debug, Default)]
pub struct MemoryStorage {
    data: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// 预置数据，模拟上次会话遗留的内容
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let data = entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            data: Mutex::new(data),
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.data.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.data
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.data
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> AppResult<()> {
        self.data
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_basic_ops() {
        let storage = MemoryStorage::with_entries([("a", "1")]);
        assert_eq!(storage.get("a").as_deref(), Some("1"));
        storage.set("b", "2").unwrap();
        storage.delete("a").unwrap();
        assert_eq!(storage.get("a"), None);
        assert_eq!(storage.len(), 1);
        // 删除不存在的键不报错
        storage.delete("missing").unwrap();
    }
}
