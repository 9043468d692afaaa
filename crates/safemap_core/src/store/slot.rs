use std::collections::HashMap;

use crate::error::AppError;

/// Browser-storage-shaped key/value substrate holding string values.
pub trait StorageSlot {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove_item(&mut self, key: &str) -> Result<(), AppError>;
}

/// In-process slot. An optional byte quota emulates a full browser store.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    items: HashMap<String, String>,
    quota_bytes: Option<usize>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            items: HashMap::new(),
            quota_bytes: Some(quota_bytes),
        }
    }

    /// Bytes used by every entry except `key`.
    fn used_bytes_excluding(&self, key: &str) -> usize {
        self.items
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl StorageSlot for MemorySlot {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        if let Some(quota) = self.quota_bytes {
            let needed = self.used_bytes_excluding(key) + key.len() + value.len();
            if needed > quota {
                return Err(AppError::new(
                    "STORAGE_QUOTA_EXCEEDED",
                    format!("Storage quota exceeded writing {key}"),
                )
                .with_details(format!("needed={needed}; quota={quota}")));
            }
        }
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), AppError> {
        self.items.remove(key);
        Ok(())
    }
}
