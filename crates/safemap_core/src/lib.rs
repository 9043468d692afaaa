pub mod catalog;
pub mod db;
pub mod demo;
pub mod domain;
pub mod error;
pub mod normalize;
pub mod ops;
pub mod store;
pub mod validate;

#[cfg(test)]
mod tests {
    use super::error::AppError;

    #[test]
    fn app_error_is_structured() {
        let err = AppError::storage_write("slot", "quota").with_retryable(false);
        assert_eq!(err.code, "STORAGE_WRITE_FAILED");
        assert_eq!(err.details.as_deref(), Some("quota"));
        assert!(!err.retryable);
        assert_eq!(err.to_string(), "[STORAGE_WRITE_FAILED] Failed to write storage slot slot (quota)");
    }
}
