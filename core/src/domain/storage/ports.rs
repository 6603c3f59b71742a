use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;

/// String values addressed by flat keys, the way a browser's local storage works.
///
/// Keys are made of ASCII letters, digits, `.`, `_` and `-`.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, CoreError>> + Send;

    fn set(&self, key: &str, value: String) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Returns whether the key existed.
    fn delete(&self, key: &str) -> impl Future<Output = Result<bool, CoreError>> + Send;

    /// Every `(key, value)` pair whose key starts with `prefix`, ordered by key.
    fn list(
        &self,
        prefix: &str,
    ) -> impl Future<Output = Result<Vec<(String, String)>, CoreError>> + Send;
}

pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_charset() {
        assert!(is_valid_key("dieta_alimentos.0190a1b2-c3d4"));
        assert!(!is_valid_key(""));
        assert!(!is_valid_key("../etc/passwd"));
        assert!(!is_valid_key("dieta diario"));
    }
}
