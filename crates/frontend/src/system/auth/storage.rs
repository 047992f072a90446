use contracts::system::auth::{AuthError, SessionStorage};
use web_sys::window;

fn get_local_storage() -> Result<web_sys::Storage, AuthError> {
    window()
        .ok_or_else(|| AuthError::Storage("no window".to_string()))?
        .local_storage()
        .map_err(|e| AuthError::Storage(format!("{:?}", e)))?
        .ok_or_else(|| AuthError::Storage("localStorage is disabled".to_string()))
}

/// Browser `localStorage`, looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl SessionStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, AuthError> {
        get_local_storage()?
            .get_item(key)
            .map_err(|e| AuthError::Storage(format!("{:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), AuthError> {
        get_local_storage()?
            .set_item(key, value)
            .map_err(|e| AuthError::Storage(format!("{:?}", e)))
    }

    fn remove_item(&self, key: &str) -> Result<(), AuthError> {
        get_local_storage()?
            .remove_item(key)
            .map_err(|e| AuthError::Storage(format!("{:?}", e)))
    }
}
