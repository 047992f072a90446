//! Session flag of the console
//!
//! The console has one hardcoded account. Logging in compares the typed
//! credentials with the configured pair and stores `"true"` under the
//! configured key; logging out removes the key. There is no token and no
//! hashing.

use crate::shared::config::AuthConfig;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;

const FLAG_VALUE: &str = "true";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Usuario o contraseña incorrectos")]
    InvalidCredentials,

    #[error("No se pudo acceder al almacenamiento local: {0}")]
    Storage(String),
}

/// Durable key/value storage holding the session flag
pub trait SessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, AuthError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), AuthError>;
    fn remove_item(&self, key: &str) -> Result<(), AuthError>;
}

/// Storage kept in memory, used by tests and as a fallback when the browser
/// refuses access to `localStorage`
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, AuthError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), AuthError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), AuthError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Authentication state with explicit init (`restore`) and teardown
/// (`logout`)
#[derive(Debug)]
pub struct AuthSession<S: SessionStorage> {
    storage: S,
    config: AuthConfig,
    authenticated: bool,
}

impl<S: SessionStorage> AuthSession<S> {
    /// Read the flag left by a previous login. An unreadable storage counts
    /// as logged out.
    pub fn restore(storage: S, config: AuthConfig) -> Self {
        let authenticated = match storage.get_item(&config.storage_key) {
            Ok(value) => value.as_deref() == Some(FLAG_VALUE),
            Err(e) => {
                log::warn!("Session flag could not be read: {}", e);
                false
            }
        };
        Self {
            storage,
            config,
            authenticated,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn login(&mut self, request: &LoginRequest) -> Result<(), AuthError> {
        if request.username != self.config.username || request.password != self.config.password
        {
            log::warn!("Rejected login for '{}'", request.username);
            return Err(AuthError::InvalidCredentials);
        }
        self.storage.set_item(&self.config.storage_key, FLAG_VALUE)?;
        self.authenticated = true;
        log::info!("User '{}' logged in", request.username);
        Ok(())
    }

    pub fn logout(&mut self) -> Result<(), AuthError> {
        self.authenticated = false;
        self.storage.remove_item(&self.config.storage_key)?;
        log::info!("User logged out");
        Ok(())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::ConsoleConfig;

    fn session() -> AuthSession<MemoryStorage> {
        AuthSession::restore(MemoryStorage::default(), ConsoleConfig::default().auth)
    }

    fn credentials(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_login_sets_flag() {
        let mut session = session();
        assert!(!session.is_authenticated());
        session.login(&credentials("user.pruebas", "vayatela")).unwrap();
        assert!(session.is_authenticated());
        assert_eq!(
            session.storage().get_item("temp_auth").unwrap().as_deref(),
            Some("true")
        );
    }

    #[test]
    fn test_exact_match_only() {
        let mut session = session();
        for (u, p) in [
            ("user.pruebas", "Vayatela"),
            ("user.pruebas ", "vayatela"),
            ("", ""),
        ] {
            assert_eq!(session.login(&credentials(u, p)), Err(AuthError::InvalidCredentials));
        }
        assert!(!session.is_authenticated());
        assert_eq!(session.storage().get_item("temp_auth").unwrap(), None);
    }

    #[test]
    fn test_restore_and_logout() {
        let storage = MemoryStorage::default();
        storage.set_item("temp_auth", "true").unwrap();
        let mut session = AuthSession::restore(storage, ConsoleConfig::default().auth);
        assert!(session.is_authenticated());

        session.logout().unwrap();
        assert!(!session.is_authenticated());
        assert_eq!(session.storage().get_item("temp_auth").unwrap(), None);
    }

    #[test]
    fn test_other_flag_values_are_not_a_session() {
        let storage = MemoryStorage::default();
        storage.set_item("temp_auth", "yes").unwrap();
        let session = AuthSession::restore(storage, ConsoleConfig::default().auth);
        assert!(!session.is_authenticated());
    }
}
