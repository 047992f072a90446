use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ConsoleConfig {
    pub console: ListConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListConfig {
    /// Rows per table page
    pub items_per_page: usize,
    /// Artificial delay of the simulated save, in milliseconds
    pub save_delay_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AuthConfig {
    /// localStorage key holding the session flag
    pub storage_key: String,
    pub username: String,
    pub password: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

impl ConsoleConfig {
    /// Parse a TOML document and check the values that the list views rely on
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let config: ConsoleConfig =
            toml::from_str(contents).context("invalid console configuration")?;
        if config.console.items_per_page == 0 {
            anyhow::bail!("console.items_per_page must be at least 1");
        }
        if config.auth.storage_key.trim().is_empty() {
            anyhow::bail!("auth.storage_key must not be empty");
        }
        Ok(config)
    }
}

/// Load the embedded configuration
pub fn load_config() -> anyhow::Result<ConsoleConfig> {
    log::debug!("Using embedded console configuration");
    ConsoleConfig::from_toml(DEFAULT_CONFIG)
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            console: ListConfig {
                items_per_page: 10,
                save_delay_ms: 1000,
            },
            auth: AuthConfig {
                storage_key: "temp_auth".to_string(),
                username: "user.pruebas".to_string(),
                password: "vayatela".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config();
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config, ConsoleConfig::default());
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let raw = r#"
[console]
items_per_page = 0
save_delay_ms = 10

[auth]
storage_key = "k"
username = "u"
password = "p"
"#;
        let err = ConsoleConfig::from_toml(raw).unwrap_err();
        assert!(err.to_string().contains("items_per_page"));
    }

    #[test]
    fn test_missing_section_is_an_error() {
        assert!(ConsoleConfig::from_toml("[console]\nitems_per_page = 5\n").is_err());
    }
}
