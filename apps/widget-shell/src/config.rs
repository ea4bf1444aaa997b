//! Shell configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Command line flags (see [`crate::cli`]) override it afterwards.
//!
//! | variable               | default | meaning                              |
//! |------------------------|---------|--------------------------------------|
//! | `WIDGET_SHOP_DELIVERY` | `false` | add tiered delivery charges to total |
//! | `WIDGET_SHOP_PROMPT`   | `"> "`  | prompt printed before each command   |
//! | `WIDGET_SHOP_JSON`     | `false` | render `total`/`widgets` as JSON     |

use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_PROMPT: &str = "> ";

/// Shell configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Apply the standard delivery charges to basket totals
    pub delivery_enabled: bool,

    /// Prompt shown before reading a command
    pub prompt: String,

    /// Render machine-readable output
    pub json_output: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            delivery_enabled: false,
            prompt: DEFAULT_PROMPT.to_string(),
            json_output: false,
        }
    }
}

impl ShellConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ShellConfig::default();

        let config = ShellConfig {
            delivery_enabled: match lookup("WIDGET_SHOP_DELIVERY") {
                Some(value) => parse_bool("WIDGET_SHOP_DELIVERY", &value)?,
                None => defaults.delivery_enabled,
            },

            prompt: lookup("WIDGET_SHOP_PROMPT").unwrap_or(defaults.prompt),

            json_output: match lookup("WIDGET_SHOP_JSON") {
                Some(value) => parse_bool("WIDGET_SHOP_JSON", &value)?,
                None => defaults.json_output,
            },
        };

        Ok(config)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue(key.to_string())),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ShellConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ShellConfig::default());
        assert!(!config.delivery_enabled);
        assert_eq!(config.prompt, "> ");
    }

    #[test]
    fn test_reads_values() {
        let config = ShellConfig::from_lookup(lookup(&[
            ("WIDGET_SHOP_DELIVERY", "yes"),
            ("WIDGET_SHOP_PROMPT", "basket$ "),
            ("WIDGET_SHOP_JSON", "1"),
        ]))
        .unwrap();
        assert!(config.delivery_enabled);
        assert!(config.json_output);
        assert_eq!(config.prompt, "basket$ ");
    }

    #[test]
    fn test_invalid_bool() {
        let err = ShellConfig::from_lookup(lookup(&[("WIDGET_SHOP_DELIVERY", "maybe")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for WIDGET_SHOP_DELIVERY");
    }
}
