//! Application settings read from the environment
//!
//! Cloud mode needs all three `TOMEFORGE_CLOUD_*` variables. If any is
//! missing or blank the app runs in free mode and nothing is persisted past
//! process exit.

use std::fmt;

use serde::{Deserialize, Serialize};
use tomeforge_domain::{DomainError, Theme};
use validator::{Validate, ValidationError, ValidationErrors};

pub const ENV_CLOUD_API_KEY: &str = "TOMEFORGE_CLOUD_API_KEY";
pub const ENV_CLOUD_PROJECT_ID: &str = "TOMEFORGE_CLOUD_PROJECT_ID";
pub const ENV_CLOUD_AUTH_DOMAIN: &str = "TOMEFORGE_CLOUD_AUTH_DOMAIN";
pub const ENV_DEFAULT_THEME: &str = "TOMEFORGE_DEFAULT_THEME";
pub const ENV_LOG: &str = "TOMEFORGE_LOG";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Invalid cloud configuration: {0}")]
    Cloud(#[from] ValidationErrors),
    #[error("Invalid TOMEFORGE_DEFAULT_THEME: {0}")]
    Theme(#[from] DomainError),
}

/// Connection details for the hosted auth/database service.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CloudConfig {
    #[validate(length(min = 1))]
    pub api_key: String,
    #[validate(length(min = 1))]
    pub project_id: String,
    /// Bare host, e.g. `tomeforge.example.com`
    #[validate(length(min = 1), custom(function = "validate_auth_domain"))]
    pub auth_domain: String,
}

// Keeps the API key out of logs.
impl fmt::Debug for CloudConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloudConfig")
            .field("api_key", &"<redacted>")
            .field("project_id", &self.project_id)
            .field("auth_domain", &self.auth_domain)
            .finish()
    }
}

fn validate_auth_domain(domain: &str) -> Result<(), ValidationError> {
    if domain.contains("://") || domain.contains('/') || domain.contains(char::is_whitespace) {
        let mut error = ValidationError::new("auth_domain");
        error.message = Some("auth domain must be a bare host without scheme or path".into());
        return Err(error);
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    /// `None` means free mode
    pub cloud: Option<CloudConfig>,
    /// Theme given to newly created content
    pub default_theme: Theme,
    /// Log filter used when `RUST_LOG` is unset
    pub log_filter: Option<String>,
}

impl AppSettings {
    /// Reads settings from process environment variables.
    ///
    /// Call after loading `.env` files.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let cloud = match (
            read(ENV_CLOUD_API_KEY),
            read(ENV_CLOUD_PROJECT_ID),
            read(ENV_CLOUD_AUTH_DOMAIN),
        ) {
            (Some(api_key), Some(project_id), Some(auth_domain)) => {
                let config = CloudConfig {
                    api_key,
                    project_id,
                    auth_domain,
                };
                config.validate()?;
                Some(config)
            }
            _ => None,
        };

        let default_theme = match read(ENV_DEFAULT_THEME) {
            Some(theme) => theme.parse()?,
            None => Theme::default(),
        };

        Ok(Self {
            cloud,
            default_theme,
            log_filter: read(ENV_LOG),
        })
    }

    pub fn is_cloud_mode(&self) -> bool {
        self.cloud.is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn settings(vars: &[(&str, &str)]) -> Result<AppSettings, SettingsError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        AppSettings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_empty_environment_is_free_mode() {
        let settings = settings(&[]).unwrap();
        assert!(!settings.is_cloud_mode());
        assert_eq!(settings.default_theme, Theme::Parchment);
        assert_eq!(settings.log_filter, None);
    }

    #[test]
    fn test_all_cloud_vars_enable_cloud_mode() {
        let settings = settings(&[
            (ENV_CLOUD_API_KEY, "key-123"),
            (ENV_CLOUD_PROJECT_ID, "tomeforge-prod"),
            (ENV_CLOUD_AUTH_DOMAIN, "tomeforge.example.com"),
        ])
        .unwrap();
        let cloud = settings.cloud.unwrap();
        assert_eq!(cloud.project_id, "tomeforge-prod");
        assert!(!format!("{:?}", cloud).contains("key-123"));
    }

    #[test]
    fn test_partial_cloud_vars_fall_back_to_free_mode() {
        let settings = settings(&[
            (ENV_CLOUD_API_KEY, "key-123"),
            (ENV_CLOUD_PROJECT_ID, "  "),
            (ENV_CLOUD_AUTH_DOMAIN, "tomeforge.example.com"),
        ])
        .unwrap();
        assert!(!settings.is_cloud_mode());
    }

    #[test]
    fn test_auth_domain_with_scheme_is_rejected() {
        let result = settings(&[
            (ENV_CLOUD_API_KEY, "key-123"),
            (ENV_CLOUD_PROJECT_ID, "tomeforge-prod"),
            (ENV_CLOUD_AUTH_DOMAIN, "https://tomeforge.example.com"),
        ]);
        assert!(matches!(result, Err(SettingsError::Cloud(_))));
    }

    #[test]
    fn test_theme_and_log_filter() {
        let settings = settings(&[(ENV_DEFAULT_THEME, "Arcane"), (ENV_LOG, "debug")]).unwrap();
        assert_eq!(settings.default_theme, Theme::Arcane);
        assert_eq!(settings.log_filter.as_deref(), Some("debug"));

        assert!(matches!(
            self::settings(&[(ENV_DEFAULT_THEME, "neon")]),
            Err(SettingsError::Theme(_))
        ));
    }
}
