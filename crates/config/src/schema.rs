//! Application configuration schema and base-URL resolution.

use serde::{Deserialize, Serialize};

/// Environment variable that overrides every other base-URL source.
pub const BASE_URL_ENV: &str = "PORTALE_API_URL";

/// Local-development fallback used when no other source is set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

/// The `api` section of the app configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiSection {
    /// Backend base URL, e.g. `"https://api.portale.example/api"`.
    #[serde(default)]
    pub base_url: Option<String>,
}

/// The legacy `extra` section kept for older deployment manifests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtraSection {
    /// Older location of the backend base URL.
    #[serde(default)]
    pub api_url: Option<String>,
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub extra: ExtraSection,
}

impl AppConfig {
    /// Parses configuration from a YAML string, merged with defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`figment::Error`] if the YAML is invalid or extraction fails.
    #[allow(clippy::result_large_err)]
    pub fn from_yaml(yaml: &str) -> Result<Self, figment::Error> {
        use figment::{
            Figment,
            providers::{Format as _, Serialized, Yaml},
        };
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Yaml::string(yaml))
            .extract()
    }

    /// Loads configuration from a file path, merged with defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`figment::Error`] if the file cannot be read or parsed.
    #[allow(clippy::result_large_err)]
    pub fn from_file(path: &std::path::Path) -> Result<Self, figment::Error> {
        use figment::{
            Figment,
            providers::{Format as _, Serialized, Yaml},
        };
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Yaml::file(path))
            .extract()
    }

    /// Resolves the backend base URL.
    ///
    /// Priority: the [`BASE_URL_ENV`] environment variable (if set and
    /// non-empty), then `api.base_url`, then the legacy `extra.api_url`,
    /// then [`DEFAULT_BASE_URL`]. Exactly one source wins; values are never
    /// merged.
    #[must_use]
    pub fn resolved_base_url(&self) -> String {
        if let Ok(url) = std::env::var(BASE_URL_ENV)
            && !url.is_empty()
        {
            return url;
        }
        if let Some(url) = &self.api.base_url {
            return url.clone();
        }
        if let Some(url) = &self.extra.api_url {
            tracing::debug!("base url resolved from legacy extra.api_url");
            return url.clone();
        }
        DEFAULT_BASE_URL.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_YAML: &str = r#"
api:
  base_url: "https://api.portale.example/api"
extra:
  api_url: "https://legacy.portale.example/api"
"#;

    #[test]
    fn test_default_config() {
        let c = AppConfig::default();
        assert!(c.api.base_url.is_none());
        assert!(c.extra.api_url.is_none());
    }

    #[test]
    fn test_from_yaml() {
        let c = AppConfig::from_yaml(SAMPLE_YAML).unwrap();
        assert_eq!(
            c.api.base_url.as_deref(),
            Some("https://api.portale.example/api")
        );
        assert_eq!(
            c.extra.api_url.as_deref(),
            Some("https://legacy.portale.example/api")
        );
    }

    #[test]
    fn test_from_yaml_partial() {
        let c = AppConfig::from_yaml("extra:\n  api_url: \"http://x/api\"\n").unwrap();
        assert!(c.api.base_url.is_none());
        assert_eq!(c.extra.api_url.as_deref(), Some("http://x/api"));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portale.yaml");
        std::fs::write(&path, SAMPLE_YAML).unwrap();
        let c = AppConfig::from_file(&path).unwrap();
        assert_eq!(
            c.api.base_url.as_deref(),
            Some("https://api.portale.example/api")
        );
    }

    #[test]
    fn test_resolve_env_wins() {
        temp_env::with_var(BASE_URL_ENV, Some("http://env-host/api"), || {
            let c = AppConfig::from_yaml(SAMPLE_YAML).unwrap();
            assert_eq!(c.resolved_base_url(), "http://env-host/api");
        });
    }

    #[test]
    fn test_resolve_empty_env_ignored() {
        temp_env::with_var(BASE_URL_ENV, Some(""), || {
            let c = AppConfig::from_yaml(SAMPLE_YAML).unwrap();
            assert_eq!(c.resolved_base_url(), "https://api.portale.example/api");
        });
    }

    #[test]
    fn test_resolve_api_section_beats_legacy() {
        temp_env::with_var(BASE_URL_ENV, None::<&str>, || {
            let c = AppConfig::from_yaml(SAMPLE_YAML).unwrap();
            assert_eq!(c.resolved_base_url(), "https://api.portale.example/api");
        });
    }

    #[test]
    fn test_resolve_legacy_fallback() {
        temp_env::with_var(BASE_URL_ENV, None::<&str>, || {
            let c = AppConfig::from_yaml("extra:\n  api_url: \"http://legacy/api\"\n").unwrap();
            assert_eq!(c.resolved_base_url(), "http://legacy/api");
        });
    }

    #[test]
    fn test_resolve_hardcoded_default() {
        temp_env::with_var(BASE_URL_ENV, None::<&str>, || {
            let c = AppConfig::default();
            assert_eq!(c.resolved_base_url(), DEFAULT_BASE_URL);
        });
    }
}
