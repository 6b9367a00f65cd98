//! Client configuration.
//!
//! Values are layered: built-in defaults, then compile-time environment
//! (`EMBEDCHAT_API_BASE`, `EMBEDCHAT_AUTH_URL`), then a JSON override the
//! user may keep in browser storage.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};

/// Backend the original deployment talked to during development.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

/// Page that runs the third-party sign-in and posts the profile back.
pub const DEFAULT_AUTH_URL: &str = "http://127.0.0.1:5000/auth/popup";

/// Storage key for the runtime override.
pub const STORAGE_KEY_CONFIG: &str = "embedchat_config";

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the REST backend, without a trailing slash.
    pub api_base: String,

    /// URL opened in the sign-in popup.
    pub auth_url: String,
}

/// Partial configuration read from storage. Missing fields keep the
/// lower layer's value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigOverride {
    #[serde(default)]
    pub api_base: Option<String>,
    #[serde(default)]
    pub auth_url: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Set the backend base URL.
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Set the sign-in popup URL.
    pub fn with_auth_url(mut self, url: impl Into<String>) -> Self {
        self.auth_url = url.into();
        self
    }

    /// Apply a stored override on top of this configuration.
    pub fn merge(mut self, over: ConfigOverride) -> Self {
        if let Some(base) = over.api_base {
            self.api_base = base;
        }
        if let Some(url) = over.auth_url {
            self.auth_url = url;
        }
        self
    }

    /// Layer defaults, compile-time values and the stored JSON override,
    /// then validate.
    ///
    /// A stored override that is not valid JSON is ignored with a warning
    /// rather than locking the user out of the app.
    pub fn resolve(
        env_api_base: Option<&str>,
        env_auth_url: Option<&str>,
        stored: Option<&str>,
    ) -> Result<Self> {
        let mut config = Self::default();
        if let Some(base) = env_api_base.filter(|s| !s.trim().is_empty()) {
            config = config.with_api_base(base.trim());
        }
        if let Some(url) = env_auth_url.filter(|s| !s.trim().is_empty()) {
            config = config.with_auth_url(url.trim());
        }

        if let Some(raw) = stored {
            match serde_json::from_str::<ConfigOverride>(raw) {
                Ok(over) => config = config.merge(over),
                Err(e) => tracing::warn!("Ignoring stored config override: {}", e),
            }
        }

        config.validated()
    }

    /// Check both URLs and normalise the API base.
    pub fn validated(mut self) -> Result<Self> {
        let base = self.api_base.trim().trim_end_matches('/').to_string();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(Error::Config(format!(
                "api_base must be an http(s) URL, got '{}'",
                self.api_base
            )));
        }
        Url::parse(&base).map_err(|e| Error::Config(format!("api_base: {}", e)))?;
        self.api_base = base;

        Url::parse(&self.auth_url).map_err(|e| Error::Config(format!("auth_url: {}", e)))?;
        Ok(self)
    }

    /// Origin the sign-in popup posts messages from.
    pub fn auth_origin(&self) -> Result<String> {
        let url = Url::parse(&self.auth_url).map_err(|e| Error::Config(e.to_string()))?;
        Ok(url.origin().ascii_serialization())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = ClientConfig::resolve(None, None, None).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_env_then_storage() {
        let config = ClientConfig::resolve(
            Some("https://api.example.com/"),
            None,
            Some(r#"{"auth_url": "https://auth.example.com/popup"}"#),
        )
        .unwrap();
        assert_eq!(config.api_base, "https://api.example.com");
        assert_eq!(config.auth_url, "https://auth.example.com/popup");
    }

    #[test]
    fn test_storage_overrides_env() {
        let config = ClientConfig::resolve(
            Some("https://api.example.com"),
            None,
            Some(r#"{"api_base": "http://localhost:8080"}"#),
        )
        .unwrap();
        assert_eq!(config.api_base, "http://localhost:8080");
    }

    #[test]
    fn test_bad_storage_is_ignored() {
        let config = ClientConfig::resolve(None, None, Some("not json")).unwrap();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_rejects_non_http_base() {
        let err = ClientConfig::default()
            .with_api_base("ftp://files.example.com")
            .validated()
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_auth_origin() {
        let config = ClientConfig::default().with_auth_url("https://auth.example.com:8443/popup?x=1");
        assert_eq!(config.auth_origin().unwrap(), "https://auth.example.com:8443");
    }
}
