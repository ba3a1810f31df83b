use serde::{Deserialize, Serialize};

/// Feature flags controlling which optional integrations are active.
///
/// Every field defaults to `false` so that a missing or incomplete config
/// file disables all optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    #[serde(default)]
    pub telemetry: bool,
}

/// `[backend]` section: how the server talks to the backend service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendConfig {
    #[serde(default = "BackendConfig::default_timeout")]
    pub request_timeout_secs: u64,
}

impl BackendConfig {
    fn default_timeout() -> u64 {
        10
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: Self::default_timeout(),
        }
    }
}

/// `[sign_in]` section: sliding-window limit on password attempts per email.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignInConfig {
    #[serde(default = "SignInConfig::default_max_attempts")]
    pub max_attempts: usize,
    #[serde(default = "SignInConfig::default_window_secs")]
    pub window_secs: u64,
}

impl SignInConfig {
    fn default_max_attempts() -> usize {
        5
    }

    fn default_window_secs() -> u64 {
        300
    }
}

impl Default for SignInConfig {
    fn default() -> Self {
        Self {
            max_attempts: Self::default_max_attempts(),
            window_secs: Self::default_window_secs(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub sign_in: SignInConfig,
}
