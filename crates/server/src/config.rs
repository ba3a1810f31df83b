use shared_types::{AppConfig, BackendConfig, FeatureFlags, SignInConfig};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Read `config.toml` and store it in the global `OnceLock`. Safe to call
/// multiple times, only the first call has effect.
///
/// If the file is missing or unparseable, every section falls back to its defaults.
pub fn load_config() {
    CONFIG.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => {
            let config = parse_config(&contents);
            tracing::info!(features = ?config.features, backend = ?config.backend, sign_in = ?config.sign_in, "Loaded {CONFIG_PATH}");
            config
        }
        Err(e) => {
            tracing::warn!("{CONFIG_PATH} not found ({e}), using defaults");
            AppConfig::default()
        }
    });
}

fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!("Failed to parse {CONFIG_PATH}: {e}, using defaults");
        AppConfig::default()
    })
}

/// The loaded config, or defaults if `load_config()` hasn't been called yet.
pub fn app_config() -> &'static AppConfig {
    static DEFAULT: OnceLock<AppConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(AppConfig::default))
}

pub fn feature_flags() -> &'static FeatureFlags {
    &app_config().features
}

pub fn backend_config() -> &'static BackendConfig {
    &app_config().backend
}

pub fn sign_in_config() -> &'static SignInConfig {
    &app_config().sign_in
}
