use shared_types::PortalConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<PortalConfig> = OnceLock::new();

/// Config file used when `PORTAL_CONFIG` is unset, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Path of the portal config file: `PORTAL_CONFIG` or `config.toml`.
pub fn config_path() -> String {
    std::env::var("PORTAL_CONFIG")
        .ok()
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
}

pub fn parse_portal_config(contents: &str) -> Result<PortalConfig, toml::de::Error> {
    toml::from_str(contents)
}

/// Read and parse a config file. Missing or unparseable files yield the
/// built-in defaults.
pub fn read_portal_config(path: &str) -> PortalConfig {
    let config = match std::fs::read_to_string(path) {
        Ok(contents) => parse_portal_config(&contents).unwrap_or_else(|e| {
            tracing::warn!(path, error = %e, "failed to parse portal config, using defaults");
            PortalConfig::default()
        }),
        Err(e) => {
            tracing::info!(path, error = %e, "portal config not found, using defaults");
            PortalConfig::default()
        }
    };

    for key in config.unknown_home_keys() {
        tracing::warn!(path, key, "ignoring [routes.home] entry for unknown role");
    }
    tracing::info!(
        access_denied = config.access_denied_path(),
        fallback_home = %config.routes.fallback_home,
        "portal routes configured"
    );
    config
}

/// Load the portal config into the global `OnceLock`. Only the first call reads the file.
pub fn load_portal_config() -> &'static PortalConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        read_portal_config(&config_path())
    })
}

/// The loaded portal config, or defaults if `load_portal_config()` hasn't run yet.
pub fn portal_config() -> &'static PortalConfig {
    static DEFAULT: OnceLock<PortalConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(PortalConfig::default))
}
