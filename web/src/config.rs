#[cfg(feature = "ssr")]
use std::sync::OnceLock;
use std::time::Duration;

pub const DEFAULT_API_TIMEOUT_MS: u64 = 3000;

/// Runtime settings read from the environment (and `.env` in development).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub api_timeout: Duration,
    pub baas_url: String,
    pub baas_anon_key: String,
    /// Secret used to verify BaaS access tokens. When unset, token claims
    /// are read without signature checks and the API is left to verify.
    pub baas_jwt_secret: Option<String>,
}

impl AppConfig {
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_timeout = lookup("API_TIMEOUT_MS")
            .and_then(|ms| ms.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_API_TIMEOUT_MS);

        Self {
            api_base_url: lookup("API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| "http://localhost:5000".to_string()),
            api_timeout: Duration::from_millis(api_timeout),
            baas_url: lookup("BAAS_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_default(),
            baas_anon_key: lookup("BAAS_ANON_KEY").unwrap_or_default(),
            baas_jwt_secret: lookup("BAAS_JWT_SECRET").filter(|s| !s.is_empty()),
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn auth_configured(&self) -> bool {
        !self.baas_url.is_empty() && !self.baas_anon_key.is_empty()
    }
}

#[cfg(feature = "ssr")]
static CONFIG: OnceLock<AppConfig> = OnceLock::new();

#[cfg(feature = "ssr")]
pub fn init_config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::from_env)
}

#[cfg(feature = "ssr")]
pub fn get_config() -> &'static AppConfig {
    init_config()
}
