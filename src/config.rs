//! Build-time application configuration.
//!
//! The original deployment selects the backend origin and friends with
//! build-time environment variables; here they are baked in with
//! `option_env!` so a deployment rebuilds with its own values. An unset
//! base URL means same-origin relative requests.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Default request timeout when `FITPORTAL_TIMEOUT_MS` is unset or invalid.
pub const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Deployment mode tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppEnv {
    #[default]
    Development,
    Production,
    Test,
}

impl AppEnv {
    /// Parse a deployment tag. Unknown values fall back to the default
    /// rather than failing the build.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "development" => Some(Self::Development),
            "production" => Some(Self::Production),
            "test" => Some(Self::Test),
            _ => None,
        }
    }
}

/// Resolved application configuration, provided via context at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend origin for API requests; empty means same-origin.
    pub api_base_url: String,
    /// Origin serving uploaded media (video files, thumbnails).
    pub upload_url: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u32,
    /// Deployment mode.
    pub env: AppEnv,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            upload_url: String::new(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            env: AppEnv::default(),
        }
    }
}

impl AppConfig {
    /// Read configuration baked in at compile time.
    pub fn from_build_env() -> Self {
        Self {
            api_base_url: option_env!("FITPORTAL_API_BASE_URL")
                .unwrap_or("")
                .to_owned(),
            upload_url: option_env!("FITPORTAL_UPLOAD_URL").unwrap_or("").to_owned(),
            timeout_ms: option_env!("FITPORTAL_TIMEOUT_MS")
                .and_then(parse_timeout_ms)
                .unwrap_or(DEFAULT_TIMEOUT_MS),
            env: option_env!("FITPORTAL_APP_ENV")
                .and_then(AppEnv::parse)
                .unwrap_or_default(),
        }
    }
}

/// Parse a positive millisecond timeout; rejects zero so a typo can't
/// disable every request.
fn parse_timeout_ms(value: &str) -> Option<u32> {
    match value.trim().parse::<u32>() {
        Ok(0) | Err(_) => None,
        Ok(ms) => Some(ms),
    }
}
