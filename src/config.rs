use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;
use std::time::Duration;

pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:3001";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_FALLBACK_DELAY_MS: u64 = 800;

/// Priority order, earlier entries are preferred.
pub const DEFAULT_MODEL_FALLBACKS: [&str; 4] = [
    "gemini-2.5-flash",
    "gemini-1.5-flash",
    "gemini-1.5-pro",
    "gemini-2.0-flash",
];

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub gemini_api_key: String,
    pub gemini_base_url: String,
    pub model_fallbacks: Vec<String>,
    pub fallback_delay_ms: u64,
    pub request_timeout_secs: Option<u64>,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
            // A missing key is left for the provider to reject.
            gemini_api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            gemini_base_url: get_env_or("GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL),
            model_fallbacks: env::var("GEMINI_MODELS")
                .ok()
                .map(|raw| parse_model_list(&raw))
                .filter(|models| !models.is_empty())
                .unwrap_or_else(default_model_fallbacks),
            fallback_delay_ms: get_env_parse_or("FALLBACK_DELAY_MS", DEFAULT_FALLBACK_DELAY_MS)?,
            request_timeout_secs: get_env_parse_opt("PROVIDER_TIMEOUT_SECS")?,
        })
    }

    pub fn fallback_delay(&self) -> Duration {
        Duration::from_millis(self.fallback_delay_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

pub fn default_model_fallbacks() -> Vec<String> {
    DEFAULT_MODEL_FALLBACKS.iter().map(|m| m.to_string()).collect()
}

fn parse_model_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .collect()
}

fn get_env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    Ok(get_env_parse_opt(name)?.unwrap_or(default))
}

fn get_env_parse_opt<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(None),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> Result<&'static Config> {
    CONFIG
        .get()
        .ok_or_else(|| Error::Config("Configuration has not been initialized".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_vars() {
        for name in [
            "SERVER_ADDRESS",
            "GEMINI_API_KEY",
            "GEMINI_BASE_URL",
            "GEMINI_MODELS",
            "FALLBACK_DELAY_MS",
            "PROVIDER_TIMEOUT_SECS",
        ] {
            env::remove_var(name);
        }
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");
        clear_vars();

        let cfg = Config::from_env().expect("config should load");
        assert_eq!(cfg.server_address, DEFAULT_SERVER_ADDRESS);
        assert_eq!(cfg.model_fallbacks, default_model_fallbacks());
        assert_eq!(cfg.fallback_delay(), Duration::from_millis(800));
        assert!(cfg.request_timeout().is_none());
    }

    #[test]
    fn model_override_keeps_order_and_skips_blanks() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");
        clear_vars();
        env::set_var("GEMINI_MODELS", " gemini-2.0-flash, ,gemini-1.5-pro ");

        let cfg = Config::from_env().expect("config should load");
        assert_eq!(cfg.model_fallbacks, vec!["gemini-2.0-flash", "gemini-1.5-pro"]);

        clear_vars();
    }

    #[test]
    fn invalid_delay_is_a_config_error() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");
        clear_vars();
        env::set_var("FALLBACK_DELAY_MS", "soon");

        let result = Config::from_env();
        assert!(matches!(result, Err(Error::Config(_))));

        clear_vars();
    }
}
