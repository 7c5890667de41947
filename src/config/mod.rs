//! Configuration module for the data-access gateway.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Which backend strategy the gateway is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Simulated latency over the local persisted store
    Local,
    /// REST calls against `api_base_url`
    Remote,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Local => "local",
            BackendKind::Remote => "remote",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" | "mock" => Some(BackendKind::Local),
            "remote" | "real" => Some(BackendKind::Remote),
            _ => None,
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend strategy, fixed for the lifetime of the process
    pub backend: BackendKind,
    /// Base URL of the REST API (including the `/api` prefix)
    pub api_base_url: String,
    /// Path to the SQLite file backing the local store
    pub store_path: PathBuf,
    /// Whether the local backend sleeps before answering
    pub simulated_latency: bool,
    /// Transport timeout applied to every outgoing HTTP request
    pub http_timeout: Duration,
    /// API key for the advisory text-completion service
    pub ai_api_key: Option<String>,
    /// Model name for the advisory text-completion service
    pub ai_model: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let backend = env::var("NIKONEKTI_BACKEND")
            .map(|v| BackendKind::parse(&v).expect("Invalid NIKONEKTI_BACKEND (expected local|remote)"))
            .unwrap_or(BackendKind::Local);

        let api_base_url = env::var("NIKONEKTI_API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8000/api".to_string())
            .trim_end_matches('/')
            .to_string();

        let store_path = env::var("NIKONEKTI_STORE_PATH")
            .unwrap_or_else(|_| "./data/nikonekti.sqlite".to_string())
            .into();

        let simulated_latency = env::var("NIKONEKTI_SIMULATED_LATENCY")
            .map(|v| {
                v.parse::<bool>()
                    .expect("Invalid NIKONEKTI_SIMULATED_LATENCY (expected true|false)")
            })
            .unwrap_or(true);

        let http_timeout = env::var("NIKONEKTI_HTTP_TIMEOUT_SECS")
            .map(|v| {
                v.parse::<u64>()
                    .expect("Invalid NIKONEKTI_HTTP_TIMEOUT_SECS format")
            })
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(30));

        let ai_api_key = env::var("NIKONEKTI_AI_API_KEY")
            .ok()
            .filter(|k| !k.is_empty());

        let ai_model =
            env::var("NIKONEKTI_AI_MODEL").unwrap_or_else(|_| "gemini-2.5-flash".to_string());

        let log_level = env::var("NIKONEKTI_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            backend,
            api_base_url,
            store_path,
            simulated_latency,
            http_timeout,
            ai_api_key,
            ai_model,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("NIKONEKTI_BACKEND");
        env::remove_var("NIKONEKTI_API_BASE_URL");
        env::remove_var("NIKONEKTI_STORE_PATH");
        env::remove_var("NIKONEKTI_SIMULATED_LATENCY");
        env::remove_var("NIKONEKTI_HTTP_TIMEOUT_SECS");
        env::remove_var("NIKONEKTI_AI_API_KEY");
        env::remove_var("NIKONEKTI_AI_MODEL");
        env::remove_var("NIKONEKTI_LOG_LEVEL");

        let config = Config::from_env();

        assert_eq!(config.backend, BackendKind::Local);
        assert_eq!(config.api_base_url, "http://localhost:8000/api");
        assert_eq!(config.store_path, PathBuf::from("./data/nikonekti.sqlite"));
        assert!(config.simulated_latency);
        assert_eq!(config.http_timeout, Duration::from_secs(30));
        assert!(config.ai_api_key.is_none());
        assert_eq!(config.ai_model, "gemini-2.5-flash");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_backend_kind_parse() {
        assert_eq!(BackendKind::parse("local"), Some(BackendKind::Local));
        assert_eq!(BackendKind::parse(" Remote "), Some(BackendKind::Remote));
        assert_eq!(BackendKind::parse("mock"), Some(BackendKind::Local));
        assert_eq!(BackendKind::parse("graphql"), None);
        assert_eq!(BackendKind::Remote.as_str(), "remote");
    }
}
