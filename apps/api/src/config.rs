use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

/// Application configuration loaded from environment variables.
/// Every field has a default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    /// Origins allowed by the CORS layer. A single `*` entry means permissive.
    pub cors_allowed_origins: Vec<String>,
    /// Simulated latency of content generation.
    pub generation_delay: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            host: env_or("HOST", "0.0.0.0"),
            port: env_or("PORT", "8000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            cors_allowed_origins: parse_origins(&env_or(
                "CORS_ALLOWED_ORIGINS",
                DEFAULT_CORS_ORIGINS,
            )),
            generation_delay: Duration::from_millis(
                env_or("GENERATION_DELAY_MS", "1000")
                    .parse::<u64>()
                    .context("GENERATION_DELAY_MS must be a whole number of milliseconds")?,
            ),
        })
    }

    pub fn cors_is_permissive(&self) -> bool {
        self.cors_allowed_origins.iter().any(|o| o == "*")
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "0.0.0.0".to_string(),
            port: 8000,
            rust_log: "info".to_string(),
            cors_allowed_origins: parse_origins(DEFAULT_CORS_ORIGINS),
            generation_delay: Duration::from_millis(1000),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_trims_and_skips_empty() {
        let origins = parse_origins(" http://a.test , ,http://b.test,");
        assert_eq!(origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn test_default_origins_are_local_frontend() {
        let config = Config::default();
        assert_eq!(config.cors_allowed_origins.len(), 2);
        assert!(!config.cors_is_permissive());
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn test_wildcard_origin_is_permissive() {
        let config = Config {
            cors_allowed_origins: parse_origins("*"),
            ..Config::default()
        };
        assert!(config.cors_is_permissive());
    }
}
