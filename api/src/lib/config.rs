use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// Signing algorithm this backend supports.
const SUPPORTED_ALGORITHM: &str = "HS256";

fn default_token_ttl_minutes() -> i64 {
    30
}

fn default_algorithm() -> String {
    SUPPORTED_ALGORITHM.to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

/// Authentication settings.
///
/// The secret key itself is validated (length, non-emptiness) by the auth
/// gate at startup; this layer only checks what the gate cannot know.
#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub secret: String,

    #[serde(default = "default_token_ttl_minutes")]
    pub token_ttl_minutes: i64,

    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, AUTH__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: AUTH__SECRET=... overrides auth.secret
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.token_ttl_minutes <= 0 {
            return Err(ConfigError::Message(format!(
                "auth.token_ttl_minutes must be positive, got {}",
                self.auth.token_ttl_minutes
            )));
        }

        if self.auth.algorithm != SUPPORTED_ALGORITHM {
            return Err(ConfigError::Message(format!(
                "auth.algorithm must be {}, got {}",
                SUPPORTED_ALGORITHM, self.auth.algorithm
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            database: DatabaseConfig {
                url: "postgresql://localhost/success_path".to_string(),
            },
            server: ServerConfig { http_port: 8000 },
            auth: AuthConfig {
                secret: "test-secret-key-for-jwt-signing-at-least-32-bytes".to_string(),
                token_ttl_minutes: 30,
                algorithm: "HS256".to_string(),
            },
        }
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive_ttl() {
        let mut config = base_config();
        config.auth.token_ttl_minutes = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unsupported_algorithm() {
        let mut config = base_config();
        config.auth.algorithm = "RS256".to_string();
        assert!(config.validate().is_err());
    }
}
