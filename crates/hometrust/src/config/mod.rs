use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the platform service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub verification: VerificationSettings,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let coi_max_age_days = env::var("APP_COI_MAX_AGE_DAYS")
            .unwrap_or_else(|_| VerificationSettings::DEFAULT_COI_MAX_AGE_DAYS.to_string())
            .parse::<i64>()
            .ok()
            .filter(|days| *days > 0)
            .ok_or(ConfigError::InvalidCoiWindow)?;

        let min_liability_limit = env::var("APP_MIN_LIABILITY_LIMIT")
            .unwrap_or_else(|_| VerificationSettings::DEFAULT_MIN_LIABILITY_LIMIT.to_string())
            .parse::<u32>()
            .map_err(|_| ConfigError::InvalidLiabilityFloor)?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            verification: VerificationSettings {
                coi_max_age_days,
                min_liability_limit,
            },
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Operator-tunable dials for the pro verification workflow.
#[derive(Debug, Clone)]
pub struct VerificationSettings {
    pub coi_max_age_days: i64,
    pub min_liability_limit: u32,
}

impl VerificationSettings {
    /// Certificates of insurance are re-verified every six months.
    pub const DEFAULT_COI_MAX_AGE_DAYS: i64 = 183;
    pub const DEFAULT_MIN_LIABILITY_LIMIT: u32 = 1_000_000;
}

impl Default for VerificationSettings {
    fn default() -> Self {
        Self {
            coi_max_age_days: Self::DEFAULT_COI_MAX_AGE_DAYS,
            min_liability_limit: Self::DEFAULT_MIN_LIABILITY_LIMIT,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidCoiWindow,
    InvalidLiabilityFloor,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidCoiWindow => {
                write!(f, "APP_COI_MAX_AGE_DAYS must be a positive number of days")
            }
            ConfigError::InvalidLiabilityFloor => {
                write!(f, "APP_MIN_LIABILITY_LIMIT must be a whole dollar amount")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort
            | ConfigError::InvalidCoiWindow
            | ConfigError::InvalidLiabilityFloor => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_HOST");
        env::remove_var("APP_PORT");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("APP_COI_MAX_AGE_DAYS");
        env::remove_var("APP_MIN_LIABILITY_LIMIT");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.verification.coi_max_age_days, 183);
        assert_eq!(config.verification.min_liability_limit, 1_000_000);
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
    }

    #[test]
    fn verification_dials_read_from_env() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_COI_MAX_AGE_DAYS", "90");
        env::set_var("APP_MIN_LIABILITY_LIMIT", "2000000");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.verification.coi_max_age_days, 90);
        assert_eq!(config.verification.min_liability_limit, 2_000_000);
        reset_env();
    }

    #[test]
    fn rejects_non_positive_coi_window() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_COI_MAX_AGE_DAYS", "0");
        let result = AppConfig::load();
        assert!(matches!(result, Err(ConfigError::InvalidCoiWindow)));
        reset_env();
    }
}
