use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Distinguishes runtime behavior for different stages of the deployment.
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

/// Top-level configuration for the engine and its command-line front end.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub source: SourceConfig,
    pub cache: CacheConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("SIGNALS_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let data_dir = env::var("SIGNALS_DATA_DIR").unwrap_or_else(|_| "data".to_string());

        let ttl_secs = env::var("SIGNALS_CACHE_TTL_SECS")
            .unwrap_or_else(|_| CacheConfig::DEFAULT_TTL_SECS.to_string())
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or(ConfigError::InvalidCacheTtl)?;

        let log_level = env::var("SIGNALS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            source: SourceConfig {
                data_dir: PathBuf::from(data_dir),
            },
            cache: CacheConfig {
                ttl: Duration::from_secs(ttl_secs),
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Location of the per-subject event files.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub data_dir: PathBuf,
}

/// Freshness window applied to memoized scores.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub ttl: Duration,
}

impl CacheConfig {
    pub const DEFAULT_TTL_SECS: u64 = 300;
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(Self::DEFAULT_TTL_SECS),
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidCacheTtl,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidCacheTtl => {
                write!(f, "SIGNALS_CACHE_TTL_SECS must be a positive number of seconds")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
