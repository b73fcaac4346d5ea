//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `STOREFRONT_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)
//!
//! ## Optional
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_VIEW_CACHE_TTL_SECS` - Lifetime of cached listing views (default: 300)
//! - `STOREFRONT_VIEW_CACHE_CAPACITY` - Maximum cached listing views (default: 1000)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name (e.g. `production`)

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_VIEW_CACHE_TTL_SECS: u64 = 300;
const DEFAULT_VIEW_CACHE_CAPACITY: u64 = 1000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Listing view cache settings
    pub view_cache: ViewCacheConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

/// Settings for the listing view cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewCacheConfig {
    /// How long a cached view stays fresh without a revalidation.
    pub ttl: Duration,
    /// Maximum number of cached views.
    pub capacity: u64,
}

impl Default for ViewCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(DEFAULT_VIEW_CACHE_TTL_SECS),
            capacity: DEFAULT_VIEW_CACHE_CAPACITY,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = get_database_url(&lookup, "STOREFRONT_DATABASE_URL")?;
        let host = get_parsed_or_default::<IpAddr>(&lookup, "STOREFRONT_HOST", "127.0.0.1")?;
        let port = get_parsed_or_default::<u16>(&lookup, "STOREFRONT_PORT", "3000")?;

        let ttl_secs = get_parsed_or_default::<u64>(
            &lookup,
            "STOREFRONT_VIEW_CACHE_TTL_SECS",
            &DEFAULT_VIEW_CACHE_TTL_SECS.to_string(),
        )?;
        let capacity = get_parsed_or_default::<u64>(
            &lookup,
            "STOREFRONT_VIEW_CACHE_CAPACITY",
            &DEFAULT_VIEW_CACHE_CAPACITY.to_string(),
        )?;
        if capacity == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "STOREFRONT_VIEW_CACHE_CAPACITY".to_string(),
                "must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            database_url,
            host,
            port,
            view_cache: ViewCacheConfig {
                ttl: Duration::from_secs(ttl_secs),
                capacity,
            },
            sentry_dsn: lookup("SENTRY_DSN").filter(|v| !v.is_empty()),
            sentry_environment: lookup("SENTRY_ENVIRONMENT").filter(|v| !v.is_empty()),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get database URL with fallback to generic `DATABASE_URL`.
fn get_database_url(
    lookup: &impl Fn(&str) -> Option<String>,
    primary_key: &str,
) -> Result<SecretString, ConfigError> {
    lookup(primary_key)
        .or_else(|| lookup("DATABASE_URL"))
        .map(SecretString::from)
        .ok_or_else(|| ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get a variable with a default value and parse it.
fn get_parsed_or_default<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key)
        .unwrap_or_else(|| default.to_string())
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
