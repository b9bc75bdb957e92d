/**
 * Server Configuration
 *
 * This module loads the process-wide configuration once at startup. The
 * resulting `AppConfig` is passed by value into `create_app`; nothing reads
 * the environment after that.
 *
 * # Configuration Sources
 *
 * Values come from environment variables (a `.env` file is loaded by the
 * binary before this runs). Empty values count as missing.
 *
 * | Variable | Default | Meaning |
 * |---|---|---|
 * | `SECRET` | required | HS256 signing secret |
 * | `USER_STORE` | `mongo` | `mongo` or `memory` |
 * | `DB_USER` / `DB_PASS` | required for mongo | cluster credentials |
 * | `DB_CLUSTER` | `cluster0.fmivq.mongodb.net` | cluster address |
 * | `DB_NAME` | `myFirstDatabase` | database name |
 * | `SERVER_HOST` / `SERVER_PORT` | `0.0.0.0` / `3000` | listen address |
 * | `BCRYPT_COST` | `12` | bcrypt work factor |
 * | `TOKEN_TTL_SECS` | unset | token lifetime; unset means no `exp` |
 * | `REQUIRE_TOKEN_OWNER` | `false` | profile reads limited to the token's user |
 */

use std::fmt;
use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Cluster address used when `DB_CLUSTER` is not set
pub const DEFAULT_CLUSTER: &str = "cluster0.fmivq.mongodb.net";

/// Database name used when `DB_NAME` is not set
pub const DEFAULT_DATABASE: &str = "myFirstDatabase";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// bcrypt work factor used when `BCRYPT_COST` is not set
pub const DEFAULT_BCRYPT_COST: u32 = 12;

/// Lowest work factor bcrypt accepts
pub const MIN_BCRYPT_COST: u32 = 4;

/// Highest work factor bcrypt accepts
pub const MAX_BCRYPT_COST: u32 = 31;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Where user records are kept
#[derive(Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// MongoDB cluster reached through an SRV connection string
    Mongo {
        user: String,
        password: String,
        cluster: String,
        database: String,
    },
    /// Process-local map, lost on restart
    Memory,
}

impl StoreBackend {
    /// Connection string for the Mongo backend
    ///
    /// Returns `None` for the in-memory backend.
    pub fn connection_uri(&self) -> Option<String> {
        match self {
            Self::Mongo {
                user,
                password,
                cluster,
                database,
            } => Some(format!(
                "mongodb+srv://{user}:{password}@{cluster}/{database}?retryWrites=true&w=majority"
            )),
            Self::Memory => None,
        }
    }
}

impl fmt::Debug for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mongo {
                user,
                cluster,
                database,
                ..
            } => f
                .debug_struct("Mongo")
                .field("user", user)
                .field("password", &"<redacted>")
                .field("cluster", cluster)
                .field("database", database)
                .finish(),
            Self::Memory => f.write_str("Memory"),
        }
    }
}

/// Application configuration
#[derive(Clone)]
pub struct AppConfig {
    /// Secret used to sign and verify tokens
    pub secret: String,
    /// User store backend
    pub store: StoreBackend,
    pub host: String,
    pub port: u16,
    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,
    /// Token lifetime in seconds; `None` issues tokens without `exp`
    pub token_ttl_secs: Option<u64>,
    /// Reject profile reads whose path id differs from the token's id
    pub require_token_owner: bool,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("secret", &"<redacted>")
            .field("store", &self.store)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("token_ttl_secs", &self.token_ttl_secs)
            .field("require_token_owner", &self.require_token_owner)
            .finish()
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder(secret: impl Into<String>) -> AppConfigBuilder {
        AppConfigBuilder::new(secret)
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// `from_env` is this function over `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let secret = get("SECRET").ok_or(ConfigError::MissingValue("SECRET"))?;

        let store = match get("USER_STORE").as_deref().map(str::to_ascii_lowercase) {
            None => mongo_from(&get)?,
            Some(kind) if kind == "mongo" => mongo_from(&get)?,
            Some(kind) if kind == "memory" => StoreBackend::Memory,
            Some(kind) => {
                return Err(ConfigError::InvalidValue {
                    key: "USER_STORE",
                    value: kind,
                })
            }
        };

        let mut builder = Self::builder(secret).store(store);

        if let Some(host) = get("SERVER_HOST") {
            builder = builder.host(host);
        }
        if let Some(port) = get("SERVER_PORT") {
            builder = builder.port(parse_value("SERVER_PORT", &port)?);
        }
        if let Some(cost) = get("BCRYPT_COST") {
            builder = builder.bcrypt_cost(parse_value("BCRYPT_COST", &cost)?);
        }
        if let Some(ttl) = get("TOKEN_TTL_SECS") {
            builder = builder.token_ttl_secs(parse_value("TOKEN_TTL_SECS", &ttl)?);
        }
        if let Some(flag) = get("REQUIRE_TOKEN_OWNER") {
            builder = builder.require_token_owner(parse_flag("REQUIRE_TOKEN_OWNER", &flag)?);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.is_empty() {
            return Err(ConfigError::MissingValue("SECRET"));
        }
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            });
        }
        if self.token_ttl_secs == Some(0) {
            return Err(ConfigError::InvalidValue {
                key: "TOKEN_TTL_SECS",
                value: "0".to_string(),
            });
        }
        self.bind_addr().map(|_| ())
    }

    /// Socket address the server listens on
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.host.parse().map_err(|_| ConfigError::InvalidValue {
            key: "SERVER_HOST",
            value: self.host.clone(),
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

fn mongo_from<G>(get: &G) -> Result<StoreBackend, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    Ok(StoreBackend::Mongo {
        user: get("DB_USER").ok_or(ConfigError::MissingValue("DB_USER"))?,
        password: get("DB_PASS").ok_or(ConfigError::MissingValue("DB_PASS"))?,
        cluster: get("DB_CLUSTER").unwrap_or_else(|| DEFAULT_CLUSTER.to_string()),
        database: get("DB_NAME").unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
    })
}

fn parse_value<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}

fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: raw.to_string(),
        }),
    }
}

/// Builder for AppConfig
#[derive(Debug)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    fn new(secret: impl Into<String>) -> Self {
        Self {
            config: AppConfig {
                secret: secret.into(),
                store: StoreBackend::Memory,
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
                bcrypt_cost: DEFAULT_BCRYPT_COST,
                token_ttl_secs: None,
                require_token_owner: false,
            },
        }
    }

    /// Set the user store backend
    pub fn store(mut self, store: StoreBackend) -> Self {
        self.config.store = store;
        self
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the bcrypt work factor
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.config.bcrypt_cost = cost;
        self
    }

    /// Give issued tokens an expiry
    pub fn token_ttl_secs(mut self, ttl: u64) -> Self {
        self.config.token_ttl_secs = Some(ttl);
        self
    }

    pub fn require_token_owner(mut self, enabled: bool) -> Self {
        self.config.require_token_owner = enabled;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
