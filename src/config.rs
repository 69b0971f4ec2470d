use std::fmt;
use std::time::Duration;
use thiserror::Error;

pub const PRODUCTION_API_URL: &str = "https://api.dusupay.com";
pub const SANDBOX_API_URL: &str = "https://sandbox.dusupay.com";

const ENV_PUBLIC_KEY: &str = "DUSUPAY_PUBLIC_KEY";
const ENV_SECRET_KEY: &str = "DUSUPAY_SECRET_KEY";
const ENV_API_URL: &str = "DUSUPAY_API_URL";
const ENV_TIMEOUT_SECS: &str = "DUSUPAY_TIMEOUT_SECS";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("parameter \"{0}\" is empty")]
    EmptyParameter(&'static str),

    #[error("{0} environment variable is required")]
    MissingEnv(&'static str),

    #[error("{name} environment variable has invalid value {value:?}")]
    InvalidEnv { name: &'static str, value: String },
}

/// Credentials and endpoint shared by every request.
///
/// Built once and handed to [`crate::Client`] behind an `Arc`; nothing
/// mutates it afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub uri: String,
    pub public_key: String,
    pub secret_key: String,
    /// Per-request deadline. `None` leaves it to the HTTP client.
    pub timeout: Option<Duration>,
}

impl Config {
    /// Production credentials.
    pub fn new(public_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            uri: PRODUCTION_API_URL.to_string(),
            public_key: public_key.into(),
            secret_key: secret_key.into(),
            timeout: None,
        }
    }

    /// Sandbox credentials.
    pub fn sandbox(public_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            uri: SANDBOX_API_URL.to_string(),
            ..Self::new(public_key, secret_key)
        }
    }

    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = uri.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn is_sandbox(&self) -> bool {
        self.uri != PRODUCTION_API_URL
    }

    /// Checks that every field needed to talk to the API is present.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.uri.is_empty() {
            return Err(ConfigError::EmptyParameter("uri"));
        }
        if self.public_key.is_empty() {
            return Err(ConfigError::EmptyParameter("public_key"));
        }
        if self.secret_key.is_empty() {
            return Err(ConfigError::EmptyParameter("secret_key"));
        }
        Ok(())
    }

    /// Loads credentials from the process environment.
    ///
    /// `DUSUPAY_PUBLIC_KEY` and `DUSUPAY_SECRET_KEY` are required;
    /// `DUSUPAY_API_URL` defaults to production and `DUSUPAY_TIMEOUT_SECS`
    /// is optional.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let public_key = lookup(ENV_PUBLIC_KEY).ok_or(ConfigError::MissingEnv(ENV_PUBLIC_KEY))?;
        let secret_key = lookup(ENV_SECRET_KEY).ok_or(ConfigError::MissingEnv(ENV_SECRET_KEY))?;

        let mut config = Self::new(public_key, secret_key);
        if let Some(uri) = lookup(ENV_API_URL) {
            config.uri = uri;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs = raw.parse::<u64>().map_err(|_| ConfigError::InvalidEnv {
                name: ENV_TIMEOUT_SECS,
                value: raw.clone(),
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        config.validate()?;
        Ok(config)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("uri", &self.uri)
            .field("public_key", &self.public_key)
            .field("secret_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}
