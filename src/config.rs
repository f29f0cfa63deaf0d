use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use zeroize::Zeroizing;

#[derive(Clone)]
pub struct Config {
    // Account credentials
    pub username: String,
    pub password: Zeroizing<String>,

    // Server
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,

    // Limits
    pub max_body_bytes: usize,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("bind_addr", &self.bind_addr)
            .field("static_dir", &self.static_dir)
            .field("max_body_bytes", &self.max_body_bytes)
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),

    #[error("Failed to parse {0}: {1}")]
    ParseError(String, String),
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Attempt to load .env file, but don't fail if it doesn't exist
        let _ = dotenvy::dotenv();

        let username = env::var("BANK_USERNAME").unwrap_or_else(|_| "admin".to_string());
        if username.is_empty() {
            return Err(ConfigError::InvalidValue(
                "BANK_USERNAME".to_string(),
                "cannot be empty".to_string(),
            ));
        }

        let password =
            Zeroizing::new(env::var("BANK_PASSWORD").unwrap_or_else(|_| "password123".to_string()));
        if password.is_empty() {
            return Err(ConfigError::InvalidValue(
                "BANK_PASSWORD".to_string(),
                "cannot be empty".to_string(),
            ));
        }

        // Server
        let bind_addr_str = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3001".to_string());
        let bind_addr = bind_addr_str
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::ParseError("BIND_ADDR".to_string(), e.to_string()))?;

        let static_dir = PathBuf::from(env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string()));

        // Limits
        let max_body_bytes = parse_env_or_default("MAX_BODY_BYTES", 16_384)?;
        if max_body_bytes == 0 {
            return Err(ConfigError::InvalidValue(
                "MAX_BODY_BYTES".to_string(),
                "must be greater than zero".to_string(),
            ));
        }

        Ok(Config {
            username,
            password,
            bind_addr,
            static_dir,
            max_body_bytes,
        })
    }

    /// Configuration for tests and embedding: default credentials, ephemeral port.
    pub fn local(username: &str, password: &str) -> Self {
        Config {
            username: username.to_string(),
            password: Zeroizing::new(password.to_string()),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            static_dir: PathBuf::from("public"),
            max_body_bytes: 16_384,
        }
    }
}

/// Helper function to parse environment variable with a default value
fn parse_env_or_default<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| ConfigError::ParseError(key.to_string(), format!("{}: {}", e, val))),
        Err(_) => Ok(default),
    }
}
