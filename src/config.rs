use crate::error::{config::ConfigError, AppError};

/// Minimum length for the session signing secret, in bytes.
///
/// The signing key is derived from this secret; anything shorter gives too
/// little entropy for HKDF key derivation.
const MIN_SESSION_SECRET_LEN: usize = 32;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

pub struct Config {
    pub database_url: String,

    /// Secret used to derive the session cookie signing key.
    pub session_secret: String,

    /// API key for the generative-AI provider.
    pub gemini_api_key: String,

    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let session_secret = std::env::var("SESSION_SECRET")
            .map_err(|_| ConfigError::MissingEnvVar("SESSION_SECRET".to_string()))?;

        if session_secret.len() < MIN_SESSION_SECRET_LEN {
            return Err(ConfigError::SessionSecretTooShort(MIN_SESSION_SECRET_LEN).into());
        }

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            session_secret,
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .map_err(|_| ConfigError::MissingEnvVar("GEMINI_API_KEY".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
        })
    }
}
