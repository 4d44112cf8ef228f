use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Check `.env.example` for the variables the application expects.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// SESSION_SECRET is too short to derive a signing key from.
    #[error("SESSION_SECRET must be at least {0} bytes")]
    SessionSecretTooShort(usize),
}
