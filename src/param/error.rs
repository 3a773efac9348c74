use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParamError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Missing environment variable: {0}")]
    MissingEnv(String),

    #[error("Parameter overlay lock poisoned")]
    LockPoisoned,
}
