use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Channel not found: {0}")]
    ChannelNotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
