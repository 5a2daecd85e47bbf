use thiserror::Error;

pub const FAILED_TO_LOAD: &str = "Failed to load packages";
pub const INVALID_FORMAT: &str = "Invalid data format received";

/// Failure of a single transport attempt.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    #[error("transport unavailable")]
    Unavailable,

    #[error("transport returned no data")]
    NoData,

    #[error("HTTP {0}")]
    Status(u16),

    #[error("network error: {0}")]
    Network(String),

    #[error("failed to decode response: {0}")]
    Decode(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("invalid plans payload: {0}")]
    InvalidFormat(String),
}

impl LoadError {
    /// The message shown in the page's error banner.
    pub fn user_message(&self) -> &'static str {
        match self {
            LoadError::Transport(_) => FAILED_TO_LOAD,
            LoadError::InvalidFormat(_) => INVALID_FORMAT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            LoadError::from(TransportError::Status(500)).user_message(),
            "Failed to load packages"
        );
        assert_eq!(
            LoadError::InvalidFormat("success is false".into()).user_message(),
            "Invalid data format received"
        );
    }

    #[test]
    fn test_status_embeds_code() {
        assert_eq!(TransportError::Status(503).to_string(), "HTTP 503");
    }
}
