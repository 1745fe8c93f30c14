use std::fmt;

/// Result type for geovote-client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors raised while talking to the backend or loading configuration
#[derive(Debug)]
pub enum ClientError {
    /// Connection, TLS or timeout failure before a response arrived
    Transport { url: String, source: reqwest::Error },

    /// Backend answered with a non-2xx status
    Status { url: String, status: u16 },

    /// Response body was not the expected JSON shape
    Decode {
        url: String,
        source: serde_json::Error,
    },

    /// Configuration error
    Config(String),

    /// IO operation failed
    Io(std::io::Error),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Transport { url, source } => {
                write!(f, "Request to {} failed: {}", url, source)
            }
            ClientError::Status { url, status } => write!(f, "HTTP {} from {}", status, url),
            ClientError::Decode { url, source } => {
                write!(f, "Unexpected response from {}: {}", url, source)
            }
            ClientError::Config(msg) => write!(f, "Configuration error: {}", msg),
            ClientError::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Transport { source, .. } => Some(source),
            ClientError::Decode { source, .. } => Some(source),
            ClientError::Io(err) => Some(err),
            ClientError::Status { .. } | ClientError::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::Io(err)
    }
}

impl From<toml::de::Error> for ClientError {
    fn from(err: toml::de::Error) -> Self {
        ClientError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for ClientError {
    fn from(err: toml::ser::Error) -> Self {
        ClientError::Config(err.to_string())
    }
}
