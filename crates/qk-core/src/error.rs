use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Malformed identity line {line} ({reason}): {content}")]
    MalformedIdentity {
        line: usize,
        content: String,
        reason: &'static str,
    },

    #[error("Malformed kill line {line} ({reason}): {content}")]
    MalformedKill {
        line: usize,
        content: String,
        reason: &'static str,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}
