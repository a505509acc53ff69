use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreenSortError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown plastic type: {0}")]
    UnknownPlastic(String),
}

pub type Result<T> = std::result::Result<T, GreenSortError>;

/// Why a leaderboard fetch failed. Kept for diagnostics only; every variant
/// renders as the same user-facing message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    #[error("Malformed payload: {0}")]
    Malformed(String),
}

impl LoadError {
    pub fn kind(&self) -> &'static str {
        match self {
            LoadError::Network(_) => "network",
            LoadError::Status(_) => "status",
            LoadError::Malformed(_) => "malformed",
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Malformed(e.to_string())
    }
}
