use crate::{GreenSortError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_LEADERBOARD_ENDPOINT: &str = "/api/leaderboard";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreenSortConfig {
    #[serde(default)]
    pub leaderboard: LeaderboardConfig,
}

impl GreenSortConfig {
    /// Parse a JSON config document. Missing sections fall back to defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: GreenSortConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.leaderboard.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardConfig {
    pub endpoint: String,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_LEADERBOARD_ENDPOINT.to_string(),
        }
    }
}

impl LeaderboardConfig {
    fn validate(&self) -> Result<()> {
        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() {
            return Err(GreenSortError::Config(
                "leaderboard.endpoint must not be empty".to_string(),
            ));
        }

        let supported = ["/", "http://", "https://"];
        if !supported.iter().any(|prefix| endpoint.starts_with(prefix)) {
            return Err(GreenSortError::Config(format!(
                "leaderboard.endpoint must be a path or http(s) URL, got {:?}",
                self.endpoint
            )));
        }

        Ok(())
    }
}
