use async_trait::async_trait;
use gloo_net::http::Request;
use greensort_core::{decode_entries, LeaderboardSource, LoadError, RankedEntry};

/// Reads the leaderboard over HTTP with a single GET.
#[derive(Debug, Clone)]
pub struct HttpLeaderboardSource {
    endpoint: String,
}

impl HttpLeaderboardSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait(?Send)]
impl LeaderboardSource for HttpLeaderboardSource {
    async fn fetch(&self) -> Result<Vec<RankedEntry>, LoadError> {
        let resp = Request::get(&self.endpoint)
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        if !resp.ok() {
            return Err(LoadError::Status(resp.status()));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        decode_entries(&body)
    }
}
