use crate::{DiagnosticSink, LoadError, LoadState, RankedEntry};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

pub const LEADERBOARD_CONTEXT: &str = "Error fetching leaderboard";

/// Fixed message shown for every leaderboard failure.
pub const LEADERBOARD_ERROR_MESSAGE: &str = "Failed to fetch leaderboard data";

/// A one-shot read of the ranking collection.
///
/// Implementations return entries in server order and must already have
/// rejected payloads that are not a valid entry list (see
/// [`crate::decode_entries`]).
#[async_trait(?Send)]
pub trait LeaderboardSource {
    async fn fetch(&self) -> Result<Vec<RankedEntry>, LoadError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Committed,
    /// The owning view was disposed before the fetch settled.
    Discarded,
}

/// Run the single fetch for one mount of the leaderboard view.
///
/// `commit` is called at most once, and only while `token` is live. A
/// failure is reported to `sink` before the error state is committed.
pub async fn load_leaderboard<S, D, F>(
    source: &S,
    sink: &D,
    token: &CancellationToken,
    commit: F,
) -> Settlement
where
    S: LeaderboardSource + ?Sized,
    D: DiagnosticSink + ?Sized,
    F: FnOnce(LoadState<Vec<RankedEntry>>),
{
    if token.is_cancelled() {
        tracing::debug!("Leaderboard view disposed before fetch started");
        return Settlement::Discarded;
    }

    tracing::debug!("Fetching leaderboard");
    let outcome = source.fetch().await;

    if token.is_cancelled() {
        tracing::debug!("Leaderboard view disposed mid-fetch, dropping result");
        return Settlement::Discarded;
    }

    match &outcome {
        Ok(entries) => tracing::info!(rows = entries.len(), "Leaderboard ready"),
        Err(e) => sink.record(LEADERBOARD_CONTEXT, e),
    }

    commit(outcome.into());
    Settlement::Committed
}
