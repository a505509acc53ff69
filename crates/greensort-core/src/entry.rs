use crate::LoadError;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

/// Ranks up to and including this one get the podium treatment.
pub const PODIUM_MAX_RANK: u32 = 3;

/// One row of the leaderboard, exactly as the server sent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry {
    #[serde(deserialize_with = "string_or_integer")]
    pub id: String,
    #[serde(alias = "display_name", alias = "username")]
    pub display_name: String,
    #[serde(alias = "points")]
    pub score: f64,
    pub rank: u32,
}

impl RankedEntry {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, score: f64, rank: u32) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            score,
            rank,
        }
    }

    pub fn is_podium(&self) -> bool {
        self.rank <= PODIUM_MAX_RANK
    }
}

fn string_or_integer<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Signed(i64),
        Unsigned(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Signed(n) => n.to_string(),
        RawId::Unsigned(n) => n.to_string(),
    })
}

/// Decode a leaderboard response body.
///
/// The order of the returned entries is the order of the payload. Anything
/// that cannot be read as a list of well-formed entries is a
/// [`LoadError::Malformed`].
pub fn decode_entries(body: &str) -> Result<Vec<RankedEntry>, LoadError> {
    let entries: Vec<RankedEntry> = serde_json::from_str(body)?;
    validate_entries(&entries)?;
    Ok(entries)
}

pub fn validate_entries(entries: &[RankedEntry]) -> Result<(), LoadError> {
    let mut seen = HashSet::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        if entry.rank == 0 {
            return Err(LoadError::Malformed(format!(
                "entry {} ({}) has rank 0",
                index, entry.id
            )));
        }
        if !entry.score.is_finite() || entry.score < 0.0 {
            return Err(LoadError::Malformed(format!(
                "entry {} ({}) has invalid score {}",
                index, entry.id, entry.score
            )));
        }
        if !seen.insert(entry.id.as_str()) {
            return Err(LoadError::Malformed(format!(
                "duplicate entry id {:?}",
                entry.id
            )));
        }
    }

    Ok(())
}
