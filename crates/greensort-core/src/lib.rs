// Domain modules
pub mod badge;
pub mod config;
pub mod diagnostics;
pub mod education;
pub mod entry;
pub mod error;
pub mod lifecycle;
pub mod loader;
pub mod plastic;
pub mod rows;

pub use badge::{badge_for_points, BadgeTier, BADGE_TIERS, POINTS_PER_ITEM};
pub use config::{GreenSortConfig, LeaderboardConfig, DEFAULT_LEADERBOARD_ENDPOINT};
pub use diagnostics::{DiagnosticSink, NullSink, TracingSink};
pub use education::{card_for, MaterialCard, EDUCATION_HEADING, MATERIAL_CARDS};
pub use entry::{decode_entries, validate_entries, RankedEntry, PODIUM_MAX_RANK};
pub use error::{GreenSortError, LoadError, Result};
pub use lifecycle::LoadState;
pub use loader::{
    load_leaderboard, LeaderboardSource, Settlement, LEADERBOARD_CONTEXT,
    LEADERBOARD_ERROR_MESSAGE,
};
pub use plastic::PlasticType;
pub use rows::{leaderboard_rows, LeaderboardRow};

// Re-exported so front ends share the token type the loader checks.
pub use tokio_util::sync::CancellationToken;
