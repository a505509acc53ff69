pub mod education;
pub mod leaderboard;
