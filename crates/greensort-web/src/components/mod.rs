pub mod header;
pub mod leaderboard_table;
pub mod loading;
pub mod material_card;
pub mod nav;
