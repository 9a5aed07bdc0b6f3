// src/normalize/mod.rs

pub mod leaderboard;
pub mod participants;

pub use leaderboard::LeaderboardRow;
pub use participants::ParticipantRow;
