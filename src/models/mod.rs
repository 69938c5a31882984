pub mod community;
pub mod consumption;
pub mod context;
pub mod dashboard;
pub mod error;
pub mod leaderboard;
pub mod session;
