pub mod fetch_state;
pub mod use_community;
pub mod use_context_panel;
pub mod use_dashboard;
pub mod use_leaderboard;
pub mod use_profile;
pub mod use_session;
