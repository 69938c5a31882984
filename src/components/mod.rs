pub mod auth_form;
pub mod chart;
pub mod community_feed;
pub mod community_page;
pub mod context_panel;
pub mod emissions_summary;
pub mod leaderboard;
pub mod location_form;
pub mod status;
pub mod tracker_form;
pub mod tracker_page;

pub use auth_form::AuthForm;
pub use community_page::CommunityPage;
pub use context_panel::ContextPanel;
pub use tracker_page::TrackerPage;
