pub mod auth_api;
pub mod carbon_api;
pub mod community_api;
pub mod context_api;
pub mod http;
pub mod session_store;
