use gloo_storage::{LocalStorage, Storage};

use crate::models::session::Session;

const USER_ID_KEY: &str = "userId";
const TOKEN_KEY: &str = "jwtToken";

/// Owner of the two durable localStorage entries. Every read and write
/// of session state goes through here; views get the session from the
/// `use_session` context handle, never from storage directly.
pub struct SessionStore;

impl SessionStore {
    /// Reads the persisted session, if both parts are present.
    pub fn load() -> Option<Session> {
        let user_id: i64 = LocalStorage::get(USER_ID_KEY).ok()?;
        let token: String = LocalStorage::get(TOKEN_KEY).ok()?;
        if token.is_empty() {
            return None;
        }
        Some(Session { user_id, token })
    }

    /// Persists the session.
    pub fn save(session: &Session) {
        if let Err(e) = LocalStorage::set(USER_ID_KEY, session.user_id) {
            web_sys::console::warn_1(&format!("Failed to save user id: {e:?}").into());
        }
        if let Err(e) = LocalStorage::set(TOKEN_KEY, &session.token) {
            web_sys::console::warn_1(&format!("Failed to save token: {e:?}").into());
        }
    }

    /// Removes both entries.
    pub fn clear() {
        LocalStorage::delete(USER_ID_KEY);
        LocalStorage::delete(TOKEN_KEY);
    }
}
