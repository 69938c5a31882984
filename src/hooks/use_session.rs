use yew::prelude::*;

use crate::models::session::Session;
use crate::services::session_store::SessionStore;

/// Owned session manager handed to the component tree through a
/// context provider. Views read and change session state through this
/// handle only; the storage keys stay private to `SessionStore`.
#[derive(Clone, PartialEq)]
pub struct SessionHandle {
    pub session: Option<Session>,
    pub login: Callback<Session>,
    pub logout: Callback<()>,
}

/// Root hook: loads the persisted session once and exposes the
/// login/logout transitions. Called exactly once, by the app shell.
#[hook]
pub fn use_session_manager() -> SessionHandle {
    let session = use_state(SessionStore::load);

    let login = {
        let session = session.clone();
        Callback::from(move |new_session: Session| {
            SessionStore::save(&new_session);
            session.set(Some(new_session));
        })
    };

    let logout = {
        let session = session.clone();
        Callback::from(move |()| {
            SessionStore::clear();
            session.set(None);
        })
    };

    SessionHandle {
        session: (*session).clone(),
        login,
        logout,
    }
}

/// Consumer hook for any component below the provider.
#[hook]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().expect("SessionHandle context not provided")
}
