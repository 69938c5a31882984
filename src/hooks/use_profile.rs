use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::fetch_state::FetchState;
use crate::models::session::Session;
use crate::services::carbon_api::{CarbonClient, Profile};

/// Fetches the session user's profile on mount. The greeting, the
/// leaderboard city scope and the submission payload all read from it.
#[hook]
pub fn use_profile(session: Session) -> UseStateHandle<FetchState<Profile>> {
    let state = use_state(|| FetchState::Loading);

    {
        let state = state.clone();

        use_effect_with(session, move |session| {
            let state = state.clone();
            let session = session.clone();
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            state.set(FetchState::Loading);

            spawn_local(async move {
                let result = match CarbonClient::new(session.token.clone()) {
                    Ok(client) => client.fetch_profile(session.user_id).await,
                    Err(e) => Err(e),
                };

                match result {
                    Ok(profile) if !aborted_check.get() => {
                        state.set(FetchState::Loaded(Rc::new(profile)));
                    }
                    Err(e) if !aborted_check.get() => {
                        // Views degrade to empty fields; not fatal
                        web_sys::console::warn_1(
                            &format!("Failed to fetch profile: {e}").into(),
                        );
                        state.set(FetchState::Error(e.to_string()));
                    }
                    _ => {} // Request was abandoned, ignore result
                }
            });

            move || aborted.set(true)
        });
    }

    state
}
