use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::fetch_state::FetchState;
use crate::models::{leaderboard::Leaderboard, session::Session};
use crate::services::carbon_api::CarbonClient;

/// Handle returned by `use_leaderboard`. The ranking is fetched on
/// demand: the state stays `Idle` until `load` fires with a city.
#[derive(Clone, PartialEq)]
pub struct LeaderboardHandle {
    pub state: UseStateHandle<FetchState<Leaderboard>>,
    pub load: Callback<String>,
}

#[hook]
pub fn use_leaderboard(session: Session) -> LeaderboardHandle {
    let state = use_state(|| FetchState::Idle);

    let load = {
        let state = state.clone();
        Callback::from(move |city: String| {
            let state = state.clone();
            let session = session.clone();

            state.set(FetchState::Loading);

            spawn_local(async move {
                let result = match CarbonClient::new(session.token.clone()) {
                    Ok(client) => client.fetch_leaderboard(&city).await,
                    Err(e) => Err(e),
                };

                match result {
                    Ok(board) => state.set(FetchState::Loaded(Rc::new(board))),
                    Err(e) => state.set(FetchState::Error(e.to_string())),
                }
            });
        })
    };

    LeaderboardHandle { state, load }
}
