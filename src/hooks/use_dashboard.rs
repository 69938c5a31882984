use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::fetch_state::FetchState;
use crate::models::{dashboard::Dashboard, session::Session};
use crate::services::carbon_api::CarbonClient;

/// Handle returned by `use_dashboard`. `refresh` re-fetches the
/// history; the submission flow fires it after a successful submit so
/// derived views stay current without local recomputation.
#[derive(Clone, PartialEq)]
pub struct DashboardHandle {
    pub state: UseStateHandle<FetchState<Dashboard>>,
    pub refresh: Callback<()>,
}

#[hook]
pub fn use_dashboard(session: Session) -> DashboardHandle {
    let state = use_state(|| FetchState::Loading);
    let trigger = use_state(|| 0u32);

    {
        let state = state.clone();
        let trigger_value = *trigger;

        use_effect_with((trigger_value, session), move |(_, session)| {
            let state = state.clone();
            let session = session.clone();
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            state.set(FetchState::Loading);

            spawn_local(async move {
                let result = match CarbonClient::new(session.token.clone()) {
                    Ok(client) => client.fetch_dashboard(session.user_id).await,
                    Err(e) => Err(e),
                };

                match result {
                    Ok(dashboard) if !aborted_check.get() => {
                        state.set(FetchState::Loaded(Rc::new(dashboard)));
                    }
                    Err(e) if !aborted_check.get() => {
                        state.set(FetchState::Error(e.to_string()));
                    }
                    _ => {} // Request was abandoned, ignore result
                }
            });

            move || aborted.set(true)
        });
    }

    let refresh = {
        let trigger = trigger.clone();
        Callback::from(move |()| trigger.set(*trigger + 1))
    };

    DashboardHandle { state, refresh }
}
