use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::context::{ContextData, ContextPolicy, Place};
use crate::services::context_api::ContextClient;

/// Handle returned by `use_context_panel`. `search` runs the pipeline
/// for the typed location; `locate` resolves the browser position into
/// a place first, then runs the same pipeline.
#[derive(Clone, PartialEq)]
pub struct ContextHandle {
    pub location: UseStateHandle<String>,
    pub data: UseStateHandle<ContextData>,
    pub pending: UseStateHandle<bool>,
    pub error: UseStateHandle<Option<String>>,
    pub search: Callback<()>,
    pub locate: Callback<()>,
}

#[hook]
pub fn use_context_panel(policy: ContextPolicy) -> ContextHandle {
    let location = use_state(String::new);
    let data = use_state(ContextData::default);
    let pending = use_state(|| false);
    let error = use_state(|| None);

    // One pipeline runner shared by the search and locate paths.
    let run_pipeline: Rc<dyn Fn(Place)> = {
        let data = data.clone();
        let pending = pending.clone();
        let error = error.clone();

        Rc::new(move |place: Place| {
            let data = data.clone();
            let pending = pending.clone();
            let error = error.clone();

            pending.set(true);

            spawn_local(async move {
                let report = match ContextClient::new() {
                    Ok(client) => client.load_context(&place).await,
                    Err(e) => {
                        data.set(ContextData::default());
                        error.set(Some(e.to_string()));
                        pending.set(false);
                        return;
                    }
                };

                if report.any_failed() {
                    error.set(Some(format!(
                        "Some context could not be loaded ({})",
                        report.failures.join("; ")
                    )));
                } else {
                    error.set(None);
                }

                data.set(report.into_data(policy));
                pending.set(false);
            });
        })
    };

    let search = {
        let location = location.clone();
        let data = data.clone();
        let error = error.clone();
        let run = run_pipeline.clone();

        Callback::from(move |()| match (*location).parse::<Place>() {
            Ok(place) => run(place),
            Err(e) => {
                // Rejected input resets everything without a network call
                data.set(ContextData::default());
                error.set(Some(e.to_string()));
            }
        })
    };

    let locate = {
        let location = location.clone();
        let error = error.clone();
        let run = run_pipeline.clone();

        Callback::from(move |()| {
            let Some(geolocation) = web_sys::window().and_then(|w| w.navigator().geolocation().ok())
            else {
                error.set(Some("Geolocation is not supported by this browser.".to_string()));
                return;
            };

            let location = location.clone();
            let run = run.clone();
            let error_on_geocode = error.clone();
            let error_on_denied = error.clone();

            let on_position = Closure::once_into_js(move |position: web_sys::Position| {
                let coords = position.coords();
                let (lat, lon) = (coords.latitude(), coords.longitude());

                spawn_local(async move {
                    let result = match ContextClient::new() {
                        Ok(client) => client.reverse_geocode(lat, lon).await,
                        Err(e) => Err(e),
                    };

                    match result {
                        Ok(place) => {
                            location.set(place.to_string());
                            run(place);
                        }
                        Err(e) => error_on_geocode.set(Some(e.to_string())),
                    }
                });
            });

            let on_error = Closure::once_into_js(move |_err: web_sys::PositionError| {
                error_on_denied.set(Some("Unable to determine your location.".to_string()));
            });

            if let Err(e) = geolocation.get_current_position_with_error_callback(
                on_position.unchecked_ref(),
                Some(on_error.unchecked_ref()),
            ) {
                web_sys::console::warn_1(&format!("Geolocation request failed: {e:?}").into());
            }
        })
    };

    ContextHandle {
        location,
        data,
        pending,
        error,
        search,
        locate,
    }
}
