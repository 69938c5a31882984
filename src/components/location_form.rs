use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::session::Session;
use crate::services::community_api::CommunityClient;

#[derive(Properties, PartialEq)]
pub struct LocationFormProps {
    pub session: Session,
}

/// Updates the account's social location on the community service.
#[function_component(LocationForm)]
pub fn location_form(props: &LocationFormProps) -> Html {
    let location = use_state(String::new);
    let error = use_state(|| None::<String>);
    let saved = use_state(|| false);

    let oninput = {
        let location = location.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            location.set(input.value());
        })
    };

    let onsubmit = {
        let location = location.clone();
        let error = error.clone();
        let saved = saved.clone();
        let token = props.session.token.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let value = (*location).clone();
            let error = error.clone();
            let saved = saved.clone();
            let token = token.clone();

            spawn_local(async move {
                let result = match CommunityClient::new(token) {
                    Ok(client) => client.update_location(&value).await,
                    Err(e) => Err(e),
                };

                match result {
                    Ok(()) => {
                        saved.set(true);
                        error.set(None);
                    }
                    Err(e) => {
                        saved.set(false);
                        error.set(Some(e.to_string()));
                    }
                }
            });
        })
    };

    html! {
        <div class="location-card">
            <h2>{"Provide Your Location"}</h2>
            if let Some(msg) = &*error {
                <p class="form-error">{msg}</p>
            }
            if *saved {
                <p class="form-notice">{"Location updated."}</p>
            }
            <form {onsubmit}>
                <input
                    type="text"
                    placeholder="Enter your location"
                    value={(*location).clone()}
                    {oninput}
                />
                <button type="submit" class="button-primary">{"Submit"}</button>
            </form>
        </div>
    }
}
