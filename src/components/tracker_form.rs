use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::{consumption::ConsumptionForm, session::Session};
use crate::services::carbon_api::CarbonClient;

#[derive(Properties, PartialEq)]
pub struct TrackerFormProps {
    pub session: Session,
    /// Profile city/name, forwarded into the submission payload.
    pub city: String,
    pub name: String,
    /// Fired after a successful submission so the dashboard re-fetches.
    pub on_submitted: Callback<()>,
}

/// Edits one string field of the form through clone-and-set.
fn edit_form<F>(form: &UseStateHandle<ConsumptionForm>, apply: F) -> Callback<InputEvent>
where
    F: Fn(&mut ConsumptionForm, String) + 'static,
{
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        apply(&mut next, input.value());
        form.set(next);
    })
}

/// Daily consumption form: transport legs, electricity and waste.
/// Validation happens entirely before the network call; the computed
/// total comes back from the calculation service.
#[function_component(TrackerForm)]
pub fn tracker_form(props: &TrackerFormProps) -> Html {
    let form = use_state(ConsumptionForm::default);
    let error = use_state(|| None::<String>);
    let total = use_state(|| None::<f64>);

    let add_row = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            next.add_transport_row();
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let error = error.clone();
        let total = total.clone();
        let session = props.session.clone();
        let city = props.city.clone();
        let name = props.name.clone();
        let on_submitted = props.on_submitted.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let submission = match form.validate(session.user_id, &city, &name) {
                Ok(submission) => submission,
                Err(err) => {
                    error.set(Some(err.to_string()));
                    return;
                }
            };
            error.set(None);

            let error = error.clone();
            let total = total.clone();
            let on_submitted = on_submitted.clone();
            let token = session.token.clone();

            spawn_local(async move {
                let result = match CarbonClient::new(token) {
                    Ok(client) => client.submit(&submission).await,
                    Err(e) => Err(e),
                };

                match result {
                    Ok(computed) => {
                        total.set(Some(computed));
                        on_submitted.emit(());
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        })
    };

    html! {
        <form class="tracker-form" {onsubmit}>
            <h2>{"Submit Daily Consumption Details"}</h2>

            if let Some(msg) = &*error {
                <p class="form-error">{msg}</p>
            }
            if let Some(value) = *total {
                <p class="form-notice">
                    {format!("Your total carbon footprint is {value:.2} kgCO2e")}
                </p>
            }

            <fieldset>
                <legend>{"Transportation"}</legend>
                {
                    form.transport.iter().enumerate().map(|(index, row)| {
                        let on_distance = edit_form(&form, move |f, v| f.transport[index].distance = v);
                        let on_mode = edit_form(&form, move |f, v| f.transport[index].mode = v);
                        let on_minutes = edit_form(&form, move |f, v| f.transport[index].minutes = v);

                        html! {
                            <div class="transport-row" key={index}>
                                <input
                                    type="number"
                                    placeholder="Distance (km)"
                                    value={row.distance.clone()}
                                    oninput={on_distance}
                                />
                                <input
                                    type="text"
                                    placeholder="Mode of Transport"
                                    value={row.mode.clone()}
                                    oninput={on_mode}
                                />
                                <input
                                    type="number"
                                    placeholder="Time (min, optional)"
                                    value={row.minutes.clone()}
                                    oninput={on_minutes}
                                />
                            </div>
                        }
                    }).collect::<Html>()
                }
                <button type="button" onclick={add_row}>{"Add More"}</button>
            </fieldset>

            <fieldset>
                <legend>{"Electricity"}</legend>
                <input
                    type="number"
                    placeholder="Previous Month Usage (kWh)"
                    value={form.previous_usage.clone()}
                    oninput={edit_form(&form, |f, v| f.previous_usage = v)}
                />
                <input
                    type="number"
                    placeholder="Today's Usage (kWh)"
                    value={form.today_usage.clone()}
                    oninput={edit_form(&form, |f, v| f.today_usage = v)}
                />
            </fieldset>

            <fieldset>
                <legend>{"Waste"}</legend>
                <input
                    type="number"
                    placeholder="Dry Waste (kg)"
                    value={form.dry_waste.clone()}
                    oninput={edit_form(&form, |f, v| f.dry_waste = v)}
                />
                <input
                    type="number"
                    placeholder="Wet Waste (kg)"
                    value={form.wet_waste.clone()}
                    oninput={edit_form(&form, |f, v| f.wet_waste = v)}
                />
            </fieldset>

            <button type="submit" class="button-primary">{"Calculate Carbon Footprint"}</button>
        </form>
    }
}
