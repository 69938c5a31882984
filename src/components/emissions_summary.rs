use yew::prelude::*;

use crate::models::dashboard::CategorySplit;

#[derive(Properties, PartialEq)]
pub struct EmissionsSummaryProps {
    pub split: CategorySplit,
}

/// Latest-total category tiles. The buckets are fixed shares of the
/// latest total, not real per-category figures (the dashboard endpoint
/// carries none), so they always add back up to it.
#[function_component(EmissionsSummary)]
pub fn emissions_summary(props: &EmissionsSummaryProps) -> Html {
    let split = &props.split;

    html! {
        <div class="emissions-summary">
            <div class="summary-grid">
                <div class="summary-item">
                    <h3>{"Transportation"}</h3>
                    <p class="summary-value">{format!("{:.2} kgCO2e", split.transportation)}</p>
                </div>
                <div class="summary-item">
                    <h3>{"Electricity"}</h3>
                    <p class="summary-value">{format!("{:.2} kgCO2e", split.electricity)}</p>
                </div>
                <div class="summary-item">
                    <h3>{"Waste"}</h3>
                    <p class="summary-value">{format!("{:.2} kgCO2e", split.waste)}</p>
                </div>
            </div>
        </div>
    }
}
