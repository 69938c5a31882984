use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_context_panel::use_context_panel;
use crate::models::context::{ContextPolicy, WeatherSnapshot};

const PLACEHOLDER: &str = "N/A";

fn tile(label: &str, value: String) -> Html {
    html! {
        <div class="context-tile">
            <h3>{label}</h3>
            <p class="context-value">{value}</p>
        </div>
    }
}

fn weather_tiles(weather: Option<&WeatherSnapshot>) -> Html {
    let text = |f: &dyn Fn(&WeatherSnapshot) -> String| {
        weather.map_or_else(|| PLACEHOLDER.to_string(), f)
    };

    html! {
        <>
            { tile("Temperature", text(&|w| format!("{:.1}°C", w.temperature))) }
            { tile("Feels Like", text(&|w| format!("{:.1}°C", w.feels_like))) }
            { tile("Humidity", text(&|w| format!("{}%", w.humidity))) }
            { tile("Wind Speed", text(&|w| format!("{:.2} KPH", w.wind_speed_kph))) }
            { tile("Visibility", text(&|w| format!("{:.1} km", f64::from(w.visibility_m) / 1000.0))) }
            { tile("Pressure", text(&|w| format!("{} hPa", w.pressure))) }
            { tile("Sunrise", text(&|w| w.sunrise.map_or_else(|| PLACEHOLDER.to_string(), |t| t.format("%H:%M").to_string()))) }
            { tile("Sunset", text(&|w| w.sunset.map_or_else(|| PLACEHOLDER.to_string(), |t| t.format("%H:%M").to_string()))) }
        </>
    }
}

/// Place-keyed weather, air quality, news and video context. Failed
/// pipeline stages fall back to placeholders under the default
/// partial-results policy.
#[function_component(ContextPanel)]
pub fn context_panel() -> Html {
    let context = use_context_panel(ContextPolicy::default());

    let oninput = {
        let location = context.location.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            location.set(input.value());
        })
    };

    let on_search = {
        let search = context.search.clone();
        Callback::from(move |_: MouseEvent| search.emit(()))
    };

    let on_locate = {
        let locate = context.locate.clone();
        Callback::from(move |_: MouseEvent| locate.emit(()))
    };

    let data = &*context.data;
    let description = data
        .weather
        .as_ref()
        .map(|w| w.description.clone())
        .filter(|d| !d.is_empty());

    html! {
        <div class="context-panel">
            <div class="context-search">
                <input
                    type="text"
                    placeholder="Enter location (e.g., City, State)"
                    value={(*context.location).clone()}
                    {oninput}
                />
                <button onclick={on_search} disabled={*context.pending}>{"Search"}</button>
                <button onclick={on_locate} disabled={*context.pending}>{"Use My Location"}</button>
            </div>

            if *context.pending {
                <div class="status loading">
                    <div class="spinner"></div>
                    <p>{"Loading context..."}</p>
                </div>
            }
            if let Some(msg) = &*context.error {
                <p class="form-error">{msg}</p>
            }

            if let Some(description) = description {
                <p class="context-description">{description}</p>
            }

            <div class="context-grid">
                { weather_tiles(data.weather.as_ref()) }
                {
                    match &data.air_quality {
                        Some(reading) => {
                            let level = reading.level();
                            html! {
                                <div class="context-tile">
                                    <h3>{"AQI"}</h3>
                                    <p class={classes!("context-value", "aqi-badge", level.css_class())}>
                                        {format!("{} ({})", reading.index, level.label())}
                                    </p>
                                </div>
                            }
                        }
                        None => tile("AQI", PLACEHOLDER.to_string()),
                    }
                }
            </div>

            if !data.headlines.is_empty() {
                <section class="context-links">
                    <h3>{"Latest News"}</h3>
                    <div class="link-grid">
                        {
                            data.headlines.iter().map(|headline| html! {
                                <a class="link-card" href={headline.url.clone()} target="_blank" rel="noopener noreferrer">
                                    <img src={headline.thumbnail.clone()} alt="News thumbnail" />
                                    <span>{&headline.title}</span>
                                </a>
                            }).collect::<Html>()
                        }
                    </div>
                </section>
            }

            if !data.videos.is_empty() {
                <section class="context-links">
                    <h3>{"Videos"}</h3>
                    <div class="link-grid">
                        {
                            data.videos.iter().map(|video| html! {
                                <a class="link-card" href={video.url.clone()} target="_blank" rel="noopener noreferrer">
                                    <img src={video.thumbnail.clone()} alt="Video thumbnail" />
                                    <span>{&video.title}</span>
                                </a>
                            }).collect::<Html>()
                        }
                    </div>
                </section>
            }
        </div>
    }
}
