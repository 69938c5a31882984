use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Title},
    element::{AxisLabel, AxisType, TextStyle, Tooltip, Trigger},
    renderer::WasmRenderer,
    series::Line,
};
use gloo::events::EventListener;
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::models::dashboard::Dashboard;

const CHART_ID: &str = "history-chart";

#[derive(Properties, PartialEq)]
pub struct HistoryChartProps {
    pub dashboard: Rc<Dashboard>,
}

/// Line chart of the user's past submission totals, oldest to newest.
#[function_component(HistoryChart)]
pub fn history_chart(props: &HistoryChartProps) -> Html {
    let container_ref = use_node_ref();
    let series_data = use_memo(props.dashboard.clone(), |dashboard| dashboard.series_data());

    {
        let container_ref = container_ref.clone();

        use_effect_with(
            (series_data, container_ref),
            |(series_data, container_ref)| {
                let listener = container_ref.cast::<HtmlElement>().map(|container| {
                    render_chart(&container, series_data);

                    let series_data = series_data.clone();
                    EventListener::new(&web_sys::window().unwrap(), "resize", move |_| {
                        render_chart(&container, &series_data);
                    })
                });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={CHART_ID} />
        </div>
    }
}

fn render_chart(container: &HtmlElement, series_data: &(Vec<String>, Vec<f64>)) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    let chart = build_chart(series_data);
    if let Err(e) = WasmRenderer::new(width, height).render(CHART_ID, &chart) {
        web_sys::console::error_1(&format!("Render error: {e:?}").into());
    }
}

fn build_chart(series_data: &(Vec<String>, Vec<f64>)) -> CharmingChart {
    let (x_data, y_data) = series_data;

    CharmingChart::new()
        .title(
            Title::new()
                .text("Carbon Emissions History")
                .left("center")
                .text_style(TextStyle::new().font_size(16)),
        )
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("14%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(x_data.clone())
                .axis_label(AxisLabel::new().rotate(45)),
        )
        .y_axis(Axis::new().type_(AxisType::Value).name("kgCO2e"))
        .series(Line::new().data(y_data.clone()).smooth(0.1))
}
