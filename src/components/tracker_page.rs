use yew::prelude::*;

use crate::components::chart::HistoryChart;
use crate::components::emissions_summary::EmissionsSummary;
use crate::components::leaderboard::LeaderboardTable;
use crate::components::status::Status;
use crate::components::tracker_form::TrackerForm;
use crate::hooks::use_dashboard::use_dashboard;
use crate::hooks::use_leaderboard::use_leaderboard;
use crate::hooks::use_profile::use_profile;
use crate::models::session::Session;

#[derive(Properties, PartialEq)]
pub struct TrackerPageProps {
    pub session: Session,
}

/// Protected tracker view: latest emissions split, on-demand city
/// leaderboard, submission history chart and the consumption form.
#[function_component(TrackerPage)]
pub fn tracker_page(props: &TrackerPageProps) -> Html {
    let profile = use_profile(props.session.clone());
    let dashboard = use_dashboard(props.session.clone());
    let leaderboard = use_leaderboard(props.session.clone());
    let show_leaderboard = use_state(|| false);

    let (email, city, name) = profile.data().map_or_else(
        || (String::new(), String::new(), String::new()),
        |p| (p.email.clone(), p.city.clone(), p.name.clone()),
    );

    let toggle_leaderboard = {
        let show_leaderboard = show_leaderboard.clone();
        let load = leaderboard.load.clone();
        let city = city.clone();
        Callback::from(move |_: MouseEvent| {
            if !*show_leaderboard {
                load.emit(city.clone());
            }
            show_leaderboard.set(!*show_leaderboard);
        })
    };

    html! {
        <div class="tracker-page">
            if !email.is_empty() {
                <p class="greeting">{format!("Welcome, {email}")}</p>
            }

            <section>
                <h2>{"Latest Total Emissions"}</h2>
                if let Some(data) = dashboard.state.data() {
                    if let Some(split) = data.category_split() {
                        <EmissionsSummary {split} />
                    } else {
                        <p>{"No submissions yet."}</p>
                    }
                }
            </section>

            <section>
                <button class="button-secondary" onclick={toggle_leaderboard}>{"Leaderboard"}</button>
                if *show_leaderboard {
                    <Status
                        loading={leaderboard.state.is_loading()}
                        error={leaderboard.state.error().map(ToString::to_string)}
                    />
                    if let Some(board) = leaderboard.state.data() {
                        <LeaderboardTable board={board.clone()} />
                    }
                }
            </section>

            <section>
                <h2>{"Carbon Emissions History"}</h2>
                <Status
                    loading={dashboard.state.is_loading()}
                    error={dashboard.state.error().map(ToString::to_string)}
                />
                if let Some(data) = dashboard.state.data() {
                    if !data.is_empty() {
                        <HistoryChart dashboard={data.clone()} />
                    }
                }
            </section>

            <TrackerForm
                session={props.session.clone()}
                {city}
                {name}
                on_submitted={dashboard.refresh.clone()}
            />
        </div>
    }
}
