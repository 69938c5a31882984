use std::rc::Rc;
use yew::prelude::*;

use crate::models::leaderboard::Leaderboard;

#[derive(Properties, PartialEq)]
pub struct LeaderboardTableProps {
    pub board: Rc<Leaderboard>,
}

/// City ranking in the server's order with a positional rank column.
#[function_component(LeaderboardTable)]
pub fn leaderboard_table(props: &LeaderboardTableProps) -> Html {
    if props.board.is_empty() {
        return html! { <p class="leaderboard-empty">{"No entries for this city yet."}</p> };
    }

    html! {
        <table class="leaderboard-table">
            <thead>
                <tr>
                    <th>{"Rank"}</th>
                    <th>{"User"}</th>
                    <th>{"City"}</th>
                    <th>{"Total Carbon Footprint"}</th>
                </tr>
            </thead>
            <tbody>
                {
                    props.board.ranked().map(|(rank, entry)| {
                        html! {
                            <tr key={rank}>
                                <td>{rank}</td>
                                <td>{&entry.name}</td>
                                <td>{&entry.city}</td>
                                <td>{format!("{:.2} kgCO2e", entry.total_carbon_footprint)}</td>
                            </tr>
                        }
                    }).collect::<Html>()
                }
            </tbody>
        </table>
    }
}
