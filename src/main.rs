use yew::prelude::*;

use ecotrace::components::{AuthForm, CommunityPage, ContextPanel, TrackerPage};
use ecotrace::hooks::use_session::{SessionHandle, use_session_manager};

#[derive(Clone, Copy, PartialEq, Eq)]
enum View {
    Home,
    Tracker,
    Community,
}

#[function_component(App)]
fn app() -> Html {
    let session_handle = use_session_manager();
    let view = use_state(|| View::Home);

    let nav_button = |label: &'static str, target: View| -> Html {
        let view = view.clone();
        let class = if *view == target {
            "nav-button active"
        } else {
            "nav-button"
        };
        let onclick = Callback::from(move |_: MouseEvent| view.set(target));
        html! { <button {class} {onclick}>{label}</button> }
    };

    let on_logout = {
        let logout = session_handle.logout.clone();
        Callback::from(move |_: MouseEvent| logout.emit(()))
    };

    // Protected views fall back to the auth form until a session exists
    let body = match (*view, &session_handle.session) {
        (View::Home, _) => html! { <ContextPanel /> },
        (View::Tracker, Some(session)) => html! { <TrackerPage session={session.clone()} /> },
        (View::Community, Some(session)) => html! { <CommunityPage session={session.clone()} /> },
        (_, None) => html! { <AuthForm /> },
    };

    html! {
        <ContextProvider<SessionHandle> context={session_handle.clone()}>
            <div class="app-container">
                <header class="app-header">
                    <h1>{"EcoTrace"}</h1>
                    <nav>
                        { nav_button("Home", View::Home) }
                        { nav_button("Carbon Tracker", View::Tracker) }
                        { nav_button("Community", View::Community) }
                        if session_handle.session.is_some() {
                            <button class="logout-button" onclick={on_logout}>{"Logout"}</button>
                        }
                    </nav>
                </header>

                <main class="app-main">
                    { body }
                </main>

                <style>
                    {include_str!("style.css")}
                </style>
            </div>
        </ContextProvider<SessionHandle>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
