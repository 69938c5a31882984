use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    #[prop_or(false)]
    pub loading: bool,
    #[prop_or_default]
    pub error: Option<String>,
}

/// Loading spinner / error block shared by the fetching views.
#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    if props.loading {
        return html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{"Loading data..."}</p>
            </div>
        };
    }

    match &props.error {
        Some(msg) => html! {
            <div class="status error">
                <p>{"❌ "}{msg}</p>
            </div>
        },
        None => Html::default(),
    }
}
