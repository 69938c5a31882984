use yew::prelude::*;

use crate::components::community_feed::CommunityFeed;
use crate::components::location_form::LocationForm;
use crate::hooks::use_profile::use_profile;
use crate::models::session::Session;

#[derive(Properties, PartialEq)]
pub struct CommunityPageProps {
    pub session: Session,
}

/// Protected community view: greeting, post feed and the social
/// location form.
#[function_component(CommunityPage)]
pub fn community_page(props: &CommunityPageProps) -> Html {
    let profile = use_profile(props.session.clone());
    let name = profile.data().map(|p| p.name.clone()).unwrap_or_default();

    html! {
        <div class="community-page">
            if !name.is_empty() {
                <p class="greeting">{format!("Welcome, {name}")}</p>
            }
            <CommunityFeed session={props.session.clone()} />
            <LocationForm session={props.session.clone()} />
        </div>
    }
}
