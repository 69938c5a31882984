use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::components::status::Status;
use crate::hooks::use_community::use_community;
use crate::models::session::Session;

#[derive(Properties, PartialEq)]
pub struct CommunityFeedProps {
    pub session: Session,
}

/// Post feed with a compose box. New posts are prepended from the
/// service's echoed copy, never synthesized locally.
#[function_component(CommunityFeed)]
pub fn community_feed(props: &CommunityFeedProps) -> Html {
    let community = use_community(props.session.clone());

    let oninput = {
        let draft = community.draft.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            draft.set(area.value());
        })
    };

    let onsubmit = {
        let submit = community.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    html! {
        <div class="community-feed">
            <div class="compose-card">
                <h2>{"Create a New Post"}</h2>
                if let Some(msg) = &*community.error {
                    <p class="form-error">{msg}</p>
                }
                <form {onsubmit}>
                    <textarea
                        rows="4"
                        placeholder="Write your post here..."
                        value={(*community.draft).clone()}
                        {oninput}
                    />
                    <button type="submit" class="button-primary">{"Post"}</button>
                </form>
            </div>

            <section class="posts-section">
                <h2>{"Posts"}</h2>
                <Status
                    loading={community.feed.is_loading()}
                    error={community.feed.error().map(ToString::to_string)}
                />
                if let Some(posts) = community.feed.data() {
                    if posts.is_empty() {
                        <p>{"No posts available."}</p>
                    } else {
                        {
                            posts.iter().enumerate().map(|(index, post)| {
                                html! {
                                    <article class="post" key={post.id.unwrap_or(index as i64)}>
                                        <h3>{&post.user_name}</h3>
                                        <p>{&post.content}</p>
                                    </article>
                                }
                            }).collect::<Html>()
                        }
                    }
                }
            </section>
        </div>
    }
}
