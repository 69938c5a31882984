use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::fetch_state::FetchState;
use crate::models::{
    community::{CommunityPost, CreatePostRequest},
    session::Session,
};
use crate::services::community_api::CommunityClient;

/// Handle returned by `use_community`. The feed loads on mount;
/// `submit` validates the draft, posts it, prepends the service's
/// echoed post to the feed and clears the draft.
#[derive(Clone, PartialEq)]
pub struct CommunityHandle {
    pub feed: UseStateHandle<FetchState<Vec<CommunityPost>>>,
    pub draft: UseStateHandle<String>,
    pub error: UseStateHandle<Option<String>>,
    pub submit: Callback<()>,
}

#[hook]
pub fn use_community(session: Session) -> CommunityHandle {
    let feed = use_state(|| FetchState::Loading);
    let draft = use_state(String::new);
    let error = use_state(|| None);

    {
        let feed = feed.clone();

        use_effect_with(session.clone(), move |session| {
            let feed = feed.clone();
            let session = session.clone();
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            feed.set(FetchState::Loading);

            spawn_local(async move {
                let result = match CommunityClient::new(session.token.clone()) {
                    Ok(client) => client.fetch_posts().await,
                    Err(e) => Err(e),
                };

                match result {
                    Ok(posts) if !aborted_check.get() => {
                        feed.set(FetchState::Loaded(Rc::new(posts)));
                    }
                    Err(e) if !aborted_check.get() => {
                        feed.set(FetchState::Error(e.to_string()));
                    }
                    _ => {} // Request was abandoned, ignore result
                }
            });

            move || aborted.set(true)
        });
    }

    let submit = {
        let feed = feed.clone();
        let draft = draft.clone();
        let error = error.clone();

        Callback::from(move |()| {
            let request = match CreatePostRequest::new(&draft) {
                Ok(request) => request,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };

            let feed = feed.clone();
            let draft = draft.clone();
            let error = error.clone();
            let session = session.clone();

            spawn_local(async move {
                let result = match CommunityClient::new(session.token.clone()) {
                    Ok(client) => client.create_post(&request).await,
                    Err(e) => Err(e),
                };

                match result {
                    Ok(post) => {
                        let mut posts = vec![post];
                        if let Some(existing) = feed.data() {
                            posts.extend(existing.iter().cloned());
                        }
                        feed.set(FetchState::Loaded(Rc::new(posts)));
                        draft.set(String::new());
                        error.set(None);
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        })
    };

    CommunityHandle {
        feed,
        draft,
        error,
        submit,
    }
}
