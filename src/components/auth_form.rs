use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_session::use_session;
use crate::services::auth_api::{AuthClient, LoginRequest, SignupRequest, check_passwords};

/// Binds a text input to a string state handle.
fn bind_input(handle: &UseStateHandle<String>) -> Callback<InputEvent> {
    let handle = handle.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        handle.set(input.value());
    })
}

/// Login/register form. On login it decodes the token's identity
/// claim and hands the session to the provider; on register it shows a
/// notice and flips back to the login state with cleared fields.
#[function_component(AuthForm)]
pub fn auth_form() -> Html {
    let session_handle = use_session();

    let is_registering = use_state(|| false);
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm_password = use_state(String::new);
    let city = use_state(String::new);
    let error = use_state(|| None::<String>);
    let notice = use_state(|| None::<String>);

    let toggle_mode = {
        let is_registering = is_registering.clone();
        let error = error.clone();
        let notice = notice.clone();
        Callback::from(move |_: MouseEvent| {
            error.set(None);
            notice.set(None);
            is_registering.set(!*is_registering);
        })
    };

    let onsubmit = {
        let is_registering = is_registering.clone();
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let confirm_password = confirm_password.clone();
        let city = city.clone();
        let error = error.clone();
        let notice = notice.clone();
        let login = session_handle.login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error.set(None);
            notice.set(None);

            if *is_registering {
                if let Err(err) = check_passwords(&password, &confirm_password) {
                    error.set(Some(err.to_string()));
                    return;
                }

                let request = SignupRequest {
                    name: (*name).clone(),
                    email: (*email).clone(),
                    password: (*password).clone(),
                    city: (*city).clone(),
                };

                let is_registering = is_registering.clone();
                let name = name.clone();
                let email = email.clone();
                let password = password.clone();
                let confirm_password = confirm_password.clone();
                let city = city.clone();
                let error = error.clone();
                let notice = notice.clone();

                spawn_local(async move {
                    let result = match AuthClient::new() {
                        Ok(client) => client.signup(&request).await,
                        Err(e) => Err(e),
                    };

                    match result {
                        Ok(()) => {
                            notice.set(Some("Registration successful! Please log in.".to_string()));
                            name.set(String::new());
                            email.set(String::new());
                            password.set(String::new());
                            confirm_password.set(String::new());
                            city.set(String::new());
                            is_registering.set(false);
                        }
                        Err(e) => error.set(Some(e.to_string())),
                    }
                });
            } else {
                let request = LoginRequest {
                    email: (*email).clone(),
                    password: (*password).clone(),
                };

                let error = error.clone();
                let login = login.clone();

                spawn_local(async move {
                    let result = match AuthClient::new() {
                        Ok(client) => client.login(&request).await,
                        Err(e) => Err(e),
                    };

                    match result {
                        Ok(session) => login.emit(session),
                        Err(e) => error.set(Some(e.to_string())),
                    }
                });
            }
        })
    };

    html! {
        <div class="auth-card">
            <h2>{ if *is_registering { "Register" } else { "Login" } }</h2>

            if let Some(msg) = &*error {
                <p class="form-error">{msg}</p>
            }
            if let Some(msg) = &*notice {
                <p class="form-notice">{msg}</p>
            }

            <form {onsubmit}>
                if *is_registering {
                    <label>{"Name"}</label>
                    <input type="text" value={(*name).clone()} oninput={bind_input(&name)} required=true />
                    <label>{"City"}</label>
                    <input type="text" value={(*city).clone()} oninput={bind_input(&city)} required=true />
                }

                <label>{"Email"}</label>
                <input type="email" value={(*email).clone()} oninput={bind_input(&email)} required=true />
                <label>{"Password"}</label>
                <input type="password" value={(*password).clone()} oninput={bind_input(&password)} required=true />

                if *is_registering {
                    <label>{"Confirm Password"}</label>
                    <input
                        type="password"
                        value={(*confirm_password).clone()}
                        oninput={bind_input(&confirm_password)}
                        required=true
                    />
                }

                <button type="submit" class="button-primary">
                    { if *is_registering { "Register" } else { "Login" } }
                </button>
            </form>

            <p class="auth-toggle">
                { if *is_registering { "Already have an account?" } else { "Need an account?" } }
                <button type="button" onclick={toggle_mode}>
                    { if *is_registering { "Login" } else { "Register" } }
                </button>
            </p>
        </div>
    }
}
