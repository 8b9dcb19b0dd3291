use shared::{LoginRequest, RegisterRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::api::{self, ApiClient};
use crate::store::{Action, StoreHandle};

#[derive(Clone, Copy, PartialEq)]
enum Mode {
    Login,
    Register,
}

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub store: StoreHandle,
    pub api: ApiClient,
}

/// Login / registration screen shown while no session is active.
#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let mode = use_state(|| Mode::Login);
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    let on_name_change = {
        let name = name.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_email_change = {
        let email = email.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_password_change = {
        let password = password.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let switch_mode = {
        let mode = mode.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            mode.set(match *mode {
                Mode::Login => Mode::Register,
                Mode::Register => Mode::Login,
            });
            error.set(None);
        })
    };

    let on_submit = {
        let api = props.api.clone();
        let store = props.store.clone();
        let mode = mode.clone();
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if email.trim().is_empty() || password.is_empty() {
                error.set(Some("Please fill in email and password.".to_string()));
                return;
            }
            if *mode == Mode::Register && name.trim().is_empty() {
                error.set(Some("Please enter your name.".to_string()));
                return;
            }

            let api = api.clone();
            let store = store.clone();
            let current_mode = *mode;
            let name = (*name).clone();
            let email = (*email).clone();
            let password = (*password).clone();
            let error = error.clone();
            let submitting = submitting.clone();

            spawn_local(async move {
                submitting.set(true);
                let result = match current_mode {
                    Mode::Login => {
                        api.login(&LoginRequest { email, password }).await
                    }
                    Mode::Register => {
                        api.register(&RegisterRequest {
                            name,
                            email,
                            password,
                        })
                        .await
                    }
                };
                match result {
                    Ok(response) => {
                        api::store_token(&response.token);
                        store.dispatch(Action::SetUser(response.user));
                    }
                    Err(message) => error.set(Some(message)),
                }
                submitting.set(false);
            });
        })
    };

    let is_register = *mode == Mode::Register;

    html! {
        <div class="auth-page">
            <div class="card auth-card">
                <h1>{"Expense Tracker"}</h1>
                <p class="auth-subtitle">
                    {"Track income, expenses, and savings in one place."}
                </p>

                {if let Some(message) = (*error).as_ref() {
                    html! { <div class="form-message error">{message}</div> }
                } else {
                    html! {}
                }}

                <form onsubmit={on_submit}>
                    {if is_register {
                        html! {
                            <div class="form-group">
                                <label for="auth-name">{"Name"}</label>
                                <input
                                    type="text"
                                    id="auth-name"
                                    value={(*name).clone()}
                                    onchange={on_name_change}
                                    required=true
                                />
                            </div>
                        }
                    } else {
                        html! {}
                    }}

                    <div class="form-group">
                        <label for="auth-email">{"Email"}</label>
                        <input
                            type="email"
                            id="auth-email"
                            value={(*email).clone()}
                            onchange={on_email_change}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="auth-password">{"Password"}</label>
                        <input
                            type="password"
                            id="auth-password"
                            value={(*password).clone()}
                            onchange={on_password_change}
                            required=true
                        />
                    </div>

                    <button type="submit" class="btn primary full-width" disabled={*submitting}>
                        {if *submitting {
                            "Please wait..."
                        } else if is_register {
                            "Create Account"
                        } else {
                            "Log In"
                        }}
                    </button>
                </form>

                <button class="link-button" onclick={switch_mode}>
                    {if is_register {
                        "Already have an account? Log in"
                    } else {
                        "New here? Create an account"
                    }}
                </button>
            </div>
        </div>
    }
}
