mod components;
mod hooks;
mod pages;
mod services;
mod store;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use components::navbar::Navbar;
use pages::dashboard::Dashboard;
use pages::home::Home;
use services::api::{self, ApiClient};
use services::logging::Logger;
use store::{Action, AppState};

#[function_component(App)]
fn app() -> Html {
    let store = use_reducer(AppState::default);
    let api = ApiClient::new();
    let session_checked = use_state(|| false);

    // Resume the session from a stored token, if there is one.
    {
        let api = api.clone();
        let store = store.clone();
        let session_checked = session_checked.clone();
        use_effect_with((), move |_| {
            if api::stored_token().is_some() {
                spawn_local(async move {
                    match api.get_user().await {
                        Ok(response) => {
                            Logger::info("app", "Session restored from stored token");
                            store.dispatch(Action::SetUser(response.user));
                        }
                        Err(e) => {
                            Logger::warn("app", &format!("Session restore failed: {}", e));
                            api::clear_token();
                        }
                    }
                    session_checked.set(true);
                });
            } else {
                session_checked.set(true);
            }
            || ()
        });
    }

    // Mirror the theme flag onto the document root so CSS can follow it.
    {
        let dark_mode = store.dark_mode;
        use_effect_with(dark_mode, move |_| {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                if let Some(root) = document.document_element() {
                    root.set_class_name(if dark_mode { "dark" } else { "" });
                }
            }
            || ()
        });
    }

    let on_toggle_theme = {
        let store = store.clone();
        Callback::from(move |_| store.dispatch(Action::ToggleTheme))
    };

    let on_logout = {
        let api = api.clone();
        let store = store.clone();
        Callback::from(move |_| {
            let api = api.clone();
            let store = store.clone();
            spawn_local(async move {
                if let Err(e) = api.logout().await {
                    Logger::warn("app", &format!("Logout request failed: {}", e));
                }
                api::clear_token();
                store.dispatch(Action::ClearSession);
            });
        })
    };

    html! {
        <>
            <Navbar
                user={store.user.clone()}
                dark_mode={store.dark_mode}
                on_toggle_theme={on_toggle_theme}
                on_logout={on_logout}
            />
            {if !*session_checked {
                html! { <div class="app-loading">{"Loading..."}</div> }
            } else if store.user.is_some() {
                html! { <Dashboard store={store.clone()} api={api.clone()} /> }
            } else {
                html! { <Home store={store.clone()} api={api.clone()} /> }
            }}
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
