use shared::User;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    #[prop_or_default]
    pub user: Option<User>,
    pub dark_mode: bool,
    pub on_toggle_theme: Callback<()>,
    pub on_logout: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let toggle_theme = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };
    let logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };

    html! {
        <nav class="navbar">
            <div class="navbar-brand">
                <span class="navbar-logo">{"₨"}</span>
                <h1>{"Expense Tracker"}</h1>
            </div>
            <div class="navbar-actions">
                {if let Some(user) = props.user.as_ref() {
                    html! { <span class="navbar-user">{format!("Hi, {}", user.name)}</span> }
                } else {
                    html! {}
                }}
                <button class="icon-button" title="Toggle theme" onclick={toggle_theme}>
                    {if props.dark_mode { "☀" } else { "☾" }}
                </button>
                {if props.user.is_some() {
                    html! {
                        <button class="btn secondary" onclick={logout}>{"Logout"}</button>
                    }
                } else {
                    html! {}
                }}
            </div>
        </nav>
    }
}
