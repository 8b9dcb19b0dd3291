use shared::format_currency;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: AttrValue,
    pub value: f64,
    pub subtitle: AttrValue,
    /// Accent class: "success", "danger", "accent", or "neutral".
    #[prop_or(AttrValue::Static("neutral"))]
    pub color: AttrValue,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class={format!("card stat-card stat-{}", props.color)}>
            <span class="stat-title">{&props.title}</span>
            <span class="stat-value">{format_currency(props.value)}</span>
            <span class="stat-subtitle">{&props.subtitle}</span>
        </div>
    }
}
