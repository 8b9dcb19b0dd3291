use shared::{CreateIncomeRequest, Income};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::date_utils::{current_date_input, date_input_value};
use crate::store::{Action, StoreHandle};

#[derive(Properties, PartialEq)]
pub struct IncomeFormProps {
    pub store: StoreHandle,
    pub api: ApiClient,
    #[prop_or_default]
    pub income: Option<Income>,
    pub on_close: Callback<()>,
}

/// Income has no budget ceiling (it adds funds); only the positive-amount
/// rule applies before submission.
#[function_component(IncomeForm)]
pub fn income_form(props: &IncomeFormProps) -> Html {
    let is_edit = props.income.is_some();

    let amount = use_state(|| {
        props
            .income
            .as_ref()
            .map(|i| i.amount.to_string())
            .unwrap_or_default()
    });
    let source = use_state(|| {
        props
            .income
            .as_ref()
            .map(|i| i.source.clone())
            .unwrap_or_default()
    });
    let date = use_state(|| {
        props
            .income
            .as_ref()
            .map(|i| date_input_value(&i.date))
            .unwrap_or_else(current_date_input)
    });
    let error = use_state(|| Option::<String>::None);
    let saving = use_state(|| false);

    let on_amount_change = {
        let amount = amount.clone();
        let error = error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
            error.set(None);
        })
    };

    let on_source_change = {
        let source = source.clone();
        let error = error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            source.set(input.value());
            error.set(None);
        })
    };

    let on_date_change = {
        let date = date.clone();
        let error = error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            date.set(input.value());
            error.set(None);
        })
    };

    let on_submit = {
        let api = props.api.clone();
        let store = props.store.clone();
        let income = props.income.clone();
        let on_close = props.on_close.clone();
        let amount = amount.clone();
        let source = source.clone();
        let date = date.clone();
        let error = error.clone();
        let saving = saving.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let numeric_amount = match amount.trim().parse::<f64>() {
                Ok(value) if value.is_finite() && value > 0.0 => value,
                _ => {
                    error.set(Some("Amount should be a positive number.".to_string()));
                    return;
                }
            };

            if source.trim().is_empty() {
                error.set(Some("Please add an income source.".to_string()));
                return;
            }

            let request = CreateIncomeRequest {
                amount: numeric_amount,
                source: (*source).clone(),
                date: (*date).clone(),
            };

            let api = api.clone();
            let store = store.clone();
            let income = income.clone();
            let on_close = on_close.clone();
            let error = error.clone();
            let saving = saving.clone();

            spawn_local(async move {
                saving.set(true);
                let result = match &income {
                    Some(existing) => api.update_income(existing.id, &request).await,
                    None => api.create_income(&request).await,
                };
                match result {
                    Ok(response) => {
                        if income.is_some() {
                            store.dispatch(Action::UpdateIncome(response.income));
                        } else {
                            store.dispatch(Action::AddIncome(response.income));
                        }
                        on_close.emit(());
                    }
                    Err(message) => error.set(Some(message)),
                }
                saving.set(false);
            });
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-overlay">
            <div class="modal-content">
                <div class="modal-header">
                    <h2>{if is_edit { "Edit Income" } else { "Add New Income" }}</h2>
                    <button class="icon-button" onclick={close.clone()}>{"✕"}</button>
                </div>

                {if let Some(message) = (*error).as_ref() {
                    html! { <div class="form-message error">{message}</div> }
                } else {
                    html! {}
                }}

                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="income-amount">{"Amount (PKR)"}</label>
                        <input
                            type="number"
                            id="income-amount"
                            step="0.01"
                            min="0"
                            placeholder="0.00"
                            value={(*amount).clone()}
                            onchange={on_amount_change}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="income-source">{"Source"}</label>
                        <input
                            type="text"
                            id="income-source"
                            placeholder="Salary, freelance, gift..."
                            value={(*source).clone()}
                            onchange={on_source_change}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="income-date">{"Date"}</label>
                        <input
                            type="date"
                            id="income-date"
                            value={(*date).clone()}
                            onchange={on_date_change}
                            required=true
                        />
                    </div>

                    <div class="form-actions">
                        <button type="button" class="btn secondary" onclick={close}>
                            {"Cancel"}
                        </button>
                        <button type="submit" class="btn primary" disabled={*saving}>
                            {if *saving {
                                "Saving..."
                            } else if is_edit {
                                "Update"
                            } else {
                                "Add Income"
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
