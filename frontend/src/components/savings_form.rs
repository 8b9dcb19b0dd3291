use shared::{
    format_currency, validate, BudgetContext, CreateSavingsRequest, SavingsAction, SubmissionKind,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::date_utils::current_date_input;
use crate::store::{Action, StoreHandle};

#[derive(Properties, PartialEq)]
pub struct SavingsFormProps {
    pub store: StoreHandle,
    pub api: ApiClient,
    pub action: SavingsAction,
    pub savings_balance: f64,
    /// Funds available before this transaction, from analytics; `None`
    /// while analytics are still loading (no deposit ceiling then).
    pub remaining_balance: Option<f64>,
    pub on_close: Callback<()>,
    /// Fired after a confirmed save so the dashboard can re-pull
    /// analytics and the savings summary.
    pub on_success: Callback<()>,
}

#[function_component(SavingsForm)]
pub fn savings_form(props: &SavingsFormProps) -> Html {
    let amount = use_state(String::new);
    let description = use_state(String::new);
    let date = use_state(current_date_input);
    let error = use_state(|| Option::<String>::None);
    let saving = use_state(|| false);

    let is_withdraw = props.action == SavingsAction::Withdraw;

    let on_amount_change = {
        let amount = amount.clone();
        let error = error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
            error.set(None);
        })
    };

    let on_description_change = {
        let description = description.clone();
        let error = error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            description.set(input.value());
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
        let action = props.action;
        let savings_balance = props.savings_balance;
        let remaining_balance = props.remaining_balance;
        let on_success = props.on_success.clone();
        let amount = amount.clone();
        let description = description.clone();
        let date = date.clone();
        let error = error.clone();
        let saving = saving.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // Deposits reserve remaining balance, so they are capped by
            // it; withdrawals are capped by the savings balance instead.
            let (kind, context) = match action {
                SavingsAction::Deposit => (
                    SubmissionKind::Deposit,
                    BudgetContext::new_record(remaining_balance),
                ),
                SavingsAction::Withdraw => {
                    (SubmissionKind::Withdrawal, BudgetContext::default())
                }
            };

            let cleaned_amount = match validate(amount.as_str(), &context, kind, savings_balance) {
                Ok(value) => value,
                Err(rejection) => {
                    error.set(Some(rejection.to_string()));
                    return;
                }
            };

            let request = CreateSavingsRequest {
                amount: cleaned_amount,
                action,
                description: (*description).clone(),
                date: (*date).clone(),
            };

            let api = api.clone();
            let store = store.clone();
            let on_success = on_success.clone();
            let error = error.clone();
            let saving = saving.clone();

            spawn_local(async move {
                saving.set(true);
                match api.create_savings_transaction(&request).await {
                    Ok(response) => {
                        store.dispatch(Action::AddSavingsTransaction(response.transaction));
                        on_success.emit(());
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
                    <div>
                        <h2>{if is_withdraw { "Withdraw from Savings" } else { "Add to Savings" }}</h2>
                        <p class="modal-subtitle">
                            {if is_withdraw {
                                "Move funds from your savings back to remaining balance."
                            } else {
                                "Reserve some of your remaining balance for future goals."
                            }}
                        </p>
                    </div>
                    <button class="icon-button" onclick={close.clone()}>{"✕"}</button>
                </div>

                <div class="balance-cards">
                    <div class="balance-card">
                        <span class="balance-label">{"Savings Balance"}</span>
                        <span class="balance-value">{format_currency(props.savings_balance)}</span>
                    </div>
                    <div class="balance-card">
                        <span class="balance-label">{"Remaining Balance"}</span>
                        <span class="balance-value">
                            {match props.remaining_balance {
                                Some(balance) => format_currency(balance),
                                None => "-".to_string(),
                            }}
                        </span>
                    </div>
                </div>

                {if let Some(message) = (*error).as_ref() {
                    html! { <div class="form-message error">{message}</div> }
                } else {
                    html! {}
                }}

                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="savings-amount">{"Amount (PKR)"}</label>
                        <input
                            type="number"
                            id="savings-amount"
                            step="0.01"
                            min="0"
                            placeholder="0.00"
                            value={(*amount).clone()}
                            onchange={on_amount_change}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="savings-date">{"Date"}</label>
                        <input
                            type="date"
                            id="savings-date"
                            value={(*date).clone()}
                            onchange={on_date_change}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="savings-description">{"Notes (Optional)"}</label>
                        <textarea
                            id="savings-description"
                            rows="3"
                            placeholder="Why are you adjusting the savings?"
                            value={(*description).clone()}
                            onchange={on_description_change}
                        />
                    </div>

                    <div class="form-actions">
                        <button type="button" class="btn secondary" onclick={close}>
                            {"Cancel"}
                        </button>
                        <button type="submit" class="btn primary" disabled={*saving}>
                            {if *saving {
                                "Saving..."
                            } else if is_withdraw {
                                "Withdraw"
                            } else {
                                "Add to Savings"
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
