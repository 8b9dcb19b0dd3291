use shared::{
    format_currency, validate, BudgetContext, BudgetError, Category, CreateExpenseRequest, Expense,
    SubmissionKind,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::date_utils::{current_date_input, date_input_value};
use crate::store::{Action, StoreHandle};

#[derive(Properties, PartialEq)]
pub struct ExpenseFormProps {
    pub store: StoreHandle,
    pub api: ApiClient,
    /// When set, the form edits this record instead of creating one.
    #[prop_or_default]
    pub expense: Option<Expense>,
    /// Funds available before this transaction, from analytics; `None`
    /// while analytics are still loading (no ceiling is enforced then).
    #[prop_or_default]
    pub remaining_balance: Option<f64>,
    pub on_close: Callback<()>,
}

#[function_component(ExpenseForm)]
pub fn expense_form(props: &ExpenseFormProps) -> Html {
    let is_edit = props.expense.is_some();

    let amount = use_state(|| {
        props
            .expense
            .as_ref()
            .map(|e| e.amount.to_string())
            .unwrap_or_default()
    });
    let category = use_state(|| {
        props
            .expense
            .as_ref()
            .map(|e| e.category)
            .unwrap_or(Category::Food)
    });
    let description = use_state(|| {
        props
            .expense
            .as_ref()
            .and_then(|e| e.description.clone())
            .unwrap_or_default()
    });
    let date = use_state(|| {
        props
            .expense
            .as_ref()
            .map(|e| date_input_value(&e.date))
            .unwrap_or_else(current_date_input)
    });
    let error = use_state(|| Option::<String>::None);
    let saving = use_state(|| false);

    // The guard reconstructs the pre-transaction balance when editing:
    // the record's old amount is added back into the ceiling.
    let context = match &props.expense {
        Some(expense) => BudgetContext::edit(props.remaining_balance, expense.amount),
        None => BudgetContext::new_record(props.remaining_balance),
    };
    let no_funds_for_new = context.blocks_new_expense();
    let budget_cap = context.allowable_budget();
    let exceeds_budget = context.amount_exceeds(amount.as_str());

    let on_amount_change = {
        let amount = amount.clone();
        let error = error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
            error.set(None);
        })
    };

    let on_category_change = {
        let category = category.clone();
        let error = error.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(selected) = Category::from_label(&select.value()) {
                category.set(selected);
            }
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

    let on_description_change = {
        let description = description.clone();
        let error = error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            description.set(input.value());
            error.set(None);
        })
    };

    let on_submit = {
        let api = props.api.clone();
        let store = props.store.clone();
        let expense = props.expense.clone();
        let on_close = props.on_close.clone();
        let amount = amount.clone();
        let category = category.clone();
        let description = description.clone();
        let date = date.clone();
        let error = error.clone();
        let saving = saving.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // Local guard first: a rejection never reaches the network.
            let cleaned_amount =
                match validate(amount.as_str(), &context, SubmissionKind::Expense, 0.0) {
                    Ok(value) => value,
                    Err(rejection) => {
                        error.set(Some(rejection.to_string()));
                        return;
                    }
                };

            let request = CreateExpenseRequest {
                amount: cleaned_amount,
                category: *category,
                description: (*description).clone(),
                date: (*date).clone(),
            };

            let api = api.clone();
            let store = store.clone();
            let expense = expense.clone();
            let on_close = on_close.clone();
            let error = error.clone();
            let saving = saving.clone();

            spawn_local(async move {
                saving.set(true);
                let result = match &expense {
                    Some(existing) => api.update_expense(existing.id, &request).await,
                    None => api.create_expense(&request).await,
                };
                match result {
                    Ok(response) => {
                        if expense.is_some() {
                            store.dispatch(Action::UpdateExpense(response.expense));
                        } else {
                            store.dispatch(Action::AddExpense(response.expense));
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
                    <h2>{if is_edit { "Edit Expense" } else { "Add New Expense" }}</h2>
                    <button class="icon-button" onclick={close.clone()}>{"✕"}</button>
                </div>

                {if let Some(message) = (*error).as_ref() {
                    html! { <div class="form-message error">{message}</div> }
                } else {
                    html! {}
                }}

                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="expense-amount">{"Amount (PKR)"}</label>
                        <input
                            type="number"
                            id="expense-amount"
                            step="0.01"
                            min="0"
                            placeholder="0.00"
                            value={(*amount).clone()}
                            onchange={on_amount_change}
                            disabled={no_funds_for_new}
                            required=true
                        />
                        {match (props.remaining_balance, budget_cap) {
                            (Some(remaining), Some(cap)) => html! {
                                <p class="form-hint">
                                    {if is_edit {
                                        format!("You can adjust this expense up to {}.", format_currency(cap.max(0.0)))
                                    } else {
                                        format!("Remaining balance: {}.", format_currency(remaining.max(0.0)))
                                    }}
                                </p>
                            },
                            _ => html! {},
                        }}
                        {match budget_cap {
                            Some(cap) if exceeds_budget => html! {
                                <p class="form-hint danger">
                                    {BudgetError::ExceedsBudget { cap }.to_string()}
                                </p>
                            },
                            _ => html! {},
                        }}
                        {if no_funds_for_new {
                            html! {
                                <p class="form-hint danger">
                                    {"Remaining balance is zero. Add income or withdraw savings before recording new expenses."}
                                </p>
                            }
                        } else {
                            html! {}
                        }}
                    </div>

                    <div class="form-group">
                        <label for="expense-category">{"Category"}</label>
                        <select
                            id="expense-category"
                            value={category.label()}
                            onchange={on_category_change}
                            required=true
                        >
                            {for Category::ALL.iter().map(|c| html! {
                                <option value={c.label()} selected={*c == *category}>{c.label()}</option>
                            })}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="expense-date">{"Date"}</label>
                        <input
                            type="date"
                            id="expense-date"
                            value={(*date).clone()}
                            onchange={on_date_change}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="expense-description">{"Description"}</label>
                        <textarea
                            id="expense-description"
                            rows="3"
                            placeholder="Add a note..."
                            value={(*description).clone()}
                            onchange={on_description_change}
                        />
                    </div>

                    <div class="form-actions">
                        <button type="button" class="btn secondary" onclick={close}>
                            {"Cancel"}
                        </button>
                        <button
                            type="submit"
                            class="btn primary"
                            disabled={*saving || no_funds_for_new || exceeds_budget}
                        >
                            {if *saving {
                                "Saving..."
                            } else if is_edit {
                                "Update"
                            } else {
                                "Add Expense"
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
