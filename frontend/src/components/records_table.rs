use shared::{format_currency, shows_carryover, Carryover, Expense, Income, ListKind, Page};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::expense_form::ExpenseForm;
use crate::components::income_form::IncomeForm;
use crate::services::api::ApiClient;
use crate::services::date_utils::{format_display_date, format_month_label};
use crate::services::logging::Logger;
use crate::store::{Action, StoreHandle};

/// A row of either list. The table is shared between the expense and
/// income views, matching the kind switch in the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordEntry {
    Expense(Expense),
    Income(Income),
}

impl RecordEntry {
    fn id(&self) -> i64 {
        match self {
            RecordEntry::Expense(e) => e.id,
            RecordEntry::Income(i) => i.id,
        }
    }

    fn date(&self) -> &str {
        match self {
            RecordEntry::Expense(e) => &e.date,
            RecordEntry::Income(i) => &i.date,
        }
    }

    fn amount(&self) -> f64 {
        match self {
            RecordEntry::Expense(e) => e.amount,
            RecordEntry::Income(i) => i.amount,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RecordsTableProps {
    pub store: StoreHandle,
    pub api: ApiClient,
    pub kind: ListKind,
    /// Leftover balance from the previous period; income view only.
    #[prop_or_default]
    pub carryover: Option<Carryover>,
    /// Remaining balance fed to the expense edit form's budget guard.
    #[prop_or_default]
    pub remaining_balance: Option<f64>,
}

#[function_component(RecordsTable)]
pub fn records_table(props: &RecordsTableProps) -> Html {
    let requested_page = use_state(|| 1usize);
    let editing = use_state(|| Option::<RecordEntry>::None);

    // Switching between the expense and income view must not carry over
    // an unrelated page position.
    {
        let requested_page = requested_page.clone();
        use_effect_with(props.kind, move |_| {
            requested_page.set(1);
            || ()
        });
    }

    let is_expense = props.kind == ListKind::Expense;
    let records: Vec<RecordEntry> = match props.kind {
        ListKind::Expense => props
            .store
            .expenses
            .iter()
            .cloned()
            .map(RecordEntry::Expense)
            .collect(),
        ListKind::Income => props
            .store
            .incomes
            .iter()
            .cloned()
            .map(RecordEntry::Income)
            .collect(),
    };

    // Derived, never stored: the page is recomputed from the current
    // snapshot, which also clamps a stale page after deletions.
    let page = Page::compute(&records, *requested_page);

    let heading = if is_expense {
        "Recent Expenses"
    } else {
        "Recent Income"
    };

    let on_edit = {
        let editing = editing.clone();
        Callback::from(move |entry: RecordEntry| editing.set(Some(entry)))
    };

    let on_delete = {
        let api = props.api.clone();
        let store = props.store.clone();
        let kind = props.kind;
        Callback::from(move |id: i64| {
            let label = if kind == ListKind::Expense {
                "expense"
            } else {
                "income"
            };
            if !gloo::dialogs::confirm(&format!(
                "Are you sure you want to delete this {}?",
                label
            )) {
                return;
            }
            let api = api.clone();
            let store = store.clone();
            spawn_local(async move {
                let result = match kind {
                    ListKind::Expense => api.delete_expense(id).await.map(|_| ()),
                    ListKind::Income => api.delete_income(id).await.map(|_| ()),
                };
                match result {
                    Ok(()) => match kind {
                        ListKind::Expense => store.dispatch(Action::DeleteExpense(id)),
                        ListKind::Income => store.dispatch(Action::DeleteIncome(id)),
                    },
                    Err(e) => {
                        Logger::error("records-table", &format!("Delete failed: {}", e));
                        gloo::dialogs::alert(&format!("Failed to delete {}", label));
                    }
                }
            });
        })
    };

    let close_form = {
        let editing = editing.clone();
        Callback::from(move |_| editing.set(None))
    };

    let carryover_row = match props.carryover.as_ref() {
        Some(carryover) if shows_carryover(props.kind, page.page_number, true) => {
            let date_cell = match &carryover.period_end {
                Some(period_end) => format_month_label(period_end),
                None => carryover.label.clone(),
            };
            html! {
                <tr class="table-row carryover-row">
                    <td class="cell">{date_cell}</td>
                    <td class="cell">{format!("Remaining balance from {}", carryover.label)}</td>
                    <td class="cell amount">{format_currency(carryover.amount)}</td>
                    <td class="cell actions muted">{"—"}</td>
                </tr>
            }
        }
        _ => html! {},
    };

    html! {
        <>
        <div class="card table-card">
            <div class="card-header">
                <h2>{heading}</h2>
            </div>

            {if records.is_empty() {
                html! {
                    <div class="empty-state">
                        <p>{format!("No {} recorded yet", if is_expense { "expenses" } else { "income" })}</p>
                    </div>
                }
            } else {
                html! {
                    <>
                    <table class="records-table">
                        <thead>
                            <tr>
                                <th>{"Date"}</th>
                                {if is_expense {
                                    html! { <><th>{"Category"}</th><th>{"Description"}</th></> }
                                } else {
                                    html! { <th>{"Source"}</th> }
                                }}
                                <th class="amount">{"Amount"}</th>
                                <th class="actions">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {carryover_row}
                            {for page.items.iter().enumerate().map(|(index, slot)| {
                                match slot {
                                    Some(entry) => render_row(entry, &on_edit, &on_delete),
                                    // Spacer row: keeps the card height stable
                                    // on short pages, never selectable.
                                    None => html! {
                                        <tr key={format!("placeholder-{}", index)} class="table-row placeholder-row">
                                            <td class="cell" colspan={if is_expense { "5" } else { "4" }}>{"\u{a0}"}</td>
                                        </tr>
                                    },
                                }
                            })}
                        </tbody>
                    </table>

                    {if page.has_multiple_pages() {
                        render_pagination(&page, &requested_page)
                    } else {
                        html! {}
                    }}
                    </>
                }
            }}
        </div>

        {match (*editing).clone() {
            Some(RecordEntry::Expense(expense)) => html! {
                <ExpenseForm
                    store={props.store.clone()}
                    api={props.api.clone()}
                    expense={Some(expense)}
                    remaining_balance={props.remaining_balance}
                    on_close={close_form.clone()}
                />
            },
            Some(RecordEntry::Income(income)) => html! {
                <IncomeForm
                    store={props.store.clone()}
                    api={props.api.clone()}
                    income={Some(income)}
                    on_close={close_form.clone()}
                />
            },
            None => html! {},
        }}
        </>
    }
}

fn render_row(
    entry: &RecordEntry,
    on_edit: &Callback<RecordEntry>,
    on_delete: &Callback<i64>,
) -> Html {
    let edit = {
        let on_edit = on_edit.clone();
        let entry = entry.clone();
        Callback::from(move |_| on_edit.emit(entry.clone()))
    };
    let delete = {
        let on_delete = on_delete.clone();
        let id = entry.id();
        Callback::from(move |_| on_delete.emit(id))
    };

    html! {
        <tr key={entry.id().to_string()} class="table-row">
            <td class="cell">{format_display_date(entry.date())}</td>
            {match entry {
                RecordEntry::Expense(expense) => html! {
                    <>
                    <td class="cell">
                        <span class={format!("category-badge category-{}", category_slug(expense))}>
                            {expense.category.label()}
                        </span>
                    </td>
                    <td class="cell description">
                        {expense.description.clone().unwrap_or_else(|| "-".to_string())}
                    </td>
                    </>
                },
                RecordEntry::Income(income) => html! {
                    <td class="cell">{income.source.clone()}</td>
                },
            }}
            <td class="cell amount">{format_currency(entry.amount())}</td>
            <td class="cell actions">
                <button class="icon-button" title="Edit" onclick={edit}>{"✎"}</button>
                <button class="icon-button danger" title="Delete" onclick={delete}>{"🗑"}</button>
            </td>
        </tr>
    }
}

fn category_slug(expense: &Expense) -> String {
    expense
        .category
        .label()
        .trim_end_matches('.')
        .to_lowercase()
}

fn render_pagination(page: &Page<RecordEntry>, requested_page: &UseStateHandle<usize>) -> Html {
    let current = page.page_number;
    let total = page.total_pages;

    let prev = {
        let requested_page = requested_page.clone();
        Callback::from(move |_| requested_page.set(current.saturating_sub(1).max(1)))
    };
    let next = {
        let requested_page = requested_page.clone();
        Callback::from(move |_| requested_page.set((current + 1).min(total)))
    };

    html! {
        <div class="pagination">
            <span class="pagination-range">
                {format!("Showing {}-{} of {}", page.range_start, page.range_end, page.total_items)}
            </span>
            <div class="pagination-controls">
                <button class="page-button" disabled={current == 1} onclick={prev}>
                    {"Previous"}
                </button>
                {for (1..=total).map(|n| {
                    let requested_page = requested_page.clone();
                    let class = if n == current { "page-button active" } else { "page-button" };
                    html! {
                        <button
                            key={n.to_string()}
                            class={class}
                            onclick={Callback::from(move |_| requested_page.set(n))}
                        >
                            {n}
                        </button>
                    }
                })}
                <button class="page-button" disabled={current == total} onclick={next}>
                    {"Next"}
                </button>
            </div>
        </div>
    }
}
