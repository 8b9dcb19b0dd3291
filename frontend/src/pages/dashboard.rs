use shared::{format_currency, ListKind, SavingsAction};
use yew::prelude::*;

use crate::components::chart_card::ChartCard;
use crate::components::expense_form::ExpenseForm;
use crate::components::income_form::IncomeForm;
use crate::components::records_table::RecordsTable;
use crate::components::savings_form::SavingsForm;
use crate::components::savings_table::SavingsTable;
use crate::components::stat_card::StatCard;
use crate::services::api::ApiClient;
use crate::store::StoreHandle;
use crate::hooks::use_dashboard_data;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub store: StoreHandle,
    pub api: ApiClient,
}

/// The single signed-in screen: summary cards, trend chart, category
/// breakdown, insights, the expense/income tables, and savings.
#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let data = use_dashboard_data(&props.api, &props.store);

    let show_expense_form = use_state(|| false);
    let show_income_form = use_state(|| false);
    let savings_action = use_state(|| Option::<SavingsAction>::None);

    let remaining_balance = data
        .analytics
        .as_ref()
        .map(|a| a.current_month.remaining_balance);
    let carryover = data
        .analytics
        .as_ref()
        .and_then(|a| a.current_month.carryover.clone());
    let savings_balance = props.store.savings_summary.all_time.balance;

    let open_expense_form = {
        let show_expense_form = show_expense_form.clone();
        Callback::from(move |_: MouseEvent| show_expense_form.set(true))
    };
    let close_expense_form = {
        let show_expense_form = show_expense_form.clone();
        Callback::from(move |_| show_expense_form.set(false))
    };
    let open_income_form = {
        let show_income_form = show_income_form.clone();
        Callback::from(move |_: MouseEvent| show_income_form.set(true))
    };
    let close_income_form = {
        let show_income_form = show_income_form.clone();
        Callback::from(move |_| show_income_form.set(false))
    };
    let open_deposit_form = {
        let savings_action = savings_action.clone();
        Callback::from(move |_: MouseEvent| savings_action.set(Some(SavingsAction::Deposit)))
    };
    let open_withdraw_form = {
        let savings_action = savings_action.clone();
        Callback::from(move |_: MouseEvent| savings_action.set(Some(SavingsAction::Withdraw)))
    };
    let close_savings_form = {
        let savings_action = savings_action.clone();
        Callback::from(move |_| savings_action.set(None))
    };
    let on_savings_saved = {
        let savings_action = savings_action.clone();
        let refresh = data.refresh.clone();
        Callback::from(move |_| {
            savings_action.set(None);
            refresh.emit(());
        })
    };

    html! {
        <main class="dashboard">
            <div class="quick-actions">
                <button class="btn primary" onclick={open_expense_form}>{"+ Add Expense"}</button>
                <button class="btn primary" onclick={open_income_form}>{"+ Add Income"}</button>
                <button class="btn secondary" onclick={open_deposit_form}>{"Add to Savings"}</button>
                <button class="btn secondary" onclick={open_withdraw_form}>{"Withdraw Savings"}</button>
            </div>

            {if let Some(analytics) = data.analytics.as_ref() {
                let month = &analytics.current_month;
                let all_time = &analytics.all_time;
                html! {
                    <div class="stat-grid">
                        <StatCard
                            title="This Month's Income"
                            value={month.total_income}
                            subtitle={month.month.clone()}
                            color="success"
                        />
                        <StatCard
                            title="This Month's Expenses"
                            value={month.total_expenses}
                            subtitle={month.month.clone()}
                            color="danger"
                        />
                        <StatCard
                            title="Remaining Balance"
                            value={month.remaining_balance}
                            subtitle={month.status.clone()}
                            color={if month.remaining_balance >= 0.0 { "success" } else { "danger" }}
                        />
                        <StatCard
                            title="Savings"
                            value={month.savings.balance}
                            subtitle={month.month.clone()}
                            color="accent"
                        />
                        <StatCard
                            title="All-Time Balance"
                            value={all_time.remaining_balance}
                            subtitle="Across every month"
                            color="neutral"
                        />
                    </div>
                }
            } else if data.loading {
                html! { <div class="stat-grid loading">{"Loading summary..."}</div> }
            } else {
                html! {}
            }}

            <div class="dashboard-row">
                <ChartCard trend={data.trend.clone()} loading={data.loading} />

                <div class="card breakdown-card">
                    <div class="card-header">
                        <h2>{"This Month by Category"}</h2>
                    </div>
                    {if data.breakdown.is_empty() {
                        html! { <p class="empty-note">{"No expenses recorded this month."}</p> }
                    } else {
                        html! {
                            <ul class="breakdown-list">
                                {for data.breakdown.iter().map(|slice| html! {
                                    <li key={slice.category.clone()}>
                                        <span class="breakdown-category">{&slice.category}</span>
                                        <span class="breakdown-amount">{format_currency(slice.total)}</span>
                                        <span class="breakdown-percent">
                                            {format!("{:.1}%", slice.percentage)}
                                        </span>
                                    </li>
                                })}
                            </ul>
                        }
                    }}
                </div>
            </div>

            {if !data.insights.is_empty() {
                html! {
                    <div class="card insights-card">
                        <div class="card-header">
                            <h2>{"Insights"}</h2>
                        </div>
                        <ul class="insights-list">
                            {for data.insights.iter().enumerate().map(|(index, insight)| html! {
                                <li key={index.to_string()}>{insight}</li>
                            })}
                        </ul>
                    </div>
                }
            } else {
                html! {}
            }}

            <div class="dashboard-row tables">
                <RecordsTable
                    store={props.store.clone()}
                    api={props.api.clone()}
                    kind={ListKind::Expense}
                    remaining_balance={remaining_balance}
                />
                <RecordsTable
                    store={props.store.clone()}
                    api={props.api.clone()}
                    kind={ListKind::Income}
                    carryover={carryover}
                />
            </div>

            <SavingsTable
                summary={props.store.savings_summary.clone()}
                transactions={props.store.savings_transactions.clone()}
            />

            {if *show_expense_form {
                html! {
                    <ExpenseForm
                        store={props.store.clone()}
                        api={props.api.clone()}
                        remaining_balance={remaining_balance}
                        on_close={close_expense_form}
                    />
                }
            } else {
                html! {}
            }}

            {if *show_income_form {
                html! {
                    <IncomeForm
                        store={props.store.clone()}
                        api={props.api.clone()}
                        on_close={close_income_form}
                    />
                }
            } else {
                html! {}
            }}

            {if let Some(action) = *savings_action {
                html! {
                    <SavingsForm
                        store={props.store.clone()}
                        api={props.api.clone()}
                        action={action}
                        savings_balance={savings_balance}
                        remaining_balance={remaining_balance}
                        on_close={close_savings_form}
                        on_success={on_savings_saved}
                    />
                }
            } else {
                html! {}
            }}
        </main>
    }
}
