use shared::{format_currency, SavingsAction, SavingsSummary, SavingsTransaction};
use yew::prelude::*;

use crate::services::date_utils::format_display_date;

#[derive(Properties, PartialEq)]
pub struct SavingsTableProps {
    pub summary: SavingsSummary,
    pub transactions: Vec<SavingsTransaction>,
}

#[function_component(SavingsTable)]
pub fn savings_table(props: &SavingsTableProps) -> Html {
    let all_time = &props.summary.all_time;
    let month = &props.summary.current_month;

    html! {
        <div class="card table-card">
            <div class="card-header">
                <h2>{"Savings"}</h2>
            </div>

            <div class="balance-cards">
                <div class="balance-card">
                    <span class="balance-label">{"All-Time Balance"}</span>
                    <span class="balance-value">{format_currency(all_time.balance)}</span>
                    <span class="balance-detail">
                        {format!(
                            "{} deposited · {} withdrawn",
                            format_currency(all_time.total_deposits),
                            format_currency(all_time.total_withdrawals)
                        )}
                    </span>
                </div>
                <div class="balance-card">
                    <span class="balance-label">
                        {if month.label.is_empty() {
                            "This Month".to_string()
                        } else {
                            month.label.clone()
                        }}
                    </span>
                    <span class="balance-value">{format_currency(month.balance)}</span>
                    <span class="balance-detail">
                        {format!(
                            "{} deposited · {} withdrawn",
                            format_currency(month.total_deposits),
                            format_currency(month.total_withdrawals)
                        )}
                    </span>
                </div>
            </div>

            {if props.transactions.is_empty() {
                html! {
                    <div class="empty-state">
                        <p>{"No savings transactions yet"}</p>
                    </div>
                }
            } else {
                html! {
                    <table class="records-table">
                        <thead>
                            <tr>
                                <th>{"Date"}</th>
                                <th>{"Action"}</th>
                                <th>{"Notes"}</th>
                                <th class="amount">{"Amount"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for props.transactions.iter().map(|tx| {
                                let action_class = match tx.action {
                                    SavingsAction::Deposit => "action-badge deposit",
                                    SavingsAction::Withdraw => "action-badge withdraw",
                                };
                                html! {
                                    <tr key={tx.id.to_string()} class="table-row">
                                        <td class="cell">{format_display_date(&tx.date)}</td>
                                        <td class="cell">
                                            <span class={action_class}>{tx.action.to_string()}</span>
                                        </td>
                                        <td class="cell description">
                                            {tx.description.clone().unwrap_or_else(|| "-".to_string())}
                                        </td>
                                        <td class="cell amount">{format_currency(tx.amount)}</td>
                                    </tr>
                                }
                            })}
                        </tbody>
                    </table>
                }
            }}
        </div>
    }
}
