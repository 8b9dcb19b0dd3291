//! In-memory session state: normalized record collections plus the
//! current user and theme. Mutated only after a confirmed gateway
//! success, one action at a time; collections stay newest-first, so
//! inserts prepend.

use shared::{Expense, Income, SavingsSummary, SavingsTransaction, User};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub user: Option<User>,
    pub expenses: Vec<Expense>,
    pub incomes: Vec<Income>,
    pub savings_summary: SavingsSummary,
    pub savings_transactions: Vec<SavingsTransaction>,
    pub dark_mode: bool,
}

pub enum Action {
    SetUser(User),
    /// Logout teardown: drops every collection along with the session.
    ClearSession,
    ToggleTheme,

    SetExpenses(Vec<Expense>),
    AddExpense(Expense),
    UpdateExpense(Expense),
    DeleteExpense(i64),

    SetIncomes(Vec<Income>),
    AddIncome(Income),
    UpdateIncome(Income),
    DeleteIncome(i64),

    SetSavings {
        summary: SavingsSummary,
        transactions: Vec<SavingsTransaction>,
    },
    AddSavingsTransaction(SavingsTransaction),
}

impl Reducible for AppState {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            Action::SetUser(user) => next.user = Some(user),
            Action::ClearSession => next = AppState::default(),
            Action::ToggleTheme => next.dark_mode = !next.dark_mode,

            Action::SetExpenses(expenses) => next.expenses = expenses,
            Action::AddExpense(expense) => next.expenses.insert(0, expense),
            Action::UpdateExpense(expense) => {
                if let Some(slot) = next.expenses.iter_mut().find(|e| e.id == expense.id) {
                    *slot = expense;
                }
            }
            Action::DeleteExpense(id) => next.expenses.retain(|e| e.id != id),

            Action::SetIncomes(incomes) => next.incomes = incomes,
            Action::AddIncome(income) => next.incomes.insert(0, income),
            Action::UpdateIncome(income) => {
                if let Some(slot) = next.incomes.iter_mut().find(|i| i.id == income.id) {
                    *slot = income;
                }
            }
            Action::DeleteIncome(id) => next.incomes.retain(|i| i.id != id),

            Action::SetSavings {
                summary,
                transactions,
            } => {
                next.savings_summary = summary;
                next.savings_transactions = transactions;
            }
            Action::AddSavingsTransaction(transaction) => {
                next.savings_transactions.insert(0, transaction)
            }
        }
        Rc::new(next)
    }
}

pub type StoreHandle = UseReducerHandle<AppState>;
