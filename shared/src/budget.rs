//! Pre-submission validation of monetary amounts.
//!
//! Runs entirely on the client; a rejection never reaches the network.
//! The one subtle rule lives in [`BudgetContext::allowable_budget`]:
//! when editing, the amount already booked by the record is added back
//! into the ceiling, so lowering an existing expense stays possible even
//! at zero remaining balance.

use crate::currency::format_currency;
use std::fmt;

/// What kind of submission is being validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionKind {
    /// New or edited expense.
    Expense,
    /// Savings deposit (reserves remaining balance).
    Deposit,
    /// Savings withdrawal (limited by the savings balance instead).
    Withdrawal,
}

/// Balance facts the form knows at submission time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BudgetContext {
    /// Funds available before this transaction; `None` when analytics
    /// have not loaded, which means no ceiling is enforced.
    pub remaining_balance: Option<f64>,
    pub is_edit: bool,
    /// Amount of the record being replaced; 0 when creating.
    pub existing_amount: f64,
}

impl BudgetContext {
    pub fn new_record(remaining_balance: Option<f64>) -> BudgetContext {
        BudgetContext {
            remaining_balance,
            is_edit: false,
            existing_amount: 0.0,
        }
    }

    pub fn edit(remaining_balance: Option<f64>, existing_amount: f64) -> BudgetContext {
        BudgetContext {
            remaining_balance,
            is_edit: true,
            existing_amount,
        }
    }

    /// The true spending ceiling: the pre-transaction balance, with the
    /// edited record's old amount added back in.
    pub fn allowable_budget(&self) -> Option<f64> {
        self.remaining_balance
            .map(|remaining| remaining + if self.is_edit { self.existing_amount } else { 0.0 })
    }

    /// A brand-new expense is blocked outright when nothing is left to
    /// spend, before any amount is typed. Edits are exempt.
    pub fn blocks_new_expense(&self) -> bool {
        !self.is_edit && matches!(self.remaining_balance, Some(remaining) if remaining <= 0.0)
    }

    /// Live check while the user types: whether the current input is
    /// already over the ceiling. Empty or unparseable text is not
    /// flagged here; [`validate`] handles it at submit time.
    pub fn amount_exceeds(&self, amount_text: &str) -> bool {
        match (self.allowable_budget(), amount_text.trim().parse::<f64>()) {
            (Some(cap), Ok(amount)) => amount > cap,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BudgetError {
    /// Non-numeric, non-finite, or non-positive input.
    InvalidAmount,
    /// Amount is above the allowable budget.
    ExceedsBudget { cap: f64 },
    /// Withdrawal larger than the current savings balance.
    ExceedsSavingsBalance { balance: f64 },
    /// Remaining balance is zero or negative and this is a new expense.
    NoFundsAvailable,
}

impl fmt::Display for BudgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BudgetError::InvalidAmount => {
                write!(f, "Amount should be a positive number.")
            }
            BudgetError::ExceedsBudget { cap } => {
                write!(
                    f,
                    "This amount exceeds your available balance. You can spend up to {}.",
                    format_currency(cap.max(0.0))
                )
            }
            BudgetError::ExceedsSavingsBalance { balance } => {
                write!(
                    f,
                    "Withdrawal amount exceeds your current savings balance of {}.",
                    format_currency(*balance)
                )
            }
            BudgetError::NoFundsAvailable => {
                write!(
                    f,
                    "Remaining balance is zero. Add income or withdraw savings before recording new expenses."
                )
            }
        }
    }
}

impl std::error::Error for BudgetError {}

/// Validate the raw amount input against the caller's balances.
///
/// Returns the parsed amount so the caller submits the cleaned value.
/// `savings_balance` is only consulted for withdrawals.
pub fn validate(
    amount_text: &str,
    context: &BudgetContext,
    kind: SubmissionKind,
    savings_balance: f64,
) -> Result<f64, BudgetError> {
    if kind == SubmissionKind::Expense && context.blocks_new_expense() {
        return Err(BudgetError::NoFundsAvailable);
    }

    let amount: f64 = amount_text
        .trim()
        .parse()
        .map_err(|_| BudgetError::InvalidAmount)?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(BudgetError::InvalidAmount);
    }

    match kind {
        SubmissionKind::Expense | SubmissionKind::Deposit => {
            if let Some(cap) = context.allowable_budget() {
                if amount > cap {
                    return Err(BudgetError::ExceedsBudget { cap });
                }
            }
        }
        SubmissionKind::Withdrawal => {
            if amount > savings_balance {
                return Err(BudgetError::ExceedsSavingsBalance {
                    balance: savings_balance,
                });
            }
        }
    }

    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowable_budget_adds_back_edited_amount() {
        let ctx = BudgetContext::edit(Some(100.0), 30.0);
        assert_eq!(ctx.allowable_budget(), Some(130.0));

        let ctx = BudgetContext::new_record(Some(100.0));
        assert_eq!(ctx.allowable_budget(), Some(100.0));

        let ctx = BudgetContext::new_record(None);
        assert_eq!(ctx.allowable_budget(), None);
    }

    #[test]
    fn test_amount_exceeds_tracks_typed_input() {
        let ctx = BudgetContext::new_record(Some(100.0));
        assert!(ctx.amount_exceeds("101"));
        assert!(!ctx.amount_exceeds("100"));

        // The edited record's amount is added back into the ceiling.
        let ctx = BudgetContext::edit(Some(100.0), 30.0);
        assert!(!ctx.amount_exceeds("130"));
        assert!(ctx.amount_exceeds("131"));

        // No ceiling, or nothing parseable yet: never flagged.
        assert!(!BudgetContext::new_record(None).amount_exceeds("999999"));
        assert!(!ctx.amount_exceeds(""));
        assert!(!ctx.amount_exceeds("abc"));
    }

    #[test]
    fn test_edit_within_reconstructed_cap_passes() {
        let ctx = BudgetContext::edit(Some(100.0), 30.0);
        assert_eq!(validate("120", &ctx, SubmissionKind::Expense, 0.0), Ok(120.0));
    }

    #[test]
    fn test_edit_above_reconstructed_cap_is_rejected() {
        let ctx = BudgetContext::edit(Some(100.0), 30.0);
        assert_eq!(
            validate("140", &ctx, SubmissionKind::Expense, 0.0),
            Err(BudgetError::ExceedsBudget { cap: 130.0 })
        );
    }

    #[test]
    fn test_editing_down_against_zero_balance_is_allowed() {
        // A $50 expense edited down to $40 with nothing left to spend:
        // only the delta matters.
        let ctx = BudgetContext::edit(Some(0.0), 50.0);
        assert_eq!(validate("40", &ctx, SubmissionKind::Expense, 0.0), Ok(40.0));
    }

    #[test]
    fn test_new_expense_with_no_funds_is_blocked_regardless_of_amount() {
        let ctx = BudgetContext::new_record(Some(0.0));
        assert!(ctx.blocks_new_expense());
        for input in ["0.01", "100", "not a number", ""] {
            assert_eq!(
                validate(input, &ctx, SubmissionKind::Expense, 0.0),
                Err(BudgetError::NoFundsAvailable),
                "input={:?}",
                input
            );
        }
    }

    #[test]
    fn test_no_funds_block_does_not_apply_to_edits() {
        let ctx = BudgetContext::edit(Some(0.0), 25.0);
        assert!(!ctx.blocks_new_expense());
        assert_eq!(validate("25", &ctx, SubmissionKind::Expense, 0.0), Ok(25.0));
    }

    #[test]
    fn test_unknown_remaining_balance_means_no_ceiling() {
        let ctx = BudgetContext::new_record(None);
        assert_eq!(
            validate("999999", &ctx, SubmissionKind::Expense, 0.0),
            Ok(999999.0)
        );
    }

    #[test]
    fn test_malformed_and_non_positive_amounts_are_rejected() {
        let ctx = BudgetContext::new_record(Some(500.0));
        for input in ["", "abc", "-5", "0", "NaN", "inf"] {
            assert_eq!(
                validate(input, &ctx, SubmissionKind::Expense, 0.0),
                Err(BudgetError::InvalidAmount),
                "input={:?}",
                input
            );
        }
    }

    #[test]
    fn test_amount_input_is_trimmed() {
        let ctx = BudgetContext::new_record(Some(500.0));
        assert_eq!(validate(" 42.5 ", &ctx, SubmissionKind::Expense, 0.0), Ok(42.5));
    }

    #[test]
    fn test_deposit_respects_budget_ceiling() {
        let ctx = BudgetContext::new_record(Some(200.0));
        assert_eq!(validate("200", &ctx, SubmissionKind::Deposit, 0.0), Ok(200.0));
        assert_eq!(
            validate("201", &ctx, SubmissionKind::Deposit, 0.0),
            Err(BudgetError::ExceedsBudget { cap: 200.0 })
        );
    }

    #[test]
    fn test_deposit_with_unknown_balance_has_no_ceiling() {
        // Analytics not loaded yet: deposits must not be capped at zero.
        let ctx = BudgetContext::new_record(None);
        assert_eq!(validate("250", &ctx, SubmissionKind::Deposit, 0.0), Ok(250.0));
    }

    #[test]
    fn test_deposit_is_not_subject_to_new_expense_block() {
        // The structural no-funds block only disables new expenses; a
        // deposit at zero balance still fails, but via the ceiling.
        let ctx = BudgetContext::new_record(Some(0.0));
        assert_eq!(
            validate("10", &ctx, SubmissionKind::Deposit, 0.0),
            Err(BudgetError::ExceedsBudget { cap: 0.0 })
        );
    }

    #[test]
    fn test_withdrawal_limited_by_savings_balance() {
        let ctx = BudgetContext::new_record(Some(0.0));
        assert_eq!(
            validate("600", &ctx, SubmissionKind::Withdrawal, 500.0),
            Err(BudgetError::ExceedsSavingsBalance { balance: 500.0 })
        );
        assert_eq!(
            validate("500", &ctx, SubmissionKind::Withdrawal, 500.0),
            Ok(500.0)
        );
    }

    #[test]
    fn test_error_messages_are_user_facing() {
        let err = BudgetError::ExceedsBudget { cap: 130.0 };
        assert_eq!(
            err.to_string(),
            "This amount exceeds your available balance. You can spend up to PKR 130."
        );
        let err = BudgetError::ExceedsBudget { cap: -20.0 };
        // Never advertise a negative cap.
        assert!(err.to_string().contains("PKR 0"));
    }
}
