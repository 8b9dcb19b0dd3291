use serde::{Deserialize, Serialize};
use std::fmt;

/// Expense category. The wire format uses the display labels verbatim,
/// including the trailing dot on "Misc.".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Food,
    Rent,
    Travel,
    #[serde(rename = "Misc.")]
    Misc,
    Others,
}

impl Category {
    /// All categories in the order the expense form offers them.
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Rent,
        Category::Travel,
        Category::Misc,
        Category::Others,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Rent => "Rent",
            Category::Travel => "Travel",
            Category::Misc => "Misc.",
            Category::Others => "Others",
        }
    }

    /// Parse a select-box value back into a category.
    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An expense record as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub amount: f64,
    pub category: Category,
    pub description: Option<String>,
    /// ISO 8601 timestamp
    pub date: String,
}

/// An income record as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub id: i64,
    pub amount: f64,
    pub source: String,
    /// ISO 8601 timestamp
    pub date: String,
}

/// Direction of a manual savings adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SavingsAction {
    Deposit,
    Withdraw,
}

impl fmt::Display for SavingsAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SavingsAction::Deposit => write!(f, "Deposit"),
            SavingsAction::Withdraw => write!(f, "Withdraw"),
        }
    }
}

/// A manual savings transaction as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsTransaction {
    pub id: i64,
    pub amount: f64,
    pub action: SavingsAction,
    pub description: Option<String>,
    /// ISO 8601 timestamp
    pub date: String,
}

/// Leftover balance retained from the previous period. Synthetic: it is
/// rendered as an extra table row but never persisted and never counted
/// by pagination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Carryover {
    pub amount: f64,
    /// Human label for the source period, e.g. "September 2025"
    pub label: String,
    pub period_start: Option<String>,
    pub period_end: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: User,
}

/// Generic `{ "message": ... }` acknowledgement (delete, logout).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// ---------------------------------------------------------------------------
// Expenses / incomes / savings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateExpenseRequest {
    pub amount: f64,
    pub category: Category,
    pub description: String,
    /// YYYY-MM-DD from the date input
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseListResponse {
    pub expenses: Vec<Expense>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseResponse {
    pub message: String,
    pub expense: Expense,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateIncomeRequest {
    pub amount: f64,
    pub source: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeListResponse {
    pub incomes: Vec<Income>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeResponse {
    pub message: String,
    pub income: Income,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSavingsRequest {
    pub amount: f64,
    pub action: SavingsAction,
    pub description: String,
    pub date: String,
}

/// Totals for one savings bucket (all-time or current-month).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SavingsBucket {
    pub total_deposits: f64,
    pub total_withdrawals: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CurrentMonthSavings {
    pub total_deposits: f64,
    pub total_withdrawals: f64,
    pub balance: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SavingsSummary {
    pub all_time: SavingsBucket,
    pub current_month: CurrentMonthSavings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsOverviewResponse {
    pub summary: SavingsSummary,
    pub transactions: Vec<SavingsTransaction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsTransactionResponse {
    pub message: String,
    pub transaction: SavingsTransaction,
}

// ---------------------------------------------------------------------------
// Analytics (display-only; all numbers are computed server-side)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub remaining_balance: f64,
    /// "Saved" or "Overspent"
    pub status: String,
    pub month: String,
    pub savings: SavingsBucket,
    pub carryover: Option<Carryover>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllTimeSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub remaining_balance: f64,
    pub savings: SavingsBucket,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardAnalytics {
    pub current_month: MonthSummary,
    pub all_time: AllTimeSummary,
}

/// One slice of the expense category breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySlice {
    pub category: String,
    pub total: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdownResponse {
    pub breakdown: Vec<CategorySlice>,
}

/// One month of the income/expense/savings trend series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// e.g. "Oct 2025"
    pub month: String,
    pub income: f64,
    pub expenses: f64,
    pub savings: f64,
    pub leftover: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTrendResponse {
    pub trend: Vec<TrendPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightsResponse {
    pub insights: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_labels_round_trip() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.label()));
            let back: Category = serde_json::from_str(&json).unwrap();
            assert_eq!(back, category);
        }
    }

    #[test]
    fn test_category_misc_keeps_trailing_dot() {
        assert_eq!(serde_json::to_string(&Category::Misc).unwrap(), "\"Misc.\"");
        assert_eq!(Category::from_label("Misc."), Some(Category::Misc));
        assert_eq!(Category::from_label("Misc"), None);
    }

    #[test]
    fn test_savings_action_wire_format() {
        assert_eq!(
            serde_json::to_string(&SavingsAction::Deposit).unwrap(),
            "\"deposit\""
        );
        let action: SavingsAction = serde_json::from_str("\"withdraw\"").unwrap();
        assert_eq!(action, SavingsAction::Withdraw);
    }

    #[test]
    fn test_expense_deserializes_with_extra_fields() {
        // The API also sends user_id and created_at; they must be ignored.
        let json = r#"{
            "id": 7,
            "user_id": 3,
            "amount": 1250.0,
            "category": "Food",
            "description": null,
            "date": "2025-10-02T09:30:00",
            "created_at": "2025-10-02T09:30:01"
        }"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.id, 7);
        assert_eq!(expense.category, Category::Food);
        assert_eq!(expense.description, None);
    }

    #[test]
    fn test_dashboard_analytics_deserializes() {
        let json = r#"{
            "current_month": {
                "total_income": 50000.0,
                "total_expenses": 32000.0,
                "remaining_balance": 15000.0,
                "status": "Saved",
                "month": "October 2025",
                "savings": {"total_deposits": 3000.0, "total_withdrawals": 0.0, "balance": 3000.0},
                "carryover": {
                    "amount": 1200.0,
                    "label": "September 2025",
                    "period_start": "2025-09-01T00:00:00",
                    "period_end": "2025-09-30T23:59:59"
                }
            },
            "all_time": {
                "total_income": 150000.0,
                "total_expenses": 110000.0,
                "remaining_balance": 30000.0,
                "savings": {"total_deposits": 12000.0, "total_withdrawals": 2000.0, "balance": 10000.0}
            }
        }"#;
        let analytics: DashboardAnalytics = serde_json::from_str(json).unwrap();
        assert_eq!(analytics.current_month.status, "Saved");
        let carryover = analytics.current_month.carryover.unwrap();
        assert_eq!(carryover.label, "September 2025");
        assert_eq!(analytics.all_time.savings.balance, 10000.0);
    }
}
