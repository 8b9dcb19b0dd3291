use gloo::net::http::{Request, RequestBuilder, Response};
use gloo::storage::{LocalStorage, Storage};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{
    AuthResponse, CategoryBreakdownResponse, CreateExpenseRequest, CreateIncomeRequest,
    CreateSavingsRequest, DashboardAnalytics, ExpenseListResponse, ExpenseResponse,
    IncomeListResponse, IncomeResponse, InsightsResponse, LoginRequest, MessageResponse,
    MonthlyTrendResponse, RegisterRequest, SavingsOverviewResponse, SavingsTransactionResponse,
    UserResponse,
};

const TOKEN_KEY: &str = "token";

/// Read the persisted session token, if any.
pub fn stored_token() -> Option<String> {
    LocalStorage::get(TOKEN_KEY).ok()
}

pub fn store_token(token: &str) {
    let _ = LocalStorage::set(TOKEN_KEY, token);
}

pub fn clear_token() {
    LocalStorage::delete(TOKEN_KEY);
}

/// API client for the expense tracker backend. Injects the bearer token
/// on every request and drops the session on a 401.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:5002/api".to_string(),
        }
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    // -- Auth ---------------------------------------------------------------

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, String> {
        self.post_json("/register", request).await
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, String> {
        self.post_json("/login", request).await
    }

    pub async fn get_user(&self) -> Result<UserResponse, String> {
        self.get_json("/user").await
    }

    pub async fn logout(&self) -> Result<MessageResponse, String> {
        let builder = self.with_auth(Request::post(&self.url("/logout")));
        let response = builder
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        self.decode(response).await
    }

    // -- Expenses -----------------------------------------------------------

    pub async fn list_expenses(&self) -> Result<ExpenseListResponse, String> {
        self.get_json("/expenses").await
    }

    pub async fn create_expense(
        &self,
        request: &CreateExpenseRequest,
    ) -> Result<ExpenseResponse, String> {
        self.post_json("/expenses", request).await
    }

    pub async fn update_expense(
        &self,
        id: i64,
        request: &CreateExpenseRequest,
    ) -> Result<ExpenseResponse, String> {
        self.put_json(&format!("/expenses/{}", id), request).await
    }

    pub async fn delete_expense(&self, id: i64) -> Result<MessageResponse, String> {
        self.delete_json(&format!("/expenses/{}", id)).await
    }

    // -- Incomes ------------------------------------------------------------

    pub async fn list_incomes(&self) -> Result<IncomeListResponse, String> {
        self.get_json("/incomes").await
    }

    pub async fn create_income(
        &self,
        request: &CreateIncomeRequest,
    ) -> Result<IncomeResponse, String> {
        self.post_json("/incomes", request).await
    }

    pub async fn update_income(
        &self,
        id: i64,
        request: &CreateIncomeRequest,
    ) -> Result<IncomeResponse, String> {
        self.put_json(&format!("/incomes/{}", id), request).await
    }

    pub async fn delete_income(&self, id: i64) -> Result<MessageResponse, String> {
        self.delete_json(&format!("/incomes/{}", id)).await
    }

    // -- Savings ------------------------------------------------------------

    pub async fn savings_overview(&self) -> Result<SavingsOverviewResponse, String> {
        self.get_json("/savings").await
    }

    pub async fn create_savings_transaction(
        &self,
        request: &CreateSavingsRequest,
    ) -> Result<SavingsTransactionResponse, String> {
        self.post_json("/savings", request).await
    }

    // -- Analytics ----------------------------------------------------------

    pub async fn dashboard_analytics(&self) -> Result<DashboardAnalytics, String> {
        self.get_json("/analytics/dashboard").await
    }

    pub async fn category_breakdown(&self) -> Result<CategoryBreakdownResponse, String> {
        self.get_json("/analytics/category-breakdown").await
    }

    pub async fn monthly_trend(&self) -> Result<MonthlyTrendResponse, String> {
        self.get_json("/analytics/monthly-trend").await
    }

    pub async fn insights(&self) -> Result<InsightsResponse, String> {
        self.get_json("/analytics/insights").await
    }

    // -- Plumbing -----------------------------------------------------------

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn with_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        match stored_token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, String> {
        let response = self
            .with_auth(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        self.decode(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, String> {
        let response = self
            .with_auth(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        self.decode(response).await
    }

    async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, String> {
        let response = self
            .with_auth(Request::put(&self.url(path)))
            .json(body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        self.decode(response).await
    }

    async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, String> {
        let response = self
            .with_auth(Request::delete(&self.url(path)))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        self.decode(response).await
    }

    async fn decode<T: DeserializeOwned>(&self, response: Response) -> Result<T, String> {
        if response.status() == 401 {
            // Session expired or token invalid: drop it and send the
            // user back to the login screen.
            clear_token();
            redirect_to_login();
            return Err("Session expired".to_string());
        }

        if response.ok() {
            response
                .json::<T>()
                .await
                .map_err(|e| format!("Failed to parse response: {}", e))
        } else {
            Err(error_message(response).await)
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Pull the `error` field out of a failure body when the backend sent
/// one, otherwise fall back to the raw text.
async fn error_message(response: Response) -> String {
    let text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    match serde_json::from_str::<serde_json::Value>(&text) {
        Ok(value) => value
            .get("error")
            .and_then(|e| e.as_str())
            .map(|e| e.to_string())
            .unwrap_or(text),
        Err(_) => text,
    }
}

fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let location = window.location();
        let on_login = location
            .pathname()
            .map(|path| path == "/" || path.starts_with("/login"))
            .unwrap_or(false);
        if !on_login {
            let _ = location.set_href("/");
        }
    }
}
