use shared::{CategorySlice, DashboardAnalytics, TrendPoint};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::store::{Action, StoreHandle};

/// Everything the dashboard needs that is not already in the store,
/// plus the refresh action that reloads both.
#[derive(Clone, PartialEq)]
pub struct DashboardData {
    pub analytics: Option<DashboardAnalytics>,
    pub breakdown: Vec<CategorySlice>,
    pub trend: Vec<TrendPoint>,
    pub insights: Vec<String>,
    pub loading: bool,
    pub refresh: Callback<()>,
}

/// Fetch all dashboard resources on mount and expose a refresh callback.
/// Record collections land in the store; analytics stay local to the
/// dashboard since nothing else reads them.
#[hook]
pub fn use_dashboard_data(api: &ApiClient, store: &StoreHandle) -> DashboardData {
    let analytics = use_state(|| Option::<DashboardAnalytics>::None);
    let breakdown = use_state(Vec::<CategorySlice>::new);
    let trend = use_state(Vec::<TrendPoint>::new);
    let insights = use_state(Vec::<String>::new);
    let loading = use_state(|| true);

    let refresh = {
        let api = api.clone();
        let store = store.clone();
        let analytics = analytics.clone();
        let breakdown = breakdown.clone();
        let trend = trend.clone();
        let insights = insights.clone();
        let loading = loading.clone();

        use_callback((), move |_, _| {
            let api = api.clone();
            let store = store.clone();
            let analytics = analytics.clone();
            let breakdown = breakdown.clone();
            let trend = trend.clone();
            let insights = insights.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);

                match api.list_expenses().await {
                    Ok(data) => store.dispatch(Action::SetExpenses(data.expenses)),
                    Err(e) => Logger::error("dashboard", &format!("Failed to fetch expenses: {}", e)),
                }

                match api.list_incomes().await {
                    Ok(data) => store.dispatch(Action::SetIncomes(data.incomes)),
                    Err(e) => Logger::error("dashboard", &format!("Failed to fetch incomes: {}", e)),
                }

                match api.savings_overview().await {
                    Ok(data) => store.dispatch(Action::SetSavings {
                        summary: data.summary,
                        transactions: data.transactions,
                    }),
                    Err(e) => Logger::error("dashboard", &format!("Failed to fetch savings: {}", e)),
                }

                match api.dashboard_analytics().await {
                    Ok(data) => analytics.set(Some(data)),
                    Err(e) => {
                        Logger::error("dashboard", &format!("Failed to fetch analytics: {}", e))
                    }
                }

                match api.category_breakdown().await {
                    Ok(data) => breakdown.set(data.breakdown),
                    Err(e) => {
                        Logger::error("dashboard", &format!("Failed to fetch breakdown: {}", e))
                    }
                }

                match api.monthly_trend().await {
                    Ok(data) => trend.set(data.trend),
                    Err(e) => Logger::error("dashboard", &format!("Failed to fetch trend: {}", e)),
                }

                match api.insights().await {
                    Ok(data) => insights.set(data.insights),
                    Err(e) => Logger::error("dashboard", &format!("Failed to fetch insights: {}", e)),
                }

                loading.set(false);
            });
        })
    };

    use_effect_with((), {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    DashboardData {
        analytics: (*analytics).clone(),
        breakdown: (*breakdown).clone(),
        trend: (*trend).clone(),
        insights: (*insights).clone(),
        loading: *loading,
        refresh,
    }
}
