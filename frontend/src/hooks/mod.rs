pub mod use_dashboard_data;

pub use use_dashboard_data::{use_dashboard_data, DashboardData};
