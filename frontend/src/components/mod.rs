pub mod chart_card;
pub mod expense_form;
pub mod income_form;
pub mod navbar;
pub mod records_table;
pub mod savings_form;
pub mod savings_table;
pub mod stat_card;
