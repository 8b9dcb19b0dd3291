use chrono::NaiveDate;

/// Format an ISO 8601 timestamp for table display, e.g. "Oct 02, 2025".
/// Falls back to the raw string if the date part does not parse.
pub fn format_display_date(iso: &str) -> String {
    let date_part = iso.split('T').next().unwrap_or(iso);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%b %d, %Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

/// Short month label for the carryover row date cell, e.g. "Sep 2025".
pub fn format_month_label(iso: &str) -> String {
    let date_part = iso.split('T').next().unwrap_or(iso);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%b %Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

/// Trim an ISO timestamp down to the YYYY-MM-DD value a date input wants.
pub fn date_input_value(iso: &str) -> String {
    iso.split('T').next().unwrap_or(iso).to_string()
}

/// Today's date as YYYY-MM-DD, from the browser clock.
pub fn current_date_input() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date()
    )
}
