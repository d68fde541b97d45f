use serde::{Deserialize, Serialize};

/// One line of the dashboard's weekly logging table.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct WeeklySummaryRow {
    pub project_name: String,
    /// Already formatted for display, e.g. "January 7, 2024". Empty when unknown.
    pub week_ending: String,
    pub logged_hours: Option<f64>,
}

/// Everything the dashboard page renders, assembled server-side.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct DashboardSnapshot {
    pub last_week_hours: Option<f64>,
    pub current_month_hours: Option<f64>,
    pub redbooth_hours: Option<f64>,
    pub clockify_hours: Option<f64>,
    pub rows: Vec<WeeklySummaryRow>,
}

/// Renders decimal hours as `"{h}h {mm}m"`, or just `"{h}h"` on the hour.
/// A rounded 60 minutes carries into the hour.
pub fn format_decimal_hours(decimalHours: f64) -> String {
    if !decimalHours.is_finite() || decimalHours <= 0.0 {
        return "0h".into();
    }

    let mut hours = decimalHours.floor() as u64;
    let mut minutes = ((decimalHours - decimalHours.floor()) * 60.0).round() as u64;
    if minutes >= 60 {
        hours += 1;
        minutes -= 60;
    }

    if minutes == 0 {
        format!("{hours}h")
    } else {
        format!("{hours}h {minutes:02}m")
    }
}

/// Display form for an optional figure; missing values show as a dash.
pub fn format_optional_hours(hours: Option<f64>) -> String {
    hours
        .map(format_decimal_hours)
        .unwrap_or_else(|| "\u{2014}".into())
}
