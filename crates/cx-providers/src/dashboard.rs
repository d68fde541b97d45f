use chrono::DateTime;
use cx_types::{DashboardSnapshot, WeeklySummaryRow};
use serde::Deserialize;
use serde_json::Value;

use crate::backend::BackendClient;
use crate::error::ProviderError;

/// Figures shown when the backend has nothing better. They mirror the placeholder
/// numbers the dashboard has always displayed.
#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct DashboardDefaults {
    pub last_week_hours: Option<f64>,
    pub current_month_hours: Option<f64>,
    pub redbooth_hours: Option<f64>,
    pub clockify_hours: Option<f64>,
}

impl Default for DashboardDefaults {
    fn default() -> Self {
        Self {
            last_week_hours: Some(35.0),
            current_month_hours: None,
            redbooth_hours: Some(35.0),
            clockify_hours: Some(35.0 + 4.0 / 60.0),
        }
    }
}

const PROJECT_KEYS: &[&str] = &["Project", "project", "projectName", "name"];
const HOURS_KEYS: &[&str] = &["Time (decimal)", "weeklyTotalLoggedHours", "totalLoggedHours"];

// Anything above this is treated as milliseconds (year 5138 in seconds).
const MAX_UNIX_SECONDS: i64 = 100_000_000_000;

pub async fn collect(
    backend: &BackendClient,
    defaults: &DashboardDefaults,
) -> Result<DashboardSnapshot, ProviderError> {
    let entries = backend.fetch_weekly_summary().await?;
    Ok(build_snapshot(&entries, defaults))
}

/// One row per summary entry. The Clockify figure is the summed hours when any entry
/// carries hours, otherwise the configured default.
pub fn build_snapshot(entries: &[Value], defaults: &DashboardDefaults) -> DashboardSnapshot {
    let rows: Vec<WeeklySummaryRow> = entries.iter().map(summary_row).collect();

    let loggedTotal = rows
        .iter()
        .filter_map(|r| r.logged_hours)
        .fold(None, |acc: Option<f64>, h| Some(acc.unwrap_or(0.0) + h));

    DashboardSnapshot {
        last_week_hours: defaults.last_week_hours,
        current_month_hours: defaults.current_month_hours,
        redbooth_hours: defaults.redbooth_hours,
        clockify_hours: loggedTotal.or(defaults.clockify_hours),
        rows,
    }
}

fn summary_row(entry: &Value) -> WeeklySummaryRow {
    WeeklySummaryRow {
        project_name: PROJECT_KEYS
            .iter()
            .find_map(|k| entry.get(*k).and_then(|v| v.as_str()))
            .unwrap_or_default()
            .to_string(),
        week_ending: entry
            .get("rangeEnd")
            .and_then(number_like)
            .and_then(|ts| format_week_ending(ts as i64))
            .unwrap_or_default(),
        logged_hours: HOURS_KEYS
            .iter()
            .find_map(|k| entry.get(*k).and_then(number_like)),
    }
}

/// Numbers may arrive as JSON numbers or as numeric strings (Clockify CSV exports).
fn number_like(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

/// US long date in UTC, e.g. "January 7, 2024".
pub fn format_week_ending(timestamp: i64) -> Option<String> {
    let seconds = if timestamp.unsigned_abs() >= MAX_UNIX_SECONDS as u64 {
        timestamp / 1000
    } else {
        timestamp
    };
    let date = DateTime::from_timestamp(seconds, 0)?;
    Some(date.format("%B %-d, %Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn formats_week_ending_from_seconds_and_millis() {
        assert_eq!(format_week_ending(1704585600).as_deref(), Some("January 7, 2024"));
        assert_eq!(format_week_ending(1704585600000).as_deref(), Some("January 7, 2024"));
        assert_eq!(format_week_ending(i64::MIN), None);
    }

    #[test]
    fn out_of_range_range_end_leaves_week_ending_blank() {
        let entries = vec![
            json!({ "Project": "Atlas", "rangeEnd": -1e19 }),
            json!({ "Project": "Borealis", "rangeEnd": 1e300 }),
        ];

        let snapshot = build_snapshot(&entries, &DashboardDefaults::default());

        assert_eq!(snapshot.rows.len(), 2);
        assert_eq!(snapshot.rows[0].project_name, "Atlas");
        assert_eq!(snapshot.rows[0].week_ending, "");
        assert_eq!(snapshot.rows[1].week_ending, "");
    }

    #[test]
    fn one_row_per_entry_with_lenient_fields() {
        let entries = vec![
            json!({ "Project": "Atlas", "Time (decimal)": "7.50", "rangeEnd": 1704585600 }),
            json!({ "name": "Borealis", "weeklyTotalLoggedHours": 12.25 }),
            json!({ "unrelated": true }),
        ];

        let snapshot = build_snapshot(&entries, &DashboardDefaults::default());

        assert_eq!(snapshot.rows.len(), 3);
        assert_eq!(snapshot.rows[0].project_name, "Atlas");
        assert_eq!(snapshot.rows[0].week_ending, "January 7, 2024");
        assert_eq!(snapshot.rows[0].logged_hours, Some(7.5));
        assert_eq!(snapshot.rows[1].project_name, "Borealis");
        assert_eq!(snapshot.rows[1].week_ending, "");
        assert_eq!(snapshot.rows[2], WeeklySummaryRow::default());
        assert_eq!(snapshot.clockify_hours, Some(19.75));
    }

    #[test]
    fn empty_summary_keeps_configured_figures() {
        let defaults = DashboardDefaults::default();
        let snapshot = build_snapshot(&[], &defaults);

        assert!(snapshot.rows.is_empty());
        assert_eq!(snapshot.last_week_hours, Some(35.0));
        assert_eq!(snapshot.redbooth_hours, Some(35.0));
        assert_eq!(snapshot.clockify_hours, defaults.clockify_hours);
        assert_eq!(snapshot.current_month_hours, None);
    }
}
