//! Weekly sleep statistics over the record collection

use chrono::{DateTime, Utc, Weekday};
use serde::Serialize;

use crate::store::SleepRecord;

/// Summary of the Monday-based week containing a reference instant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklySummary {
    /// Number of sessions recorded this week
    pub record_count: usize,

    /// Total hours slept this week
    pub total_hours: u32,

    /// Mean hours per session
    pub average_hours: f64,

    /// Longest single session in hours
    pub longest_hours: u32,

    /// Shortest single session in hours
    pub shortest_hours: u32,
}

/// Compute the weekly summary for the week containing `now`.
///
/// Records with unparseable timestamps are skipped.
pub fn weekly_summary(records: &[SleepRecord], now: DateTime<Utc>) -> WeeklySummary {
    let week = now.date_naive().week(Weekday::Mon);
    let first_day = week.first_day();
    let last_day = week.last_day();

    let durations: Vec<u32> = records
        .iter()
        .filter_map(|record| {
            let date = DateTime::parse_from_rfc3339(&record.timestamp)
                .ok()?
                .date_naive();
            (date >= first_day && date <= last_day).then_some(record.duration_hours)
        })
        .collect();

    let total_hours: u32 = durations.iter().sum();
    let average_hours = if durations.is_empty() {
        0.0
    } else {
        f64::from(total_hours) / durations.len() as f64
    };

    WeeklySummary {
        record_count: durations.len(),
        total_hours,
        average_hours,
        longest_hours: durations.iter().copied().max().unwrap_or(0),
        shortest_hours: durations.iter().copied().min().unwrap_or(0),
    }
}
