use std::collections::BTreeSet;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use thiserror::Error;

use crate::entities::tracking::{CalorieEntry, ProgressInsights, WeightEntry};

/// Tracking service errors
#[derive(Debug, Error)]
pub enum TrackingError {
    /// Insufficient data error
    #[error("Insufficient data: {0}")]
    InsufficientData(String),
}

/// Compute progress metrics from the tracking journals.
///
/// Entries are expected oldest first, as the repository returns them. Every
/// reported figure is derived from the journals; nothing is synthesized.
pub fn calculate_progress(
    weights: &[WeightEntry],
    calories: &[CalorieEntry],
    period_days: u32,
) -> Result<ProgressInsights, TrackingError> {
    if weights.is_empty() {
        return Err(TrackingError::InsufficientData(
            "No weight entries available to compute progress".to_string(),
        ));
    }

    let start_weight_kg = weights[0].weight_kg;
    let current_weight_kg = weights[weights.len() - 1].weight_kg;

    let mut min_weight_kg = f64::MAX;
    let mut max_weight_kg = f64::MIN;
    for entry in weights {
        min_weight_kg = min_weight_kg.min(entry.weight_kg);
        max_weight_kg = max_weight_kg.max(entry.weight_kg);
    }

    let avg_calories = if calories.is_empty() {
        None
    } else {
        let total: u64 = calories.iter().map(|entry| entry.calories as u64).sum();
        Some(total as f64 / calories.len() as f64)
    };

    // Entries with a malformed timestamp still count toward the weight
    // figures but cannot contribute to the day-based metrics.
    let tracked_days: BTreeSet<NaiveDate> = weights
        .iter()
        .filter_map(|entry| DateTime::parse_from_rfc3339(&entry.recorded_at).ok())
        .map(|timestamp| timestamp.date_naive())
        .collect();

    let current_streak = match tracked_days.iter().next_back() {
        Some(&last) => {
            let mut streak: u32 = 1;
            while tracked_days.contains(&(last - Duration::days(streak as i64))) {
                streak += 1;
            }
            streak
        }
        None => 0,
    };

    Ok(ProgressInsights {
        start_weight_kg,
        current_weight_kg,
        min_weight_kg,
        max_weight_kg,
        weight_change_kg: current_weight_kg - start_weight_kg,
        avg_calories,
        entry_count: weights.len(),
        days_tracked: tracked_days.len() as u32,
        current_streak,
        period_days,
        generated_at: Utc::now(),
    })
}
