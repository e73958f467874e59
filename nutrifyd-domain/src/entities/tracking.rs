use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Domain model for one logged weight measurement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeightEntry {
    /// Unique identifier for the entry
    pub id: String,

    /// Body weight in kilograms
    pub weight_kg: f64,

    /// When the measurement was taken (RFC 3339)
    pub recorded_at: String,
}

/// Domain model for one logged daily calorie total
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalorieEntry {
    /// Unique identifier for the entry
    pub id: String,

    /// Calories consumed
    pub calories: u32,

    /// When the intake was logged (RFC 3339)
    pub recorded_at: String,
}

/// Progress metrics computed from the tracking journals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressInsights {
    /// Weight at the first entry of the analysis period
    pub start_weight_kg: f64,

    /// Weight at the most recent entry of the analysis period
    pub current_weight_kg: f64,

    /// Lowest recorded weight during the period
    pub min_weight_kg: f64,

    /// Highest recorded weight during the period
    pub max_weight_kg: f64,

    /// Net change over the period (negative means weight lost)
    pub weight_change_kg: f64,

    /// Average of logged daily calorie totals, if any were logged
    pub avg_calories: Option<f64>,

    /// Number of weight entries analyzed
    pub entry_count: usize,

    /// Distinct calendar days with at least one weight entry
    pub days_tracked: u32,

    /// Consecutive calendar days, ending at the most recent entry,
    /// with at least one weight entry each
    pub current_streak: u32,

    /// Analysis period in days
    pub period_days: u32,

    /// Timestamp of the analysis
    pub generated_at: DateTime<Utc>,
}
