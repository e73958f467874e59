use thiserror::Error;

use crate::entities::metrics::{BmiCategory, BmiResult, Measurement};

/// Errors from body measurement computations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetricsError {
    /// Weight or height was missing, non-positive, or non-finite
    #[error("Invalid measurement: {0}")]
    InvalidMeasurement(String),
}

/// Compute the body mass index for a measurement.
///
/// Weight and height must both be finite and strictly positive; anything
/// else is rejected rather than defaulted. The index is rounded half-up to
/// one decimal place and categorized from the rounded value.
pub fn compute_bmi(measurement: &Measurement) -> Result<BmiResult, MetricsError> {
    let Measurement {
        weight_kg,
        height_cm,
    } = *measurement;

    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(MetricsError::InvalidMeasurement(format!(
            "weight must be a positive number of kilograms, got {}",
            weight_kg
        )));
    }
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(MetricsError::InvalidMeasurement(format!(
            "height must be a positive number of centimeters, got {}",
            height_cm
        )));
    }

    let height_m = height_cm / 100.0;
    let bmi = round_to_tenth(weight_kg / (height_m * height_m));

    Ok(BmiResult {
        bmi,
        category: categorize_bmi(bmi),
    })
}

/// Categorize a body mass index under the 18.5 / 25 / 30 thresholds.
/// Intervals are half-open with the lower bound inclusive.
pub fn categorize_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Round half-up to one decimal place
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
