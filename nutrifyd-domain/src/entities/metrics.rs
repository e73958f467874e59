use serde::{Deserialize, Serialize};

/// A pair of physical measurements used to compute body mass index
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Measurement {
    /// Body weight in kilograms
    pub weight_kg: f64,

    /// Height in centimeters
    pub height_cm: f64,
}

/// Body mass classification under the standard adult thresholds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,

    /// BMI of at least 18.5 and below 25
    Normal,

    /// BMI of at least 25 and below 30
    Overweight,

    /// BMI of 30 or above
    Obese,
}

impl ToString for BmiCategory {
    fn to_string(&self) -> String {
        match self {
            BmiCategory::Underweight => "Underweight".to_string(),
            BmiCategory::Normal => "Normal".to_string(),
            BmiCategory::Overweight => "Overweight".to_string(),
            BmiCategory::Obese => "Obese".to_string(),
        }
    }
}

/// Computed body mass index together with its classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BmiResult {
    /// Body mass index rounded to one decimal place
    pub bmi: f64,

    /// Classification of the rounded index
    pub category: BmiCategory,
}
