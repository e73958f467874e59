use serde::{Deserialize, Serialize};

/// Storage model for a user profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique identifier for the profile
    pub id: String,

    /// Display name entered at registration
    pub name: String,

    /// Age in years
    pub age: u16,

    /// Optional self-reported gender
    pub gender: Option<String>,

    /// Body weight in kilograms
    pub weight_kg: f64,

    /// Height in centimeters
    pub height_cm: f64,

    /// Dietary preference as stored on the wire ("veg" or "non-veg")
    pub preference: String,

    /// Health conditions selected from the condition directory
    pub conditions: Vec<String>,

    /// When the profile was created (RFC 3339)
    pub joined_at: String,

    /// Body mass index computed at registration, one decimal
    pub bmi: f64,

    /// BMI category as a display string
    pub bmi_category: String,
}

/// Input data for persisting a new user profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProfileRequest {
    /// Display name entered at registration
    pub name: String,

    /// Age in years
    pub age: u16,

    /// Optional self-reported gender
    pub gender: Option<String>,

    /// Body weight in kilograms
    pub weight_kg: f64,

    /// Height in centimeters
    pub height_cm: f64,

    /// Dietary preference as stored on the wire ("veg" or "non-veg")
    pub preference: String,

    /// Health conditions selected from the condition directory
    pub conditions: Vec<String>,

    /// When the profile was created (RFC 3339)
    pub joined_at: String,

    /// Body mass index computed at registration, one decimal
    pub bmi: f64,

    /// BMI category as a display string
    pub bmi_category: String,
}

/// Storage model for one logged weight measurement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightEntry {
    /// Unique identifier for the entry
    pub id: String,

    /// Body weight in kilograms
    pub weight_kg: f64,

    /// When the measurement was taken (RFC 3339)
    pub recorded_at: String,
}

/// Input data for appending a weight measurement to the journal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWeightEntry {
    /// Body weight in kilograms
    pub weight_kg: f64,

    /// When the measurement was taken (RFC 3339)
    pub recorded_at: String,
}

/// Storage model for one logged daily calorie total
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieEntry {
    /// Unique identifier for the entry
    pub id: String,

    /// Calories consumed
    pub calories: u32,

    /// When the intake was logged (RFC 3339)
    pub recorded_at: String,
}

/// Input data for appending a calorie total to the journal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCalorieEntry {
    /// Calories consumed
    pub calories: u32,

    /// When the intake was logged (RFC 3339)
    pub recorded_at: String,
}
