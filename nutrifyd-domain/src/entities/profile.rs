use serde::{Deserialize, Serialize};
use validator::Validate;

use super::metrics::BmiResult;

/// Self-reported dietary preference used to select a meal table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DietaryPreference {
    /// Vegetarian ("veg" on the wire)
    #[serde(rename = "veg")]
    Vegetarian,

    /// Non-vegetarian ("non-veg" on the wire)
    #[serde(rename = "non-veg")]
    NonVegetarian,
}

impl DietaryPreference {
    /// Wire representation used by the stored profile
    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryPreference::Vegetarian => "veg",
            DietaryPreference::NonVegetarian => "non-veg",
        }
    }

    /// Parse the wire representation back into a preference
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "veg" => Some(DietaryPreference::Vegetarian),
            "non-veg" => Some(DietaryPreference::NonVegetarian),
            _ => None,
        }
    }
}

/// Domain model for a registered user profile
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

    /// Dietary preference driving meal recommendations
    pub preference: DietaryPreference,

    /// Health conditions selected from the condition directory
    pub conditions: Vec<String>,

    /// When the profile was created (RFC 3339)
    pub joined_at: String,

    /// Body mass index computed at registration
    pub bmi: BmiResult,
}

/// Request payload for registering a new user profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProfileRequest {
    /// Display name
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    /// Age in years
    #[validate(range(min = 1, max = 120, message = "Age must be between 1 and 120"))]
    pub age: u16,

    /// Optional self-reported gender
    pub gender: Option<String>,

    /// Body weight in kilograms
    #[validate(range(min = 1.0, max = 500.0, message = "Weight must be between 1 and 500 kg"))]
    pub weight_kg: f64,

    /// Height in centimeters
    #[validate(range(min = 40.0, max = 300.0, message = "Height must be between 40 and 300 cm"))]
    pub height_cm: f64,

    /// Dietary preference driving meal recommendations
    pub preference: DietaryPreference,

    /// Health conditions selected from the condition directory
    #[serde(default)]
    pub conditions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn base_request() -> CreateProfileRequest {
        CreateProfileRequest {
            name: "Priya".to_string(),
            age: 28,
            gender: Some("female".to_string()),
            weight_kg: 62.0,
            height_cm: 165.0,
            preference: DietaryPreference::Vegetarian,
            conditions: vec!["Anemia".to_string()],
        }
    }

    #[test]
    fn test_valid_request_passes_validation() {
        assert!(base_request().validate().is_ok());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let request = CreateProfileRequest {
            name: String::new(),
            ..base_request()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_out_of_range_age_is_rejected() {
        let request = CreateProfileRequest {
            age: 150,
            ..base_request()
        };
        let result = request.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Age"));
    }

    #[test]
    fn test_preference_wire_format() {
        let json = serde_json::to_string(&DietaryPreference::NonVegetarian).unwrap();
        assert_eq!(json, "\"non-veg\"");

        let parsed: DietaryPreference = serde_json::from_str("\"veg\"").unwrap();
        assert_eq!(parsed, DietaryPreference::Vegetarian);
    }

    #[test]
    fn test_preference_from_str_rejects_unknown() {
        assert_eq!(DietaryPreference::from_str("vegan"), None);
        assert_eq!(
            DietaryPreference::from_str("non-veg"),
            Some(DietaryPreference::NonVegetarian)
        );
    }
}
