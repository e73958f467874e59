use crate::entities::metrics::{BmiCategory, BmiResult};
use crate::entities::profile::{CreateProfileRequest, DietaryPreference, UserProfile};
use crate::entities::tracking::{CalorieEntry, WeightEntry};

/// Conversion functions between domain entities and data models
/// These functions follow the pattern convert_to_[target_layer]_[model_name]

/// Convert from data model to domain entity for a user profile.
/// Fails if the stored preference or category string is not recognized.
pub fn convert_to_domain_profile(
    data_profile: nutrifyd_data::models::profile::UserProfile,
) -> Result<UserProfile, &'static str> {
    let preference = DietaryPreference::from_str(&data_profile.preference)
        .ok_or("Invalid dietary preference string")?;

    let category = match data_profile.bmi_category.as_str() {
        "Underweight" => BmiCategory::Underweight,
        "Normal" => BmiCategory::Normal,
        "Overweight" => BmiCategory::Overweight,
        "Obese" => BmiCategory::Obese,
        _ => return Err("Invalid BMI category string"),
    };

    Ok(UserProfile {
        id: data_profile.id,
        name: data_profile.name,
        age: data_profile.age,
        gender: data_profile.gender,
        weight_kg: data_profile.weight_kg,
        height_cm: data_profile.height_cm,
        preference,
        conditions: data_profile.conditions,
        joined_at: data_profile.joined_at,
        bmi: BmiResult {
            bmi: data_profile.bmi,
            category,
        },
    })
}

/// Convert from domain entity to data model for a create request
pub fn convert_to_data_create_request(
    domain_request: &CreateProfileRequest,
    bmi: &BmiResult,
    joined_at: String,
) -> nutrifyd_data::models::profile::CreateProfileRequest {
    nutrifyd_data::models::profile::CreateProfileRequest {
        name: domain_request.name.clone(),
        age: domain_request.age,
        gender: domain_request.gender.clone(),
        weight_kg: domain_request.weight_kg,
        height_cm: domain_request.height_cm,
        preference: domain_request.preference.as_str().to_string(),
        conditions: domain_request.conditions.clone(),
        joined_at,
        bmi: bmi.bmi,
        bmi_category: bmi.category.to_string(),
    }
}

/// Convert from data model to domain entity for a weight entry
pub fn convert_to_domain_weight_entry(
    data_entry: nutrifyd_data::models::profile::WeightEntry,
) -> WeightEntry {
    WeightEntry {
        id: data_entry.id,
        weight_kg: data_entry.weight_kg,
        recorded_at: data_entry.recorded_at,
    }
}

/// Convert from data model to domain entity for a calorie entry
pub fn convert_to_domain_calorie_entry(
    data_entry: nutrifyd_data::models::profile::CalorieEntry,
) -> CalorieEntry {
    CalorieEntry {
        id: data_entry.id,
        calories: data_entry.calories,
        recorded_at: data_entry.recorded_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_profile() -> nutrifyd_data::models::profile::UserProfile {
        nutrifyd_data::models::profile::UserProfile {
            id: "123e4567-e89b-12d3-a456-426614174000".to_string(),
            name: "Test User".to_string(),
            age: 30,
            gender: Some("male".to_string()),
            weight_kg: 70.0,
            height_cm: 175.0,
            preference: "veg".to_string(),
            conditions: vec!["Diabetes".to_string()],
            joined_at: "2024-03-01T10:00:00Z".to_string(),
            bmi: 22.9,
            bmi_category: "Normal".to_string(),
        }
    }

    #[test]
    fn test_convert_to_domain_profile() {
        let data_profile = stored_profile();
        let domain_profile = convert_to_domain_profile(data_profile.clone()).unwrap();

        assert_eq!(domain_profile.id, data_profile.id);
        assert_eq!(domain_profile.preference, DietaryPreference::Vegetarian);
        assert_eq!(domain_profile.bmi.bmi, 22.9);
        assert_eq!(domain_profile.bmi.category, BmiCategory::Normal);
        assert_eq!(domain_profile.conditions, data_profile.conditions);
    }

    #[test]
    fn test_convert_to_domain_profile_rejects_unknown_preference() {
        let mut data_profile = stored_profile();
        data_profile.preference = "pescatarian".to_string();

        assert!(convert_to_domain_profile(data_profile).is_err());
    }

    #[test]
    fn test_convert_to_domain_profile_rejects_unknown_category() {
        let mut data_profile = stored_profile();
        data_profile.bmi_category = "Severely Obese".to_string();

        assert!(convert_to_domain_profile(data_profile).is_err());
    }

    #[test]
    fn test_convert_to_data_create_request() {
        let domain_request = CreateProfileRequest {
            name: "Test User".to_string(),
            age: 30,
            gender: None,
            weight_kg: 70.0,
            height_cm: 175.0,
            preference: DietaryPreference::NonVegetarian,
            conditions: vec![],
        };
        let bmi = BmiResult {
            bmi: 22.9,
            category: BmiCategory::Normal,
        };

        let data_request = convert_to_data_create_request(
            &domain_request,
            &bmi,
            "2024-03-01T10:00:00Z".to_string(),
        );

        assert_eq!(data_request.name, domain_request.name);
        assert_eq!(data_request.preference, "non-veg");
        assert_eq!(data_request.bmi, 22.9);
        assert_eq!(data_request.bmi_category, "Normal");
        assert_eq!(data_request.joined_at, "2024-03-01T10:00:00Z");
    }
}
