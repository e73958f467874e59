// Testing utilities and mock implementations for the domain layer
// This module is only available when the "mock" feature is enabled

// Re-export useful test mocks from the data layer
pub use nutrifyd_data::repository::tests::MockProfileRepository;

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use crate::entities::meal_plan::MealPlan;
use crate::entities::metrics::Measurement;
use crate::entities::profile::{CreateProfileRequest, UserProfile};
use crate::entities::tracking::{CalorieEntry, ProgressInsights, WeightEntry};
use crate::services::meal_plan::recommend_meal_plan;
use crate::services::metrics::compute_bmi;
use crate::services::profile::{ProfileServiceError, ProfileServiceTrait};
use crate::services::tracking::calculate_progress;

/// Mock implementation of the ProfileServiceTrait for testing
pub struct MockProfileService {
    profile: RwLock<Option<UserProfile>>,
    weights: RwLock<Vec<WeightEntry>>,
    calories: RwLock<Vec<CalorieEntry>>,
    should_fail_validation: bool,
}

impl Default for MockProfileService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProfileService {
    /// Create a new mock profile service
    pub fn new() -> Self {
        Self {
            profile: RwLock::new(None),
            weights: RwLock::new(Vec::new()),
            calories: RwLock::new(Vec::new()),
            should_fail_validation: false,
        }
    }

    /// Configure the mock to fail validation
    pub fn with_validation_failure(mut self) -> Self {
        self.should_fail_validation = true;
        self
    }

    /// Pre-load the mock with a stored profile
    pub fn with_profile(self, profile: UserProfile) -> Self {
        {
            let mut stored = self.profile.write().unwrap();
            *stored = Some(profile);
        }
        self
    }

    /// Pre-load the mock with weight entries
    pub fn with_weight_entries(self, entries: Vec<WeightEntry>) -> Self {
        {
            let mut weights = self.weights.write().unwrap();
            *weights = entries;
        }
        self
    }
}

#[async_trait]
impl ProfileServiceTrait for MockProfileService {
    fn validate_create_request(
        &self,
        _request: &CreateProfileRequest,
    ) -> Result<(), ProfileServiceError> {
        if self.should_fail_validation {
            Err(ProfileServiceError::ValidationError(
                "Validation failed - mock is configured to fail validation".to_string(),
            ))
        } else {
            Ok(())
        }
    }

    async fn register(
        &self,
        request: CreateProfileRequest,
    ) -> Result<UserProfile, ProfileServiceError> {
        self.validate_create_request(&request)?;

        let bmi = compute_bmi(&Measurement {
            weight_kg: request.weight_kg,
            height_cm: request.height_cm,
        })?;

        let profile = UserProfile {
            id: uuid::Uuid::new_v4().to_string(),
            name: request.name,
            age: request.age,
            gender: request.gender,
            weight_kg: request.weight_kg,
            height_cm: request.height_cm,
            preference: request.preference,
            conditions: request.conditions,
            joined_at: Utc::now().to_rfc3339(),
            bmi,
        };

        let mut stored = self.profile.write().unwrap();
        *stored = Some(profile.clone());

        Ok(profile)
    }

    async fn current_profile(&self) -> Result<UserProfile, ProfileServiceError> {
        self.profile.read().unwrap().clone().ok_or_else(|| {
            ProfileServiceError::NotFound("No profile has been registered".to_string())
        })
    }

    async fn sign_out(&self) -> Result<bool, ProfileServiceError> {
        Ok(self.profile.write().unwrap().take().is_some())
    }

    async fn meal_plan(&self) -> Result<MealPlan, ProfileServiceError> {
        let profile = self.current_profile().await?;
        Ok(recommend_meal_plan(profile.preference))
    }

    async fn record_weight(
        &self,
        weight_kg: f64,
        recorded_at: String,
    ) -> Result<WeightEntry, ProfileServiceError> {
        let entry = WeightEntry {
            id: uuid::Uuid::new_v4().to_string(),
            weight_kg,
            recorded_at,
        };
        self.weights.write().unwrap().push(entry.clone());
        Ok(entry)
    }

    async fn record_calories(
        &self,
        calories: u32,
        recorded_at: String,
    ) -> Result<CalorieEntry, ProfileServiceError> {
        let entry = CalorieEntry {
            id: uuid::Uuid::new_v4().to_string(),
            calories,
            recorded_at,
        };
        self.calories.write().unwrap().push(entry.clone());
        Ok(entry)
    }

    async fn progress(&self, period_days: u32) -> Result<ProgressInsights, ProfileServiceError> {
        let mut weights = self.weights.read().unwrap().clone();
        weights.sort_by(|a, b| a.recorded_at.cmp(&b.recorded_at));

        let mut calories = self.calories.read().unwrap().clone();
        calories.sort_by(|a, b| a.recorded_at.cmp(&b.recorded_at));

        Ok(calculate_progress(&weights, &calories, period_days)?)
    }
}

/// Factory function to create a mock profile service
pub fn create_mock_profile_service() -> impl ProfileServiceTrait {
    MockProfileService::new()
}
