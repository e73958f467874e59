use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;
use tracing::info;
use validator::Validate;

use crate::entities::conversions;
use crate::entities::meal_plan::MealPlan;
use crate::entities::profile::{CreateProfileRequest, UserProfile};
use crate::entities::tracking::{CalorieEntry, ProgressInsights, WeightEntry};
use crate::services::meal_plan::recommend_meal_plan;
use crate::services::metrics::{compute_bmi, MetricsError};
use crate::services::tracking::{calculate_progress, TrackingError};
use crate::entities::metrics::Measurement;
use nutrifyd_data::models::profile::{NewCalorieEntry, NewWeightEntry};
use nutrifyd_data::repository::{ProfileRepositoryTrait, RepositoryError};

/// Profile service errors
#[derive(Debug, Error)]
pub enum ProfileServiceError {
    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Invalid body measurement
    #[error("Invalid measurement: {0}")]
    InvalidMeasurement(String),

    /// No profile is stored
    #[error("Profile not found: {0}")]
    NotFound(String),

    /// Repository error
    #[error("Repository error: {0}")]
    RepositoryError(String),

    /// Insufficient data error
    #[error("Insufficient data: {0}")]
    InsufficientData(String),
}

impl From<MetricsError> for ProfileServiceError {
    fn from(err: MetricsError) -> Self {
        match err {
            MetricsError::InvalidMeasurement(msg) => ProfileServiceError::InvalidMeasurement(msg),
        }
    }
}

impl From<TrackingError> for ProfileServiceError {
    fn from(err: TrackingError) -> Self {
        match err {
            TrackingError::InsufficientData(msg) => ProfileServiceError::InsufficientData(msg),
        }
    }
}

/// Trait for profile service operations
#[async_trait]
pub trait ProfileServiceTrait {
    /// Validate a profile registration request
    fn validate_create_request(
        &self,
        request: &CreateProfileRequest,
    ) -> Result<(), ProfileServiceError>;

    /// Register a new profile, computing and storing its BMI result
    async fn register(&self, request: CreateProfileRequest)
        -> Result<UserProfile, ProfileServiceError>;

    /// Get the stored profile
    async fn current_profile(&self) -> Result<UserProfile, ProfileServiceError>;

    /// Remove the stored profile. Returns true if a profile existed.
    async fn sign_out(&self) -> Result<bool, ProfileServiceError>;

    /// Build the meal plan for the stored profile's dietary preference
    async fn meal_plan(&self) -> Result<MealPlan, ProfileServiceError>;

    /// Append a weight measurement to the tracking journal
    async fn record_weight(
        &self,
        weight_kg: f64,
        recorded_at: String,
    ) -> Result<WeightEntry, ProfileServiceError>;

    /// Append a daily calorie total to the tracking journal
    async fn record_calories(
        &self,
        calories: u32,
        recorded_at: String,
    ) -> Result<CalorieEntry, ProfileServiceError>;

    /// Compute progress metrics over the trailing period
    async fn progress(&self, period_days: u32) -> Result<ProgressInsights, ProfileServiceError>;
}

/// Profile service for domain logic
pub struct ProfileService<R: ProfileRepositoryTrait> {
    repository: R,
}

impl<R: ProfileRepositoryTrait> ProfileService<R> {
    /// Create a new profile service
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Map repository errors to service errors
    fn map_repo_error(&self, err: RepositoryError) -> ProfileServiceError {
        match err {
            RepositoryError::NotFound(msg) => ProfileServiceError::NotFound(msg),
            RepositoryError::Validation(msg) => ProfileServiceError::ValidationError(msg),
            _ => ProfileServiceError::RepositoryError(err.to_string()),
        }
    }
}

#[async_trait]
impl<R: ProfileRepositoryTrait + Send + Sync> ProfileServiceTrait for ProfileService<R> {
    /// Validate a profile registration request
    fn validate_create_request(
        &self,
        request: &CreateProfileRequest,
    ) -> Result<(), ProfileServiceError> {
        if let Err(validation_errors) = request.validate() {
            let error_message = validation_errors
                .field_errors()
                .iter()
                .map(|(field, errors)| {
                    let error_msgs: Vec<String> = errors
                        .iter()
                        .map(|err| {
                            if let Some(msg) = &err.message {
                                msg.to_string()
                            } else {
                                format!("Invalid {}", field)
                            }
                        })
                        .collect();
                    format!("{}: {}", field, error_msgs.join(", "))
                })
                .collect::<Vec<String>>()
                .join("; ");

            return Err(ProfileServiceError::ValidationError(error_message));
        }

        Ok(())
    }

    /// Register a new profile, computing and storing its BMI result
    async fn register(
        &self,
        request: CreateProfileRequest,
    ) -> Result<UserProfile, ProfileServiceError> {
        // Validate the request
        self.validate_create_request(&request)?;

        // Compute the BMI result before anything is persisted; invalid
        // measurements are rejected, never defaulted
        let bmi = compute_bmi(&Measurement {
            weight_kg: request.weight_kg,
            height_cm: request.height_cm,
        })?;

        let joined_at = Utc::now().to_rfc3339();
        let data_request = conversions::convert_to_data_create_request(&request, &bmi, joined_at);

        let data_profile = self
            .repository
            .create(data_request)
            .await
            .map_err(|e| self.map_repo_error(e))?;

        let profile = conversions::convert_to_domain_profile(data_profile)
            .map_err(|e| ProfileServiceError::RepositoryError(e.to_string()))?;

        info!("Registered profile: id={}", profile.id);
        Ok(profile)
    }

    /// Get the stored profile
    async fn current_profile(&self) -> Result<UserProfile, ProfileServiceError> {
        let data_profile = self
            .repository
            .get_profile()
            .await
            .map_err(|e| self.map_repo_error(e))?
            .ok_or_else(|| {
                ProfileServiceError::NotFound("No profile has been registered".to_string())
            })?;

        conversions::convert_to_domain_profile(data_profile)
            .map_err(|e| ProfileServiceError::RepositoryError(e.to_string()))
    }

    /// Remove the stored profile. Returns true if a profile existed.
    async fn sign_out(&self) -> Result<bool, ProfileServiceError> {
        self.repository
            .delete_profile()
            .await
            .map_err(|e| self.map_repo_error(e))
    }

    /// Build the meal plan for the stored profile's dietary preference
    async fn meal_plan(&self) -> Result<MealPlan, ProfileServiceError> {
        let profile = self.current_profile().await?;
        Ok(recommend_meal_plan(profile.preference))
    }

    /// Append a weight measurement to the tracking journal
    async fn record_weight(
        &self,
        weight_kg: f64,
        recorded_at: String,
    ) -> Result<WeightEntry, ProfileServiceError> {
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(ProfileServiceError::InvalidMeasurement(format!(
                "weight must be a positive number of kilograms, got {}",
                weight_kg
            )));
        }

        let data_entry = self
            .repository
            .append_weight(NewWeightEntry {
                weight_kg,
                recorded_at,
            })
            .await
            .map_err(|e| self.map_repo_error(e))?;

        Ok(conversions::convert_to_domain_weight_entry(data_entry))
    }

    /// Append a daily calorie total to the tracking journal
    async fn record_calories(
        &self,
        calories: u32,
        recorded_at: String,
    ) -> Result<CalorieEntry, ProfileServiceError> {
        let data_entry = self
            .repository
            .append_calories(NewCalorieEntry {
                calories,
                recorded_at,
            })
            .await
            .map_err(|e| self.map_repo_error(e))?;

        Ok(conversions::convert_to_domain_calorie_entry(data_entry))
    }

    /// Compute progress metrics over the trailing period
    async fn progress(&self, period_days: u32) -> Result<ProgressInsights, ProfileServiceError> {
        let since = Utc::now()
            .checked_sub_signed(chrono::Duration::days(period_days as i64))
            .map(|dt| dt.to_rfc3339());

        let weights = self
            .repository
            .weight_history(since.clone())
            .await
            .map_err(|e| self.map_repo_error(e))?
            .into_iter()
            .map(conversions::convert_to_domain_weight_entry)
            .collect::<Vec<_>>();

        let calories = self
            .repository
            .calorie_history(since)
            .await
            .map_err(|e| self.map_repo_error(e))?
            .into_iter()
            .map(conversions::convert_to_domain_calorie_entry)
            .collect::<Vec<_>>();

        Ok(calculate_progress(&weights, &calories, period_days)?)
    }
}

/// Create a default profile service using the repository from the data layer
pub fn create_default_profile_service() -> impl ProfileServiceTrait + Send + Sync {
    let repository = nutrifyd_data::repository::ProfileRepository::new();
    ProfileService::new(repository)
}

/// Create a mock profile service for testing
/// This function is only available when the mock feature is enabled
#[cfg(feature = "mock")]
pub fn create_mock_profile_service() -> impl ProfileServiceTrait + Send {
    crate::testing::MockProfileService::new()
}
