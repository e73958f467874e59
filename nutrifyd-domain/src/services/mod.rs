pub mod conditions;
pub mod experts;
pub mod meal_plan;
pub mod metrics;
pub mod profile;
pub mod recipes;
pub mod tracking;

// Domain services
// This module contains business logic implementations.

// Re-export service traits and factory functions
pub use meal_plan::recommend_meal_plan;
pub use metrics::{categorize_bmi, compute_bmi};
pub use profile::{create_default_profile_service, ProfileService, ProfileServiceTrait};
pub use recipes::{lookup_recipe, recipe_card};
pub use tracking::calculate_progress;

// Re-export mock service factory functions when the mock feature is enabled
#[cfg(feature = "mock")]
pub use profile::create_mock_profile_service;
