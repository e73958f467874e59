// Repository module structure
pub mod errors;
mod in_memory;
mod profile;
mod storage;

// Re-export commonly used types
pub use errors::RepositoryError;
pub use in_memory::InMemoryStore;
pub use profile::{
    ProfileRepository, ProfileRepositoryTrait, CALORIE_LOG_KEY, PROFILE_KEY, WEIGHT_LOG_KEY,
};
pub use storage::KeyValueStore;

#[cfg(feature = "sqlite")]
pub use storage::SqliteStore;

// Re-export test modules for both testing and when mock feature is enabled
#[cfg(any(test, feature = "mock"))]
pub use profile::tests;
