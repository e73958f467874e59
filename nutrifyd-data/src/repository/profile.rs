use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::models::profile::{
    CalorieEntry, CreateProfileRequest, NewCalorieEntry, NewWeightEntry, UserProfile, WeightEntry,
};

use super::errors::RepositoryError;
use super::in_memory::InMemoryStore;
use super::storage::KeyValueStore;

/// Storage key for the active user profile
pub const PROFILE_KEY: &str = "nutrifyd.user";

/// Storage key for the weight journal
pub const WEIGHT_LOG_KEY: &str = "nutrifyd.weight_log";

/// Storage key for the calorie journal
pub const CALORIE_LOG_KEY: &str = "nutrifyd.calorie_log";

/// Repository trait for the user profile and its tracking journals
#[async_trait]
pub trait ProfileRepositoryTrait {
    /// Persist a new profile from a request, replacing any existing profile
    async fn create(&self, request: CreateProfileRequest) -> Result<UserProfile, RepositoryError>;

    /// Get the stored profile, if one exists
    async fn get_profile(&self) -> Result<Option<UserProfile>, RepositoryError>;

    /// Remove the stored profile. Returns true if a profile existed.
    async fn delete_profile(&self) -> Result<bool, RepositoryError>;

    /// Append a weight measurement to the journal
    async fn append_weight(&self, entry: NewWeightEntry) -> Result<WeightEntry, RepositoryError>;

    /// Get weight entries recorded at or after `since`, oldest first
    async fn weight_history(&self, since: Option<String>) -> Result<Vec<WeightEntry>, RepositoryError>;

    /// Append a daily calorie total to the journal
    async fn append_calories(&self, entry: NewCalorieEntry) -> Result<CalorieEntry, RepositoryError>;

    /// Get calorie entries recorded at or after `since`, oldest first
    async fn calorie_history(&self, since: Option<String>) -> Result<Vec<CalorieEntry>, RepositoryError>;
}

/// Repository for the user profile and tracking journals.
/// Values are stored as JSON strings under fixed keys in an injected
/// key-value store, so the backend can be swapped without touching callers.
#[derive(Debug, Clone, Default)]
pub struct ProfileRepository<S: KeyValueStore = InMemoryStore> {
    store: S,
}

impl ProfileRepository<InMemoryStore> {
    /// Create a repository backed by in-memory storage
    pub fn new() -> Self {
        Self {
            store: InMemoryStore::new(),
        }
    }
}

impl<S: KeyValueStore> ProfileRepository<S> {
    /// Create a repository over the given key-value store
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    async fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, RepositoryError> {
        match self.store.get(key).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    async fn write_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), RepositoryError> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, &raw).await
    }
}

#[async_trait]
impl<S: KeyValueStore> ProfileRepositoryTrait for ProfileRepository<S> {
    /// Persist a new profile from a request, replacing any existing profile
    async fn create(&self, request: CreateProfileRequest) -> Result<UserProfile, RepositoryError> {
        // Generate a unique ID
        let id = Uuid::new_v4();

        let profile = UserProfile {
            id: id.to_string(),
            name: request.name,
            age: request.age,
            gender: request.gender,
            weight_kg: request.weight_kg,
            height_cm: request.height_cm,
            preference: request.preference,
            conditions: request.conditions,
            joined_at: request.joined_at,
            bmi: request.bmi,
            bmi_category: request.bmi_category,
        };

        debug!("Storing user profile: id={}", profile.id);
        self.write_json(PROFILE_KEY, &profile).await?;

        Ok(profile)
    }

    /// Get the stored profile, if one exists
    async fn get_profile(&self) -> Result<Option<UserProfile>, RepositoryError> {
        self.read_json(PROFILE_KEY).await
    }

    /// Remove the stored profile. Returns true if a profile existed.
    async fn delete_profile(&self) -> Result<bool, RepositoryError> {
        debug!("Removing stored user profile");
        self.store.remove(PROFILE_KEY).await
    }

    /// Append a weight measurement to the journal
    async fn append_weight(&self, entry: NewWeightEntry) -> Result<WeightEntry, RepositoryError> {
        let entry = WeightEntry {
            id: Uuid::new_v4().to_string(),
            weight_kg: entry.weight_kg,
            recorded_at: entry.recorded_at,
        };

        let mut journal: Vec<WeightEntry> =
            self.read_json(WEIGHT_LOG_KEY).await?.unwrap_or_default();
        journal.push(entry.clone());
        self.write_json(WEIGHT_LOG_KEY, &journal).await?;

        debug!("Appended weight entry: id={}", entry.id);
        Ok(entry)
    }

    /// Get weight entries recorded at or after `since`, oldest first
    async fn weight_history(&self, since: Option<String>) -> Result<Vec<WeightEntry>, RepositoryError> {
        let mut journal: Vec<WeightEntry> =
            self.read_json(WEIGHT_LOG_KEY).await?.unwrap_or_default();

        if let Some(since) = since {
            journal.retain(|entry| entry.recorded_at.as_str() >= since.as_str());
        }

        // RFC 3339 timestamps sort lexicographically
        journal.sort_by(|a, b| a.recorded_at.cmp(&b.recorded_at));

        Ok(journal)
    }

    /// Append a daily calorie total to the journal
    async fn append_calories(&self, entry: NewCalorieEntry) -> Result<CalorieEntry, RepositoryError> {
        let entry = CalorieEntry {
            id: Uuid::new_v4().to_string(),
            calories: entry.calories,
            recorded_at: entry.recorded_at,
        };

        let mut journal: Vec<CalorieEntry> =
            self.read_json(CALORIE_LOG_KEY).await?.unwrap_or_default();
        journal.push(entry.clone());
        self.write_json(CALORIE_LOG_KEY, &journal).await?;

        debug!("Appended calorie entry: id={}", entry.id);
        Ok(entry)
    }

    /// Get calorie entries recorded at or after `since`, oldest first
    async fn calorie_history(&self, since: Option<String>) -> Result<Vec<CalorieEntry>, RepositoryError> {
        let mut journal: Vec<CalorieEntry> =
            self.read_json(CALORIE_LOG_KEY).await?.unwrap_or_default();

        if let Some(since) = since {
            journal.retain(|entry| entry.recorded_at.as_str() >= since.as_str());
        }

        journal.sort_by(|a, b| a.recorded_at.cmp(&b.recorded_at));

        Ok(journal)
    }
}

/// Mock profile repository for testing
#[cfg(any(test, feature = "mock"))]
pub mod tests {
    use std::sync::RwLock;

    use super::*;

    /// Mock implementation of ProfileRepositoryTrait for testing
    #[derive(Default)]
    pub struct MockProfileRepository {
        profile: RwLock<Option<UserProfile>>,
        weights: RwLock<Vec<WeightEntry>>,
        calories: RwLock<Vec<CalorieEntry>>,
    }

    impl MockProfileRepository {
        /// Create a new empty mock repository
        pub fn new() -> Self {
            Self::default()
        }

        /// Create a mock repository with a stored profile
        pub fn with_profile(profile: UserProfile) -> Self {
            let mock = Self::new();
            *mock.profile.write().unwrap() = Some(profile);
            mock
        }

        /// Create a mock repository with predefined weight entries
        pub fn with_weight_entries(entries: Vec<WeightEntry>) -> Self {
            let mock = Self::new();
            *mock.weights.write().unwrap() = entries;
            mock
        }
    }

    #[async_trait]
    impl ProfileRepositoryTrait for MockProfileRepository {
        async fn create(&self, request: CreateProfileRequest) -> Result<UserProfile, RepositoryError> {
            let profile = UserProfile {
                id: Uuid::new_v4().to_string(),
                name: request.name,
                age: request.age,
                gender: request.gender,
                weight_kg: request.weight_kg,
                height_cm: request.height_cm,
                preference: request.preference,
                conditions: request.conditions,
                joined_at: request.joined_at,
                bmi: request.bmi,
                bmi_category: request.bmi_category,
            };

            *self.profile.write().unwrap() = Some(profile.clone());
            Ok(profile)
        }

        async fn get_profile(&self) -> Result<Option<UserProfile>, RepositoryError> {
            Ok(self.profile.read().unwrap().clone())
        }

        async fn delete_profile(&self) -> Result<bool, RepositoryError> {
            Ok(self.profile.write().unwrap().take().is_some())
        }

        async fn append_weight(&self, entry: NewWeightEntry) -> Result<WeightEntry, RepositoryError> {
            let entry = WeightEntry {
                id: Uuid::new_v4().to_string(),
                weight_kg: entry.weight_kg,
                recorded_at: entry.recorded_at,
            };
            self.weights.write().unwrap().push(entry.clone());
            Ok(entry)
        }

        async fn weight_history(&self, since: Option<String>) -> Result<Vec<WeightEntry>, RepositoryError> {
            let mut entries = self.weights.read().unwrap().clone();
            if let Some(since) = since {
                entries.retain(|entry| entry.recorded_at.as_str() >= since.as_str());
            }
            entries.sort_by(|a, b| a.recorded_at.cmp(&b.recorded_at));
            Ok(entries)
        }

        async fn append_calories(&self, entry: NewCalorieEntry) -> Result<CalorieEntry, RepositoryError> {
            let entry = CalorieEntry {
                id: Uuid::new_v4().to_string(),
                calories: entry.calories,
                recorded_at: entry.recorded_at,
            };
            self.calories.write().unwrap().push(entry.clone());
            Ok(entry)
        }

        async fn calorie_history(&self, since: Option<String>) -> Result<Vec<CalorieEntry>, RepositoryError> {
            let mut entries = self.calories.read().unwrap().clone();
            if let Some(since) = since {
                entries.retain(|entry| entry.recorded_at.as_str() >= since.as_str());
            }
            entries.sort_by(|a, b| a.recorded_at.cmp(&b.recorded_at));
            Ok(entries)
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    fn sample_request() -> CreateProfileRequest {
        CreateProfileRequest {
            name: "Test User".to_string(),
            age: 30,
            gender: Some("female".to_string()),
            weight_kg: 70.0,
            height_cm: 175.0,
            preference: "veg".to_string(),
            conditions: vec![],
            joined_at: "2024-03-01T10:00:00Z".to_string(),
            bmi: 22.9,
            bmi_category: "Normal".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_profile() {
        let repository = ProfileRepository::new();

        let created = repository.create(sample_request()).await.unwrap();
        let fetched = repository.get_profile().await.unwrap().unwrap();

        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.name, "Test User");
        assert_eq!(fetched.bmi, 22.9);
    }

    #[tokio::test]
    async fn test_create_replaces_existing_profile() {
        let repository = ProfileRepository::new();

        repository.create(sample_request()).await.unwrap();
        let mut second = sample_request();
        second.name = "Second User".to_string();
        repository.create(second).await.unwrap();

        let fetched = repository.get_profile().await.unwrap().unwrap();
        assert_eq!(fetched.name, "Second User");
    }

    #[tokio::test]
    async fn test_delete_profile() {
        let repository = ProfileRepository::new();

        assert!(!repository.delete_profile().await.unwrap());

        repository.create(sample_request()).await.unwrap();
        assert!(repository.delete_profile().await.unwrap());
        assert!(repository.get_profile().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_weight_history_is_sorted_oldest_first() {
        let repository = ProfileRepository::new();

        repository
            .append_weight(NewWeightEntry {
                weight_kg: 77.5,
                recorded_at: "2024-01-08T08:00:00Z".to_string(),
            })
            .await
            .unwrap();
        repository
            .append_weight(NewWeightEntry {
                weight_kg: 78.0,
                recorded_at: "2024-01-01T08:00:00Z".to_string(),
            })
            .await
            .unwrap();

        let history = repository.weight_history(None).await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].weight_kg, 78.0);
        assert_eq!(history[1].weight_kg, 77.5);
    }

    #[tokio::test]
    async fn test_weight_history_since_filter() {
        let repository = ProfileRepository::new();

        for (weight, day) in [(78.0, "01"), (77.5, "08"), (76.8, "15")] {
            repository
                .append_weight(NewWeightEntry {
                    weight_kg: weight,
                    recorded_at: format!("2024-01-{}T08:00:00Z", day),
                })
                .await
                .unwrap();
        }

        let history = repository
            .weight_history(Some("2024-01-08T00:00:00Z".to_string()))
            .await
            .unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].weight_kg, 77.5);
    }

    #[tokio::test]
    async fn test_calorie_journal_roundtrip() {
        let repository = ProfileRepository::new();

        repository
            .append_calories(NewCalorieEntry {
                calories: 2100,
                recorded_at: "2024-01-01T20:00:00Z".to_string(),
            })
            .await
            .unwrap();

        let history = repository.calorie_history(None).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].calories, 2100);
    }
}
