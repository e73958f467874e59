use nutrifyd_domain::entities::metrics::BmiCategory;
use nutrifyd_domain::entities::profile::{CreateProfileRequest, DietaryPreference};
use nutrifyd_domain::repository::{InMemoryStore, KeyValueStore, ProfileRepository, SqliteStore};
use nutrifyd_domain::services::profile::{ProfileService, ProfileServiceError, ProfileServiceTrait};
use nutrifyd_domain::services::recipes::{lookup_recipe, FALLBACK_RECIPE};

// Initialize tracing once for all tests
static INIT: std::sync::Once = std::sync::Once::new();
fn initialize() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("info")
            .with_test_writer()
            .try_init();
    });
}

fn registration() -> CreateProfileRequest {
    CreateProfileRequest {
        name: "Asha Patel".to_string(),
        age: 32,
        gender: Some("female".to_string()),
        weight_kg: 70.0,
        height_cm: 175.0,
        preference: DietaryPreference::Vegetarian,
        conditions: vec!["Anemia".to_string()],
    }
}

#[tokio::test]
async fn test_register_fetch_recommend_flow() {
    initialize();

    let store = InMemoryStore::new();
    let service = ProfileService::new(ProfileRepository::with_store(store.clone()));

    // Register and verify the computed health analysis
    let profile = service.register(registration()).await.unwrap();
    assert_eq!(profile.bmi.bmi, 22.9);
    assert_eq!(profile.bmi.category, BmiCategory::Normal);

    // The combined profile+result lands under the injected store's user key
    let raw = store.get("nutrifyd.user").await.unwrap().unwrap();
    assert!(raw.contains("Asha Patel"));
    assert!(raw.contains("\"veg\""));

    // The plan follows the stored preference, and every dish resolves to
    // preparation text
    let plan = service.meal_plan().await.unwrap();
    assert_eq!(plan.breakfast.len(), 3);
    assert_ne!(lookup_recipe(&plan.breakfast[0]), FALLBACK_RECIPE);

    // Signing out clears the stored profile
    assert!(service.sign_out().await.unwrap());
    assert_eq!(store.get("nutrifyd.user").await.unwrap(), None);
    assert!(matches!(
        service.current_profile().await,
        Err(ProfileServiceError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_tracking_flow_over_sqlite_store() {
    initialize();

    let store = SqliteStore::open_in_memory().unwrap();
    let service = ProfileService::new(ProfileRepository::with_store(store));

    service.register(registration()).await.unwrap();

    let now = chrono::Utc::now();
    for (days_ago, weight) in [(2i64, 71.0), (1, 70.4), (0, 70.0)] {
        let recorded_at = (now - chrono::Duration::days(days_ago)).to_rfc3339();
        service.record_weight(weight, recorded_at).await.unwrap();
    }
    service
        .record_calories(2000, now.to_rfc3339())
        .await
        .unwrap();

    let insights = service.progress(30).await.unwrap();
    assert_eq!(insights.entry_count, 3);
    assert_eq!(insights.start_weight_kg, 71.0);
    assert_eq!(insights.current_weight_kg, 70.0);
    assert!((insights.weight_change_kg - (-1.0)).abs() < 1e-9);
    assert_eq!(insights.current_streak, 3);
    assert_eq!(insights.avg_calories, Some(2000.0));
}

#[tokio::test]
async fn test_registration_validation_failures_surface_as_errors() {
    initialize();

    let service = ProfileService::new(ProfileRepository::new());

    let mut request = registration();
    request.age = 0;

    let result = service.register(request).await;
    assert!(matches!(
        result,
        Err(ProfileServiceError::ValidationError(_))
    ));
}
