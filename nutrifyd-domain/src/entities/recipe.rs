use serde::{Deserialize, Serialize};

/// Nutrition facts for one serving of a dish
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NutritionFacts {
    /// Calories per serving
    pub calories: u32,

    /// Protein per serving, with unit (e.g. "12g")
    pub protein: String,

    /// Carbohydrates per serving, with unit
    pub carbs: String,

    /// Fat per serving, with unit
    pub fat: String,
}

/// A full recipe card for a dish
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeCard {
    /// Recipe title
    pub name: String,

    /// Ingredient list, in the order used
    pub ingredients: Vec<String>,

    /// Preparation steps, in order
    pub instructions: Vec<String>,

    /// Approximate total preparation time (e.g. "10 mins")
    pub cook_time: String,

    /// Number of servings the recipe yields
    pub servings: u32,

    /// Difficulty label (e.g. "Easy")
    pub difficulty: String,

    /// Video tutorial link
    pub video_url: String,

    /// Nutrition facts per serving
    pub nutrition: NutritionFacts,
}
