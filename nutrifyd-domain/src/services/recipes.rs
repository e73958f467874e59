use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::entities::recipe::{NutritionFacts, RecipeCard};

/// Generic preparation guidance returned for dishes without a catalog entry
pub const FALLBACK_RECIPE: &str = "Cook with fresh ingredients, minimal processing, and balanced nutrition. Focus on whole foods and proper portions.";

static QUICK_RECIPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            "Oatmeal with fruits",
            "Cook 1/2 cup oats with 1 cup milk. Top with sliced bananas, berries, and a drizzle of honey. Add chopped nuts for extra nutrition.",
        ),
        (
            "Greek yogurt with nuts",
            "Mix 1 cup Greek yogurt with 1 tbsp honey. Top with mixed nuts (almonds, walnuts), seeds, and fresh berries.",
        ),
        (
            "Whole grain toast with avocado",
            "Toast 2 slices whole grain bread. Mash 1 avocado with lime juice, salt, pepper. Spread on toast, add tomato slices.",
        ),
        (
            "Scrambled eggs with vegetables",
            "Beat 2-3 eggs, cook in pan with diced bell peppers, onions, spinach. Season with herbs and serve with whole grain toast.",
        ),
        (
            "Quinoa salad with vegetables",
            "Cook 1 cup quinoa. Mix with diced cucumber, tomatoes, bell peppers, red onion. Dress with lemon juice and olive oil.",
        ),
        (
            "Lentil soup with bread",
            "Simmer 1 cup lentils with diced vegetables, vegetable broth, and spices until tender. Serve with whole grain bread.",
        ),
        (
            "Grilled chicken salad",
            "Grill seasoned chicken breast. Serve over mixed greens with cherry tomatoes, cucumber, and light vinaigrette dressing.",
        ),
        (
            "Fish with steamed vegetables",
            "Season fish fillet, bake at 400°F for 15 mins. Steam broccoli, carrots, and green beans. Serve with lemon.",
        ),
        (
            "Vegetable curry with brown rice",
            "Sauté onions, add curry spices, coconut milk, mixed vegetables. Simmer until tender. Serve over cooked brown rice.",
        ),
        (
            "Baked salmon with sweet potato",
            "Season salmon, bake with cubed sweet potatoes at 425°F for 20 mins. Add roasted vegetables on the side.",
        ),
        (
            "Mixed nuts",
            "Portion 1/4 cup mixed almonds, walnuts, cashews. Lightly roasted for better flavor and crunch.",
        ),
        (
            "Fresh fruits",
            "Choose seasonal fruits like apples, berries, oranges. Wash and cut into bite-sized pieces for easy snacking.",
        ),
        (
            "Vegetable sticks with hummus",
            "Cut carrots, celery, bell peppers into sticks. Serve with 2-3 tbsp homemade or store-bought hummus.",
        ),
    ])
});

static RECIPE_CARDS: Lazy<HashMap<&'static str, RecipeCard>> = Lazy::new(|| {
    HashMap::from([
        (
            "Oatmeal with fruits",
            RecipeCard {
                name: "Healthy Fruit Oatmeal".to_string(),
                ingredients: to_lines(&[
                    "1 cup rolled oats",
                    "2 cups water or milk",
                    "1 banana, sliced",
                    "1/2 cup mixed berries",
                    "2 tbsp honey",
                    "1/4 cup chopped nuts",
                    "1 tsp cinnamon",
                ]),
                instructions: to_lines(&[
                    "Bring water/milk to boil in a saucepan",
                    "Add oats and reduce heat to medium-low",
                    "Cook for 5-7 minutes, stirring occasionally",
                    "Remove from heat and let stand for 2 minutes",
                    "Top with banana slices, berries, and nuts",
                    "Drizzle with honey and sprinkle cinnamon",
                    "Serve warm",
                ]),
                cook_time: "10 mins".to_string(),
                servings: 2,
                difficulty: "Easy".to_string(),
                video_url: "https://www.youtube.com/watch?v=PjZ8Gl6bFHY".to_string(),
                nutrition: NutritionFacts {
                    calories: 320,
                    protein: "12g".to_string(),
                    carbs: "58g".to_string(),
                    fat: "8g".to_string(),
                },
            },
        ),
        (
            "Greek yogurt with nuts",
            RecipeCard {
                name: "Protein-Rich Greek Yogurt Bowl".to_string(),
                ingredients: to_lines(&[
                    "1 cup Greek yogurt",
                    "1/4 cup mixed nuts",
                    "2 tbsp granola",
                    "1 tbsp chia seeds",
                    "1/2 cup fresh berries",
                    "1 tbsp honey",
                    "1 tsp vanilla extract",
                ]),
                instructions: to_lines(&[
                    "Place Greek yogurt in a bowl",
                    "Add vanilla extract and mix well",
                    "Top with fresh berries",
                    "Sprinkle nuts, granola, and chia seeds",
                    "Drizzle with honey",
                    "Serve immediately",
                ]),
                cook_time: "5 mins".to_string(),
                servings: 1,
                difficulty: "Very Easy".to_string(),
                video_url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
                nutrition: NutritionFacts {
                    calories: 280,
                    protein: "20g".to_string(),
                    carbs: "25g".to_string(),
                    fat: "12g".to_string(),
                },
            },
        ),
        (
            "Quinoa salad with vegetables",
            RecipeCard {
                name: "Mediterranean Quinoa Salad".to_string(),
                ingredients: to_lines(&[
                    "1 cup quinoa",
                    "2 cups vegetable broth",
                    "1 cucumber, diced",
                    "2 tomatoes, chopped",
                    "1/2 red onion, minced",
                    "1/4 cup olive oil",
                    "2 tbsp lemon juice",
                    "1/4 cup fresh parsley",
                    "Salt and pepper to taste",
                ]),
                instructions: to_lines(&[
                    "Rinse quinoa under cold water",
                    "Bring vegetable broth to boil",
                    "Add quinoa, reduce heat, and simmer for 15 minutes",
                    "Let quinoa cool completely",
                    "Mix in cucumber, tomatoes, and onion",
                    "Whisk olive oil, lemon juice, salt, and pepper",
                    "Toss salad with dressing",
                    "Garnish with fresh parsley",
                ]),
                cook_time: "25 mins".to_string(),
                servings: 4,
                difficulty: "Easy".to_string(),
                video_url: "https://www.youtube.com/watch?v=YQHsXMglC9A".to_string(),
                nutrition: NutritionFacts {
                    calories: 220,
                    protein: "8g".to_string(),
                    carbs: "35g".to_string(),
                    fat: "7g".to_string(),
                },
            },
        ),
    ])
});

/// Look up the quick preparation text for a dish.
///
/// Matching is exact and case-sensitive. Unknown dishes resolve to generic
/// guidance rather than an error, so this is total over all inputs.
pub fn lookup_recipe(dish_name: &str) -> String {
    QUICK_RECIPES
        .get(dish_name)
        .copied()
        .unwrap_or(FALLBACK_RECIPE)
        .to_string()
}

/// Build the full recipe card for a dish.
///
/// Dishes with a curated card get it verbatim; everything else gets a
/// generic card named after the dish, with the quick preparation text as its
/// single instruction and a video search link.
pub fn recipe_card(dish_name: &str) -> RecipeCard {
    if let Some(card) = RECIPE_CARDS.get(dish_name) {
        return card.clone();
    }

    RecipeCard {
        name: dish_name.to_string(),
        ingredients: Vec::new(),
        instructions: vec![lookup_recipe(dish_name)],
        cook_time: "15 mins".to_string(),
        servings: 2,
        difficulty: "Medium".to_string(),
        video_url: video_search_url(dish_name),
        nutrition: NutritionFacts {
            calories: 250,
            protein: "15g".to_string(),
            carbs: "30g".to_string(),
            fat: "8g".to_string(),
        },
    }
}

/// Video search link for a dish without a curated tutorial
fn video_search_url(dish_name: &str) -> String {
    let query: String = format!("{} recipe", dish_name)
        .chars()
        .map(|c| if c == ' ' { '+' } else { c })
        .collect();
    format!("https://www.youtube.com/results?search_query={}", query)
}

fn to_lines(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}
