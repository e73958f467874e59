use crate::entities::meal_plan::MealPlan;
use crate::entities::profile::DietaryPreference;

// Fixed recommendation tables, one dish list per meal slot.
// Selection depends only on the dietary preference; the BMI result is
// reported alongside the plan but does not alter it.

const VEG_BREAKFAST: [&str; 3] = [
    "Oatmeal with fruits",
    "Greek yogurt with nuts",
    "Whole grain toast with avocado",
];
const VEG_LUNCH: [&str; 3] = [
    "Quinoa salad with vegetables",
    "Lentil soup with bread",
    "Vegetable stir-fry with tofu",
];
const VEG_DINNER: [&str; 3] = [
    "Vegetable curry with brown rice",
    "Bean soup with salad",
    "Grilled vegetables with quinoa",
];
const VEG_SNACKS: [&str; 3] = [
    "Mixed nuts",
    "Fresh fruits",
    "Vegetable sticks with hummus",
];

const NON_VEG_BREAKFAST: [&str; 3] = [
    "Scrambled eggs with vegetables",
    "Greek yogurt with berries",
    "Whole grain cereal with milk",
];
const NON_VEG_LUNCH: [&str; 3] = [
    "Grilled chicken salad",
    "Fish with steamed vegetables",
    "Lean beef with brown rice",
];
const NON_VEG_DINNER: [&str; 3] = [
    "Baked salmon with sweet potato",
    "Chicken breast with vegetables",
    "Turkey meatballs with pasta",
];
const NON_VEG_SNACKS: [&str; 3] = [
    "Greek yogurt",
    "Boiled eggs",
    "Protein smoothie",
];

/// Build the recommended meal plan for a dietary preference.
/// Deterministic lookup into the fixed tables; total over both preferences.
pub fn recommend_meal_plan(preference: DietaryPreference) -> MealPlan {
    match preference {
        DietaryPreference::Vegetarian => MealPlan {
            breakfast: to_dishes(&VEG_BREAKFAST),
            lunch: to_dishes(&VEG_LUNCH),
            dinner: to_dishes(&VEG_DINNER),
            snacks: to_dishes(&VEG_SNACKS),
        },
        DietaryPreference::NonVegetarian => MealPlan {
            breakfast: to_dishes(&NON_VEG_BREAKFAST),
            lunch: to_dishes(&NON_VEG_LUNCH),
            dinner: to_dishes(&NON_VEG_DINNER),
            snacks: to_dishes(&NON_VEG_SNACKS),
        },
    }
}

fn to_dishes(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::meal_plan::MealSlot;

    #[test]
    fn test_all_slots_are_populated() {
        for preference in [DietaryPreference::Vegetarian, DietaryPreference::NonVegetarian] {
            let plan = recommend_meal_plan(preference);
            for slot in MealSlot::ALL {
                assert_eq!(
                    plan.dishes(slot).len(),
                    3,
                    "{:?} {} should have 3 dishes",
                    preference,
                    slot.as_str()
                );
            }
        }
    }

    #[test]
    fn test_breakfast_tables_are_disjoint() {
        let veg = recommend_meal_plan(DietaryPreference::Vegetarian);
        let non_veg = recommend_meal_plan(DietaryPreference::NonVegetarian);

        for dish in &veg.breakfast {
            assert!(
                !non_veg.breakfast.contains(dish),
                "{} appears in both breakfast tables",
                dish
            );
        }
    }

    #[test]
    fn test_vegetarian_plan_contents() {
        let plan = recommend_meal_plan(DietaryPreference::Vegetarian);

        assert_eq!(plan.breakfast[0], "Oatmeal with fruits");
        assert_eq!(plan.lunch[0], "Quinoa salad with vegetables");
        assert_eq!(plan.dinner[0], "Vegetable curry with brown rice");
        assert_eq!(plan.snacks[2], "Vegetable sticks with hummus");
    }

    #[test]
    fn test_non_vegetarian_plan_contents() {
        let plan = recommend_meal_plan(DietaryPreference::NonVegetarian);

        assert_eq!(plan.breakfast[0], "Scrambled eggs with vegetables");
        assert_eq!(plan.dinner[0], "Baked salmon with sweet potato");
    }

    #[test]
    fn test_recommendation_is_idempotent() {
        let first = recommend_meal_plan(DietaryPreference::Vegetarian);
        let second = recommend_meal_plan(DietaryPreference::Vegetarian);
        assert_eq!(first, second);
    }
}
