use serde::{Deserialize, Serialize};

/// Meal slot within a daily recommendation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealSlot {
    /// All slots in presentation order
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snacks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snacks => "snacks",
        }
    }
}

/// Recommended dishes for one day, grouped by meal slot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealPlan {
    /// Breakfast dishes, in presentation order
    pub breakfast: Vec<String>,

    /// Lunch dishes, in presentation order
    pub lunch: Vec<String>,

    /// Dinner dishes, in presentation order
    pub dinner: Vec<String>,

    /// Snack dishes, in presentation order
    pub snacks: Vec<String>,
}

impl MealPlan {
    /// Dishes recommended for the given slot
    pub fn dishes(&self, slot: MealSlot) -> &[String] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
            MealSlot::Snacks => &self.snacks,
        }
    }

    /// Iterate slots with their dishes, in presentation order
    pub fn iter(&self) -> impl Iterator<Item = (MealSlot, &[String])> {
        MealSlot::ALL.into_iter().map(move |slot| (slot, self.dishes(slot)))
    }
}
