use serde::{Deserialize, Serialize};

use crate::models::Recipe;

/// One day's worth of selected recipes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPlan {
    pub recipes: Vec<Recipe>,
}

impl DailyPlan {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Realized calorie total for the day, recomputed from the entries.
    pub fn total_calories(&self) -> f64 {
        self.recipes.iter().map(|r| r.calories).sum()
    }
}

/// A finished multi-day plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    /// Diet the pool was filtered by.
    pub diet_type: String,

    /// Realized average intake per day, floored to a whole calorie.
    pub daily_calories: u32,

    pub daily_plans: Vec<DailyPlan>,
}

impl MealPlan {
    /// Number of days the plan covers.
    pub fn days(&self) -> usize {
        self.daily_plans.len()
    }
}
