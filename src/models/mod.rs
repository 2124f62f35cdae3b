pub mod plan;
pub mod recipe;

pub use plan::{DailyPlan, MealPlan};
pub use recipe::{Recipe, OMNI_DIET};
