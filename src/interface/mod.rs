pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_days, prompt_diet, prompt_meals_per_day, prompt_target_calories, prompt_yes_no,
};
pub use render::{display_meal_plan, display_recipe_list};
