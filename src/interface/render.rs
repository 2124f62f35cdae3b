use crate::models::{MealPlan, Recipe};
use crate::planner::constants::{max_diff, within_tolerance};

/// Display a finished meal plan, day by day.
pub fn display_meal_plan(plan: &MealPlan, target_calories: f64) {
    if plan.daily_plans.is_empty() {
        println!("No meal plan generated (empty plan).");
        return;
    }

    println!();
    println!(
        "=== Meal Plan ({}, {} days) ===",
        plan.diet_type,
        plan.days()
    );

    // Find max title length for alignment
    let max_title_len = plan
        .daily_plans
        .iter()
        .flat_map(|d| d.recipes.iter())
        .map(|r| r.title.len())
        .max()
        .unwrap_or(10);

    for (i, day) in plan.daily_plans.iter().enumerate() {
        let total = day.total_calories();
        let tag = if within_tolerance(total, target_calories) {
            String::new()
        } else {
            let delta = total - target_calories;
            let sign = if delta > 0.0 { "+" } else { "" };
            format!("  [off target {}{:.0} cal]", sign, delta)
        };

        println!();
        println!("Day {} - {:.0} cal{}", i + 1, total, tag);
        for (j, recipe) in day.recipes.iter().enumerate() {
            println!(
                "{:>3}. {:<width$} - {:>5.0} cal",
                j + 1,
                recipe.title,
                recipe.calories,
                width = max_title_len
            );
        }
    }

    let within = plan
        .daily_plans
        .iter()
        .filter(|d| within_tolerance(d.total_calories(), target_calories))
        .count();

    println!();
    println!("--- Summary ---");
    println!("Days planned: {}", plan.days());
    println!("Daily average: {} cal", plan.daily_calories);
    println!(
        "Target: {:.0} cal (tolerance ±{:.0})",
        target_calories,
        max_diff(target_calories)
    );
    println!("Days within tolerance: {} of {}", within, plan.days());
    println!();
}

/// Display a simple list of recipes with their details.
pub fn display_recipe_list(recipes: &[Recipe], title: &str) {
    if recipes.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({}) ===", title, recipes.len());
    println!();

    for recipe in recipes {
        let tags = if recipe.diets.is_empty() {
            String::new()
        } else {
            format!("  [{}]", recipe.diets.join(", "))
        };
        println!("  {} - {:.0} cal{}", recipe.title, recipe.calories, tags);
    }

    println!();
}
