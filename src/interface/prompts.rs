use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{PlanError, Result};
use crate::models::OMNI_DIET;
use crate::planner::constants::{DEFAULT_DAYS, DEFAULT_MEALS_PER_DAY, DEFAULT_TARGET_CALORIES};

/// Prompt for the daily calorie target.
pub fn prompt_target_calories() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Daily calorie target")
        .default(format!("{}", DEFAULT_TARGET_CALORIES as u32))
        .interact_text()?;

    let target: f64 = input
        .parse()
        .map_err(|_| PlanError::InvalidInput("Invalid number".to_string()))?;

    if !target.is_finite() || target <= 0.0 {
        return Err(PlanError::InvalidInput(
            "Calorie target must be positive".to_string(),
        ));
    }

    Ok(target)
}

/// Prompt for the number of days to plan.
pub fn prompt_days() -> Result<usize> {
    let input: String = Input::new()
        .with_prompt("How many days should the plan cover?")
        .default(DEFAULT_DAYS.to_string())
        .interact_text()?;

    let days: usize = input
        .parse()
        .map_err(|_| PlanError::InvalidInput("Invalid number".to_string()))?;

    if days == 0 {
        return Err(PlanError::InvalidInput(
            "Plan must cover at least 1 day".to_string(),
        ));
    }

    Ok(days)
}

/// Prompt for the number of meals per day.
pub fn prompt_meals_per_day() -> Result<usize> {
    let input: String = Input::new()
        .with_prompt("How many meals per day?")
        .default(DEFAULT_MEALS_PER_DAY.to_string())
        .interact_text()?;

    let meals: usize = input
        .parse()
        .map_err(|_| PlanError::InvalidInput("Invalid number".to_string()))?;

    if meals == 0 {
        return Err(PlanError::InvalidInput(
            "Need at least 1 meal per day".to_string(),
        ));
    }

    Ok(meals)
}

/// Prompt for a diet with fuzzy matching against the known diet tags.
///
/// Pressing Enter (or typing `omni`) selects the unrestricted diet.
pub fn prompt_diet(known_diets: &[String]) -> Result<String> {
    loop {
        let input: String = Input::new()
            .with_prompt("Diet (Enter for omni)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() || input.eq_ignore_ascii_case(OMNI_DIET) {
            return Ok(OMNI_DIET.to_string());
        }

        // Try exact match first (case-insensitive)
        let exact_match = known_diets
            .iter()
            .find(|d| d.to_lowercase() == input.to_lowercase());

        if let Some(diet) = exact_match {
            return Ok(diet.clone());
        }

        // Try fuzzy matching
        let mut candidates: Vec<(&String, f64)> = known_diets
            .iter()
            .map(|d| (d, jaro_winkler(&d.to_lowercase(), &input.to_lowercase())))
            .filter(|(_, score)| *score > 0.7)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        if candidates.is_empty() {
            println!("No matching diet found for '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let diet = candidates[0].0;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", diet))
                .default(true)
                .interact()?;

            if confirm {
                return Ok(diet.clone());
            }
        } else {
            // Multiple matches - let user select
            let options: Vec<String> = candidates
                .iter()
                .take(5)
                .map(|(d, _)| (*d).clone())
                .collect();

            let mut selection_options = options.clone();
            selection_options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&selection_options)
                .default(0)
                .interact()?;

            if selection < options.len() {
                return Ok(options[selection].clone());
            }
        }
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
