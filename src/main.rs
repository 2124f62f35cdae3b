use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

use meal_plan_maker_rs::cli::{Cli, Command};
use meal_plan_maker_rs::error::Result;
use meal_plan_maker_rs::interface::{
    display_meal_plan, display_recipe_list, prompt_days, prompt_diet, prompt_meals_per_day,
    prompt_target_calories, prompt_yes_no,
};
use meal_plan_maker_rs::models::{MealPlan, OMNI_DIET};
use meal_plan_maker_rs::planner::{generate_plan, PlanRequest};
use meal_plan_maker_rs::pool::RecipeCatalog;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan {
            calories,
            days,
            meals,
            diet,
            seed,
            output,
        } => cmd_plan(&cli.file, calories, days, meals, diet, seed, output),
        Command::Recipes { diet } => cmd_recipes(&cli.file, diet.as_deref()),
    }
}

/// Generate a meal plan, prompting for whatever the flags left out.
fn cmd_plan(
    file_path: &str,
    calories: Option<f64>,
    days: Option<usize>,
    meals: Option<usize>,
    diet: Option<String>,
    seed: Option<u64>,
    output: Option<String>,
) -> Result<()> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Recipe catalog not found: {}", file_path);
        eprintln!("Point --file at a .json or .csv recipe catalog.");
        return Ok(());
    }

    let catalog = RecipeCatalog::load(path)?;
    if catalog.is_empty() {
        println!("The catalog has no usable recipes.");
        return Ok(());
    }

    println!("Loaded {} recipes", catalog.len());
    println!();

    let known_diets = catalog.diet_tags();

    let request = PlanRequest {
        target_calories: match calories {
            Some(c) => c,
            None => prompt_target_calories()?,
        },
        days: match days {
            Some(d) => d,
            None => prompt_days()?,
        },
        meals_per_day: match meals {
            Some(m) => m,
            None => prompt_meals_per_day()?,
        },
        diet: match diet {
            Some(d) => d,
            None => prompt_diet(&known_diets)?,
        },
    };

    println!();
    println!(
        "Planning {} days of {} meals around {:.0} cal/day ({})...",
        request.days, request.meals_per_day, request.target_calories, request.diet
    );

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let plan = generate_plan(&catalog, &request, &mut rng)?;

    display_meal_plan(&plan, request.target_calories);

    match output {
        Some(output) => {
            write_plan(&output, &plan)?;
            println!("Plan written to {}", output);
        }
        None => {
            let save = prompt_yes_no("Save this plan to plan.json?", false)?;
            if save {
                write_plan("plan.json", &plan)?;
                println!("Plan written to plan.json");
            }
        }
    }

    Ok(())
}

/// List catalog recipes, optionally narrowed to one diet.
fn cmd_recipes(file_path: &str, diet: Option<&str>) -> Result<()> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Recipe catalog not found: {}", file_path);
        return Ok(());
    }

    let catalog = RecipeCatalog::load(path)?;
    let diet = diet.unwrap_or(OMNI_DIET);
    let recipes = catalog.recipes_for_diet(diet);

    let title = if diet.eq_ignore_ascii_case(OMNI_DIET) {
        "All recipes".to_string()
    } else {
        format!("{} recipes", diet)
    };
    display_recipe_list(&recipes, &title);

    Ok(())
}

fn write_plan(path: &str, plan: &MealPlan) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    std::fs::write(path, json)?;
    Ok(())
}
