use clap::{Parser, Subcommand};

/// MealPlanMaker — A meal planning CLI that builds multi-day plans around a daily calorie target.
#[derive(Parser, Debug)]
#[command(name = "meal_plan_maker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the recipe catalog (.json or .csv).
    #[arg(short, long, default_value = "recipes.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a meal plan from the recipe catalog.
    Plan {
        /// Daily calorie target (prompted for if omitted).
        #[arg(short, long)]
        calories: Option<f64>,

        /// Number of days to plan (prompted for if omitted).
        #[arg(short, long)]
        days: Option<usize>,

        /// Meals per day (prompted for if omitted).
        #[arg(short, long)]
        meals: Option<usize>,

        /// Diet to filter recipes by (prompted for if omitted).
        #[arg(long)]
        diet: Option<String>,

        /// Seed for the random number generator, for reproducible plans.
        #[arg(long)]
        seed: Option<u64>,

        /// Write the finished plan to this JSON file.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List the recipes in the catalog.
    Recipes {
        /// Only show recipes matching this diet.
        #[arg(long)]
        diet: Option<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            calories: None,
            days: None,
            meals: None,
            diet: None,
            seed: None,
            output: None,
        }
    }
}
