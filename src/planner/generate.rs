use rand::Rng;

use crate::error::{PlanError, Result};
use crate::models::MealPlan;
use crate::planner::balance::balance_day;
use crate::planner::constants::{requested_pool_size, MAX_OFFSET};
use crate::planner::shuffle::shuffle;
use crate::pool::{PoolRequest, RecipeSource};

/// Shape of the plan the user asked for.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    pub target_calories: f64,
    pub days: usize,
    pub meals_per_day: usize,
    pub diet: String,
}

/// Generate a multi-day meal plan.
///
/// One oversampled pool is fetched up front at a random page offset; each
/// day then reshuffles the whole pool and balances its own selection toward
/// the calorie target, so days are independent draws from the same pool.
///
/// `daily_calories` on the result is the realized average over all days,
/// floored to a whole calorie. It can sit outside tolerance when the pool
/// had nothing better to offer; callers decide how loudly to say so.
pub fn generate_plan<S, R>(source: &S, request: &PlanRequest, rng: &mut R) -> Result<MealPlan>
where
    S: RecipeSource,
    R: Rng,
{
    validate(request)?;
    let size = requested_pool_size(request.days, request.meals_per_day).ok_or_else(|| {
        PlanError::InvalidInput(format!(
            "a plan of {} days with {} meals per day is too large",
            request.days, request.meals_per_day
        ))
    })?;

    let pool_request = PoolRequest {
        diet: request.diet.clone(),
        size,
        query: String::new(),
        offset: rng.gen_range(0..MAX_OFFSET),
    };
    let mut pool = source.fetch(&pool_request)?;

    let mut total_calories = 0.0;
    let mut daily_plans = Vec::with_capacity(request.days);
    for _ in 0..request.days {
        shuffle(&mut pool, rng);
        let (day, _swaps) = balance_day(&pool, request.meals_per_day, request.target_calories);
        total_calories += day.total_calories();
        daily_plans.push(day);
    }

    Ok(MealPlan {
        diet_type: request.diet.clone(),
        daily_calories: (total_calories / request.days.max(1) as f64).floor() as u32,
        daily_plans,
    })
}

fn validate(request: &PlanRequest) -> Result<()> {
    if !request.target_calories.is_finite() || request.target_calories <= 0.0 {
        return Err(PlanError::InvalidInput(format!(
            "daily calorie target must be a positive number, got {}",
            request.target_calories
        )));
    }
    if request.days == 0 {
        return Err(PlanError::InvalidInput(
            "number of days must be at least 1".to_string(),
        ));
    }
    if request.meals_per_day == 0 {
        return Err(PlanError::InvalidInput(
            "meals per day must be at least 1".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Recipe;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct FixedSource {
        recipes: Vec<Recipe>,
    }

    impl RecipeSource for FixedSource {
        fn fetch(&self, _request: &PoolRequest) -> Result<Vec<Recipe>> {
            Ok(self.recipes.clone())
        }
    }

    struct FailingSource;

    impl RecipeSource for FailingSource {
        fn fetch(&self, _request: &PoolRequest) -> Result<Vec<Recipe>> {
            Err(PlanError::Source("connection refused".to_string()))
        }
    }

    fn recipe(id: u64, calories: f64) -> Recipe {
        Recipe {
            id,
            title: format!("Recipe {}", id),
            calories,
            diets: vec![],
        }
    }

    fn request(target_calories: f64, days: usize, meals_per_day: usize) -> PlanRequest {
        PlanRequest {
            target_calories,
            days,
            meals_per_day,
            diet: "omni".to_string(),
        }
    }

    #[test]
    fn test_rejects_bad_inputs_before_fetching() {
        let mut rng = StdRng::seed_from_u64(0);

        for bad in [
            request(0.0, 7, 3),
            request(-100.0, 7, 3),
            request(f64::NAN, 7, 3),
            request(2000.0, 0, 3),
            request(2000.0, 7, 0),
        ] {
            let err = generate_plan(&FailingSource, &bad, &mut rng).unwrap_err();
            assert!(matches!(err, PlanError::InvalidInput(_)), "{:?}", bad);
        }
    }

    #[test]
    fn test_oversized_plan_shape_is_rejected_before_fetching() {
        let mut rng = StdRng::seed_from_u64(0);

        // Either multiplication can be the one that overflows.
        for bad in [request(2000.0, usize::MAX, 3), request(2000.0, usize::MAX / 2, 1)] {
            let err = generate_plan(&FailingSource, &bad, &mut rng).unwrap_err();
            assert!(matches!(err, PlanError::InvalidInput(_)));
        }
    }

    #[test]
    fn test_source_failure_propagates() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = generate_plan(&FailingSource, &request(2000.0, 7, 3), &mut rng).unwrap_err();
        assert!(matches!(err, PlanError::Source(_)));
    }

    #[test]
    fn test_uniform_pool_gives_floor_of_mean() {
        // With every recipe at the same calorie value no swap can change a
        // day's total, so the plan is exact regardless of shuffling.
        let source = FixedSource {
            recipes: (1..=30).map(|id| recipe(id, 333.25)).collect(),
        };
        let mut rng = StdRng::seed_from_u64(11);

        let plan = generate_plan(&source, &request(1000.0, 4, 3), &mut rng).unwrap();
        assert_eq!(plan.diet_type, "omni");
        assert_eq!(plan.days(), 4);
        for day in &plan.daily_plans {
            assert_eq!(day.recipes.len(), 3);
        }
        // 3 * 333.25 = 999.75 per day; the average floors to 999.
        assert_eq!(plan.daily_calories, 999);
    }

    #[test]
    fn test_pool_smaller_than_a_day_is_used_whole() {
        let source = FixedSource {
            recipes: vec![recipe(1, 400.0), recipe(2, 400.0)],
        };
        let mut rng = StdRng::seed_from_u64(3);

        let plan = generate_plan(&source, &request(2000.0, 2, 5), &mut rng).unwrap();
        for day in &plan.daily_plans {
            assert_eq!(day.recipes.len(), 2);
        }
        assert_eq!(plan.daily_calories, 800);
    }
}
