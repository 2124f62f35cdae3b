use crate::models::{DailyPlan, Recipe};
use crate::planner::constants::max_diff;

/// Take the first `meals_per_day` entries of a shuffled pool as a day's
/// starting selection, returning them with their calorie sum.
pub fn seed_day(pool: &[Recipe], meals_per_day: usize) -> (Vec<Recipe>, f64) {
    let mut day_recipes: Vec<Recipe> = Vec::with_capacity(meals_per_day.min(pool.len()));
    let mut day_calories = 0.0;
    for recipe in pool.iter().take(meals_per_day) {
        day_calories += recipe.calories;
        day_recipes.push(recipe.clone());
    }
    (day_recipes, day_calories)
}

/// Build one day's plan from a shuffled pool, swapping entries until the
/// day's total lands within tolerance of `target_calories`. Returns the day
/// together with the number of swaps performed.
///
/// The day is seeded with the first `meals_per_day` pool entries. A cursor
/// then walks the rest of the pool once: while the day is over target, the
/// highest-calorie entry is swapped for the next strictly lower-calorie
/// candidate; while under, the lowest-calorie entry is swapped for the next
/// strictly higher one. Candidates that cannot move the total in the right
/// direction are skipped. The cursor stays put after a swap, so the same
/// candidate may be swapped in more than once before it stops helping.
///
/// If the pool runs out before the total converges, the day is returned as
/// balanced as it got.
pub fn balance_day(
    pool: &[Recipe],
    meals_per_day: usize,
    target_calories: f64,
) -> (DailyPlan, usize) {
    let max_diff = max_diff(target_calories);

    let (mut day_recipes, mut day_calories) = seed_day(pool, meals_per_day);
    if day_recipes.is_empty() {
        return (DailyPlan::new(day_recipes), 0);
    }

    // Cursor starts past the seeded prefix even when the pool was too small
    // to fill it, in which case no swaps happen at all.
    let mut k = meals_per_day;
    let mut swaps = 0;

    while k < pool.len() && (day_calories - target_calories).abs() > max_diff {
        let mut j_sub = 0;
        if day_calories - target_calories > max_diff {
            // Over target: replace the highest-calorie entry (leftmost on
            // ties) with the next candidate that is strictly lighter.
            for j in 0..day_recipes.len() {
                if day_recipes[j].calories > day_recipes[j_sub].calories {
                    j_sub = j;
                }
            }
            while k < pool.len() && pool[k].calories >= day_recipes[j_sub].calories {
                k += 1;
            }
        } else {
            // Under target: replace the lowest-calorie entry with the next
            // candidate that is strictly heavier.
            for j in 0..day_recipes.len() {
                if day_recipes[j].calories < day_recipes[j_sub].calories {
                    j_sub = j;
                }
            }
            while k < pool.len() && pool[k].calories <= day_recipes[j_sub].calories {
                k += 1;
            }
        }
        if k < pool.len() {
            day_calories -= day_recipes[j_sub].calories;
            day_recipes[j_sub] = pool[k].clone();
            day_calories += pool[k].calories;
            swaps += 1;
        }
    }

    (DailyPlan::new(day_recipes), swaps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::constants::within_tolerance;
    use assert_float_eq::assert_float_absolute_eq;

    fn recipe(id: u64, calories: f64) -> Recipe {
        Recipe {
            id,
            title: format!("Recipe {}", id),
            calories,
            diets: vec![],
        }
    }

    fn ids(day: &DailyPlan) -> Vec<u64> {
        day.recipes.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_seed_day_takes_pool_prefix() {
        let pool = vec![recipe(1, 500.0), recipe(2, 700.0), recipe(3, 800.0)];

        let (selection, sum) = seed_day(&pool, 2);
        assert_eq!(selection.len(), 2);
        assert_eq!(selection[0].id, 1);
        assert_eq!(selection[1].id, 2);
        assert_float_absolute_eq!(sum, 1200.0);

        let (all, sum) = seed_day(&pool, 10);
        assert_eq!(all.len(), 3);
        assert_float_absolute_eq!(sum, 2000.0);
    }

    #[test]
    fn test_seed_within_tolerance_needs_no_swaps() {
        let pool = vec![
            recipe(1, 500.0),
            recipe(2, 700.0),
            recipe(3, 800.0),
            recipe(4, 100.0),
            recipe(5, 3000.0),
        ];

        let (day, swaps) = balance_day(&pool, 3, 2000.0);
        assert_eq!(ids(&day), vec![1, 2, 3]);
        assert_eq!(swaps, 0);
        assert_float_absolute_eq!(day.total_calories(), 2000.0);
    }

    #[test]
    fn test_swaps_down_when_over_target() {
        // Seed is 2700 against a 2000 target (band 1700..=2300). The 850
        // candidate replaces each 900 in turn without the cursor moving,
        // then the cursor skips it and the 400 brings the day into band.
        let pool = vec![
            recipe(1, 900.0),
            recipe(2, 900.0),
            recipe(3, 900.0),
            recipe(4, 850.0),
            recipe(5, 400.0),
        ];

        let (day, swaps) = balance_day(&pool, 3, 2000.0);
        assert_eq!(ids(&day), vec![5, 4, 4]);
        assert_eq!(swaps, 4);
        assert_float_absolute_eq!(day.total_calories(), 2100.0);
        assert!(within_tolerance(day.total_calories(), 2000.0));
    }

    #[test]
    fn test_swaps_up_when_under_target() {
        let pool = vec![
            recipe(1, 200.0),
            recipe(2, 200.0),
            recipe(3, 200.0),
            recipe(4, 250.0),
            recipe(5, 800.0),
        ];

        let (day, swaps) = balance_day(&pool, 3, 2000.0);
        assert_eq!(ids(&day), vec![5, 5, 4]);
        assert_eq!(swaps, 5);
        assert_float_absolute_eq!(day.total_calories(), 1850.0);
        assert!(within_tolerance(day.total_calories(), 2000.0));
    }

    #[test]
    fn test_pool_no_bigger_than_a_day_is_returned_as_is() {
        let pool = vec![recipe(1, 10.0), recipe(2, 20.0), recipe(3, 30.0)];

        let (day, swaps) = balance_day(&pool, 3, 5000.0);
        assert_eq!(ids(&day), vec![1, 2, 3]);
        assert_eq!(swaps, 0);
        assert_float_absolute_eq!(day.total_calories(), 60.0);
        assert!(!within_tolerance(day.total_calories(), 5000.0));
    }

    #[test]
    fn test_short_pool_fills_what_it_can() {
        let pool = vec![recipe(1, 10.0), recipe(2, 20.0)];

        let (day, swaps) = balance_day(&pool, 5, 2000.0);
        assert_eq!(ids(&day), vec![1, 2]);
        assert_eq!(swaps, 0);
    }

    #[test]
    fn test_uniform_pool_terminates_without_converging() {
        let pool: Vec<Recipe> = (1..=30).map(|id| recipe(id, 100.0)).collect();

        let (day, swaps) = balance_day(&pool, 3, 2000.0);
        assert_eq!(ids(&day), vec![1, 2, 3]);
        assert_eq!(swaps, 0);
        assert_float_absolute_eq!(day.total_calories(), 300.0);
        assert!(!within_tolerance(day.total_calories(), 2000.0));
    }

    #[test]
    fn test_empty_pool_gives_empty_day() {
        let (day, swaps) = balance_day(&[], 3, 2000.0);
        assert!(day.recipes.is_empty());
        assert_eq!(swaps, 0);
    }
}
