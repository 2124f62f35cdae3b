use serde::{Deserialize, Serialize};

/// Diet label that places no restriction on the pool.
pub const OMNI_DIET: &str = "omni";

/// A candidate recipe as returned by a recipe source.
///
/// Only `calories` matters to balancing; title and diet tags are descriptive
/// metadata carried through to the finished plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u64,

    pub title: String,

    pub calories: f64,

    #[serde(default)]
    pub diets: Vec<String>,
}

impl Recipe {
    /// Basic validation: a usable title and a finite, non-negative calorie value.
    pub fn is_valid(&self) -> bool {
        self.calories.is_finite() && self.calories >= 0.0 && !self.title.trim().is_empty()
    }

    /// Whether this recipe fits the requested diet.
    ///
    /// `omni` matches everything; any other diet must appear among the
    /// recipe's tags (case-insensitive).
    pub fn matches_diet(&self, diet: &str) -> bool {
        diet.eq_ignore_ascii_case(OMNI_DIET)
            || self.diets.iter().any(|d| d.eq_ignore_ascii_case(diet))
    }

    /// Whether this recipe matches a free-text query.
    ///
    /// An empty query matches everything; otherwise the title must contain
    /// the query (case-insensitive).
    pub fn matches_query(&self, query: &str) -> bool {
        query.is_empty() || self.title.to_lowercase().contains(&query.to_lowercase())
    }
}
