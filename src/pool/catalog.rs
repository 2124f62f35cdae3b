use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{PlanError, Result};
use crate::models::Recipe;
use crate::pool::source::{PoolRequest, RecipeSource};

/// CSV row shape: diets arrive as one `;`-separated cell.
#[derive(Debug, Deserialize)]
struct CsvRecipe {
    id: u64,
    title: String,
    calories: f64,
    #[serde(default)]
    diets: String,
}

impl From<CsvRecipe> for Recipe {
    fn from(row: CsvRecipe) -> Self {
        Recipe {
            id: row.id,
            title: row.title,
            calories: row.calories,
            diets: row
                .diets
                .split(';')
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

/// A file-backed recipe source.
///
/// Keeps the whole catalog in memory in file order, so repeated fetches with
/// the same request page deterministically.
#[derive(Debug, Clone)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    /// Build a catalog from raw recipes.
    ///
    /// Drops invalid entries and deduplicates by id (last occurrence wins,
    /// keeping the first occurrence's position).
    pub fn from_recipes(recipes: Vec<Recipe>) -> Self {
        let mut by_id: HashMap<u64, usize> = HashMap::new();
        let mut deduped: Vec<Recipe> = Vec::new();
        for recipe in recipes.into_iter().filter(|r| r.is_valid()) {
            match by_id.get(&recipe.id) {
                Some(&i) => deduped[i] = recipe,
                None => {
                    by_id.insert(recipe.id, deduped.len());
                    deduped.push(recipe);
                }
            }
        }
        Self { recipes: deduped }
    }

    /// Load a catalog from a `.json` or `.csv` file, chosen by extension.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        let recipes = match extension.as_deref() {
            Some("json") => load_json(path)?,
            Some("csv") => load_csv(path)?,
            _ => {
                return Err(PlanError::UnsupportedFormat(
                    path.display().to_string(),
                ))
            }
        };

        Ok(Self::from_recipes(recipes))
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// All catalog entries matching a diet, in file order.
    pub fn recipes_for_diet(&self, diet: &str) -> Vec<Recipe> {
        self.recipes
            .iter()
            .filter(|r| r.matches_diet(diet))
            .cloned()
            .collect()
    }

    /// Distinct diet tags present in the catalog, lowercased and sorted.
    pub fn diet_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self
            .recipes
            .iter()
            .flat_map(|r| r.diets.iter())
            .map(|d| d.to_lowercase())
            .collect();
        tags.sort();
        tags.dedup();
        tags
    }
}

fn load_json(path: &Path) -> Result<Vec<Recipe>> {
    let content = fs::read_to_string(path)?;
    let recipes: Vec<Recipe> = serde_json::from_str(&content)?;
    Ok(recipes)
}

fn load_csv(path: &Path) -> Result<Vec<Recipe>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut recipes = Vec::new();
    for row in reader.deserialize::<CsvRecipe>() {
        recipes.push(row?.into());
    }
    Ok(recipes)
}

impl RecipeSource for RecipeCatalog {
    fn fetch(&self, request: &PoolRequest) -> Result<Vec<Recipe>> {
        let matches: Vec<&Recipe> = self
            .recipes
            .iter()
            .filter(|r| r.matches_diet(&request.diet) && r.matches_query(&request.query))
            .collect();

        if matches.is_empty() {
            return Err(PlanError::EmptyPool(request.diet.clone()));
        }

        // An offset that would page past the last match restarts from the
        // top, so a thin catalog still yields a pool.
        let start = if request.offset >= matches.len() {
            0
        } else {
            request.offset
        };

        Ok(matches
            .into_iter()
            .skip(start)
            .take(request.size)
            .cloned()
            .collect())
    }
}
