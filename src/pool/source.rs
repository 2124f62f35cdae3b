use crate::error::Result;
use crate::models::Recipe;

/// Parameters for one candidate-pool fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct PoolRequest {
    /// Diet to filter by (`omni` means no restriction).
    pub diet: String,

    /// Maximum number of recipes to deliver.
    pub size: usize,

    /// Free-text title filter; empty means no restriction.
    pub query: String,

    /// How many matches to page past before delivering.
    pub offset: usize,
}

/// A supplier of candidate recipes for plan generation.
///
/// Implementations signal failure through the error channel; a returned
/// pool always holds at least one recipe.
pub trait RecipeSource {
    fn fetch(&self, request: &PoolRequest) -> Result<Vec<Recipe>>;
}
