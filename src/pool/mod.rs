pub mod catalog;
pub mod source;

pub use catalog::RecipeCatalog;
pub use source::{PoolRequest, RecipeSource};
