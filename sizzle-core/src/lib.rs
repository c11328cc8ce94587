//! Core recipe logic for Sizzle: serving-size quantity scaling and
//! multi-field catalog filtering, plus the small helpers the display
//! layer leans on (lookup, ratings, submission checks, response caching).
//!
//! Everything here is synchronous and I/O-free; collaborators supply the
//! recipe collection and consume the derived views.

pub mod catalog;
pub mod error;
pub mod filter;
pub mod scaling;
pub mod stats;
pub mod types;
pub mod validation;

pub use catalog::{find_recipe_by_id, CatalogCache};
pub use error::ValidationError;
pub use filter::{filter_recipes, FilterCriteria};
pub use scaling::{
    clamp_servings, scale_factor, scale_ingredient_line, scale_instruction_line, MAX_SERVINGS,
    MIN_SERVINGS,
};
pub use stats::{average_rating, comment_rating_average, format_total_time};
pub use types::{Category, Comment, Cuisine, Difficulty, Recipe};
pub use validation::validate_recipe;
