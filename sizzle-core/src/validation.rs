//! Submission checks for user-shared recipes.
//!
//! Runs every rule and collects every violation, so a submission form can
//! surface all of its field errors at once instead of one per attempt.

use crate::error::ValidationError;
use crate::types::Recipe;

const TITLE_MIN_CHARS: usize = 3;
const TITLE_MAX_CHARS: usize = 100;
const DESCRIPTION_MIN_CHARS: usize = 10;

/// Validate a recipe submission.
///
/// Returns `Ok(())` for a well-formed recipe, or every violated constraint
/// in rule order. Length rules count characters of the trimmed text.
pub fn validate_recipe(recipe: &Recipe) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let title_chars = recipe.title.trim().chars().count();
    if !(TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&title_chars) {
        errors.push(ValidationError::TitleLength);
    }

    if recipe.description.trim().chars().count() < DESCRIPTION_MIN_CHARS {
        errors.push(ValidationError::DescriptionTooShort);
    }

    if recipe.prep_time == 0 {
        errors.push(ValidationError::MissingPrepTime);
    }

    if recipe.cook_time == 0 {
        errors.push(ValidationError::MissingCookTime);
    }

    if recipe.ingredients.is_empty() {
        errors.push(ValidationError::NoIngredients);
    }

    if recipe.instructions.is_empty() {
        errors.push(ValidationError::NoInstructions);
    }

    if !(0.0..=5.0).contains(&recipe.rating) {
        errors.push(ValidationError::RatingOutOfRange);
    }

    if recipe.servings == 0 {
        errors.push(ValidationError::InvalidServings);
    }

    if recipe.comments.iter().any(|c| !(1..=5).contains(&c.rating)) {
        errors.push(ValidationError::CommentRatingOutOfRange);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Difficulty};

    fn valid_recipe() -> Recipe {
        Recipe {
            id: "1".to_string(),
            title: "Classic Margherita Pizza".to_string(),
            description: "A traditional Italian pizza with fresh basil".to_string(),
            category: Category::Dinner,
            prep_time: 20,
            cook_time: 15,
            difficulty: Difficulty::Medium,
            rating: 4.8,
            cuisine: None,
            servings: 4,
            ingredients: vec!["1 pizza dough ball".to_string()],
            instructions: vec!["Bake for 12-15 minutes".to_string()],
            comments: vec![],
            image: None,
        }
    }

    #[test]
    fn test_valid_recipe_passes() {
        assert_eq!(validate_recipe(&valid_recipe()), Ok(()));
    }

    #[test]
    fn test_short_title_rejected() {
        let mut recipe = valid_recipe();
        recipe.title = "Ok".to_string();
        assert_eq!(
            validate_recipe(&recipe),
            Err(vec![ValidationError::TitleLength])
        );
    }

    #[test]
    fn test_title_length_counts_trimmed_text() {
        let mut recipe = valid_recipe();
        recipe.title = "  a  ".to_string();
        assert_eq!(
            validate_recipe(&recipe),
            Err(vec![ValidationError::TitleLength])
        );
    }

    #[test]
    fn test_overlong_title_rejected() {
        let mut recipe = valid_recipe();
        recipe.title = "x".repeat(101);
        assert_eq!(
            validate_recipe(&recipe),
            Err(vec![ValidationError::TitleLength])
        );
    }

    #[test]
    fn test_short_description_rejected() {
        let mut recipe = valid_recipe();
        recipe.description = "Tasty".to_string();
        assert_eq!(
            validate_recipe(&recipe),
            Err(vec![ValidationError::DescriptionTooShort])
        );
    }

    #[test]
    fn test_zero_times_rejected() {
        let mut recipe = valid_recipe();
        recipe.prep_time = 0;
        recipe.cook_time = 0;
        assert_eq!(
            validate_recipe(&recipe),
            Err(vec![
                ValidationError::MissingPrepTime,
                ValidationError::MissingCookTime,
            ])
        );
    }

    #[test]
    fn test_empty_ingredients_rejected() {
        let mut recipe = valid_recipe();
        recipe.ingredients.clear();
        assert_eq!(
            validate_recipe(&recipe),
            Err(vec![ValidationError::NoIngredients])
        );
    }

    #[test]
    fn test_empty_instructions_rejected() {
        let mut recipe = valid_recipe();
        recipe.instructions.clear();
        assert_eq!(
            validate_recipe(&recipe),
            Err(vec![ValidationError::NoInstructions])
        );
    }

    #[test]
    fn test_rating_out_of_range_rejected() {
        let mut recipe = valid_recipe();
        recipe.rating = 5.5;
        assert_eq!(
            validate_recipe(&recipe),
            Err(vec![ValidationError::RatingOutOfRange])
        );
    }

    #[test]
    fn test_zero_servings_rejected() {
        let mut recipe = valid_recipe();
        recipe.servings = 0;
        assert_eq!(
            validate_recipe(&recipe),
            Err(vec![ValidationError::InvalidServings])
        );
    }

    #[test]
    fn test_all_violations_collected() {
        let mut recipe = valid_recipe();
        recipe.title = "x".to_string();
        recipe.description = "short".to_string();
        recipe.ingredients.clear();
        let errors = validate_recipe(&recipe).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::TitleLength,
                ValidationError::DescriptionTooShort,
                ValidationError::NoIngredients,
            ]
        );
    }

    #[test]
    fn test_error_messages_match_form_copy() {
        assert_eq!(
            ValidationError::TitleLength.to_string(),
            "Title must be between 3 and 100 characters"
        );
        assert_eq!(
            ValidationError::NoIngredients.to_string(),
            "At least one ingredient is required"
        );
    }
}
