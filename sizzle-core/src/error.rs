use thiserror::Error;

/// A single violated constraint on a submitted recipe.
///
/// Messages match the submission form's field errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title must be between 3 and 100 characters")]
    TitleLength,

    #[error("Description must be at least 10 characters")]
    DescriptionTooShort,

    #[error("Preparation time is required")]
    MissingPrepTime,

    #[error("Cooking time is required")]
    MissingCookTime,

    #[error("At least one ingredient is required")]
    NoIngredients,

    #[error("At least one instruction is required")]
    NoInstructions,

    #[error("Rating must be between 0 and 5")]
    RatingOutOfRange,

    #[error("Servings must be at least 1")]
    InvalidServings,

    #[error("Comment rating must be between 1 and 5")]
    CommentRatingOutOfRange,
}
