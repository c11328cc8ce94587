//! Display helpers for recipe timing and ratings.

use crate::types::Comment;

/// Combined prep and cook time, formatted the way listing cards show it.
pub fn format_total_time(prep_time: u32, cook_time: u32) -> String {
    format!("{} mins", prep_time + cook_time)
}

/// Mean of a set of ratings, rounded to 1 decimal place.
///
/// An empty input yields 0 (an unrated recipe, not an error).
pub fn average_rating(ratings: &[f64]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let sum: f64 = ratings.iter().sum();
    let mean = sum / ratings.len() as f64;
    (mean * 10.0).round() / 10.0
}

/// Average of the ratings left on a recipe's comments.
pub fn comment_rating_average(comments: &[Comment]) -> f64 {
    let ratings: Vec<f64> = comments.iter().map(|c| f64::from(c.rating)).collect();
    average_rating(&ratings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn comment(id: &str, rating: u8) -> Comment {
        Comment {
            id: id.to_string(),
            user_id: "u1".to_string(),
            username: "PizzaLover".to_string(),
            content: "Perfect recipe!".to_string(),
            rating,
            created_at: Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_format_total_time() {
        assert_eq!(format_total_time(20, 15), "35 mins");
        assert_eq!(format_total_time(0, 0), "0 mins");
    }

    #[test]
    fn test_average_rating_empty() {
        assert_eq!(average_rating(&[]), 0.0);
    }

    #[test]
    fn test_average_rating_rounds_to_one_decimal() {
        assert_eq!(average_rating(&[4.0, 5.0, 4.0]), 4.3);
        assert_eq!(average_rating(&[4.5, 5.0, 4.0]), 4.5);
        assert_eq!(average_rating(&[5.0]), 5.0);
    }

    #[test]
    fn test_comment_rating_average() {
        let comments = vec![comment("c1", 5), comment("c2", 4)];
        assert_eq!(comment_rating_average(&comments), 4.5);
    }

    #[test]
    fn test_comment_rating_average_empty() {
        assert_eq!(comment_rating_average(&[]), 0.0);
    }
}
