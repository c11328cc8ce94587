use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Meal categories a recipe can be filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Breakfast,
    Lunch,
    Dinner,
    Dessert,
    Snack,
    Appetizer,
}

impl Category {
    /// All categories in menu order
    pub const ALL: &'static [Category] = &[
        Category::Breakfast,
        Category::Lunch,
        Category::Dinner,
        Category::Dessert,
        Category::Snack,
        Category::Appetizer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Breakfast => "Breakfast",
            Category::Lunch => "Lunch",
            Category::Dinner => "Dinner",
            Category::Dessert => "Dessert",
            Category::Snack => "Snack",
            Category::Appetizer => "Appetizer",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Breakfast" => Some(Category::Breakfast),
            "Lunch" => Some(Category::Lunch),
            "Dinner" => Some(Category::Dinner),
            "Dessert" => Some(Category::Dessert),
            "Snack" => Some(Category::Snack),
            "Appetizer" => Some(Category::Appetizer),
            _ => None,
        }
    }
}

/// How demanding a recipe is to cook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: &'static [Difficulty] =
        &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Easy" => Some(Difficulty::Easy),
            "Medium" => Some(Difficulty::Medium),
            "Hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// Cuisines recognized by the discovery filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cuisine {
    Italian,
    Nigerian,
    #[serde(rename = "Middle Eastern")]
    MiddleEastern,
    Chinese,
    Japanese,
    Indian,
    Mexican,
    Thai,
    French,
    Mediterranean,
}

impl Cuisine {
    pub const ALL: &'static [Cuisine] = &[
        Cuisine::Italian,
        Cuisine::Nigerian,
        Cuisine::MiddleEastern,
        Cuisine::Chinese,
        Cuisine::Japanese,
        Cuisine::Indian,
        Cuisine::Mexican,
        Cuisine::Thai,
        Cuisine::French,
        Cuisine::Mediterranean,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Cuisine::Italian => "Italian",
            Cuisine::Nigerian => "Nigerian",
            Cuisine::MiddleEastern => "Middle Eastern",
            Cuisine::Chinese => "Chinese",
            Cuisine::Japanese => "Japanese",
            Cuisine::Indian => "Indian",
            Cuisine::Mexican => "Mexican",
            Cuisine::Thai => "Thai",
            Cuisine::French => "French",
            Cuisine::Mediterranean => "Mediterranean",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Italian" => Some(Cuisine::Italian),
            "Nigerian" => Some(Cuisine::Nigerian),
            "Middle Eastern" => Some(Cuisine::MiddleEastern),
            "Chinese" => Some(Cuisine::Chinese),
            "Japanese" => Some(Cuisine::Japanese),
            "Indian" => Some(Cuisine::Indian),
            "Mexican" => Some(Cuisine::Mexican),
            "Thai" => Some(Cuisine::Thai),
            "French" => Some(Cuisine::French),
            "Mediterranean" => Some(Cuisine::Mediterranean),
            _ => None,
        }
    }
}

/// A user-shared recipe.
///
/// Ingredient and instruction ordering is meaningful; nothing in this crate
/// reorders or drops lines. Times are in minutes. `servings` is the baseline
/// serving count the listed ingredient quantities assume.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub prep_time: u32,
    pub cook_time: u32,
    pub difficulty: Difficulty,
    /// Aggregate rating in [0, 5]
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<Cuisine>,
    #[serde(default = "default_servings")]
    pub servings: u32,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<Comment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

fn default_servings() -> u32 {
    1
}

impl Recipe {
    /// Combined preparation and cooking time in minutes.
    pub fn total_time(&self) -> u32 {
        self.prep_time + self.cook_time
    }
}

/// A comment left on a recipe. Immutable once created; a recipe's comment
/// sequence is append-only and chronological.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub content: String,
    /// Rating in [1, 5]
    pub rating: u8,
    pub created_at: DateTime<Utc>,
}
