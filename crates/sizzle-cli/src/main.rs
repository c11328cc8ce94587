use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use sizzle_core::{
    clamp_servings, filter_recipes, find_recipe_by_id, format_total_time, scale_factor,
    scale_ingredient_line, scale_instruction_line, validate_recipe, Category, Cuisine, Difficulty,
    FilterCriteria, Recipe,
};
use std::fs;
use std::path::{Path, PathBuf};

/// Sentinel accepted by every categorical filter flag.
const ALL: &str = "all";

#[derive(Parser)]
#[command(name = "sizzle")]
#[command(about = "Sizzle recipe catalog tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog recipes matching the given filters
    List {
        /// Path to a JSON recipe catalog
        #[arg(long, default_value = "recipes.json")]
        catalog: PathBuf,
        /// Free-text search against title and description
        #[arg(long, default_value = "")]
        search: String,
        /// Category filter ("all" for no constraint)
        #[arg(long, default_value = ALL)]
        category: String,
        /// Difficulty filter ("all" for no constraint)
        #[arg(long, default_value = ALL)]
        difficulty: String,
        /// Cuisine filter ("all" for no constraint)
        #[arg(long, default_value = ALL)]
        cuisine: String,
    },
    /// Print a recipe scaled to a serving count
    Scale {
        /// Path to a JSON recipe catalog
        #[arg(long, default_value = "recipes.json")]
        catalog: PathBuf,
        /// Recipe id
        id: String,
        /// Desired serving count (clamped to 1-99)
        #[arg(long)]
        servings: u32,
    },
    /// Check every catalog entry against the submission rules
    Validate {
        /// Path to a JSON recipe catalog
        #[arg(long, default_value = "recipes.json")]
        catalog: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List {
            catalog,
            search,
            category,
            difficulty,
            cuisine,
        } => {
            let criteria = FilterCriteria {
                search,
                category: parse_choice(&category, Category::from_str, "category")?,
                difficulty: parse_choice(&difficulty, Difficulty::from_str, "difficulty")?,
                cuisine: parse_choice(&cuisine, Cuisine::from_str, "cuisine")?,
            };
            list(&catalog, &criteria)?;
        }
        Commands::Scale {
            catalog,
            id,
            servings,
        } => {
            scale(&catalog, &id, servings)?;
        }
        Commands::Validate { catalog } => {
            validate(&catalog)?;
        }
    }

    Ok(())
}

/// Map a filter flag to its enum value, treating "all" as unconstrained.
fn parse_choice<T>(
    raw: &str,
    parse: impl Fn(&str) -> Option<T>,
    what: &str,
) -> Result<Option<T>> {
    if raw == ALL {
        return Ok(None);
    }
    parse(raw)
        .map(Some)
        .with_context(|| format!("unknown {what}: {raw}"))
}

fn load_catalog(path: &Path) -> Result<Vec<Recipe>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("catalog {} is not valid recipe JSON", path.display()))
}

fn list(catalog: &Path, criteria: &FilterCriteria) -> Result<()> {
    let recipes = load_catalog(catalog)?;
    let matches = filter_recipes(&recipes, criteria);

    if matches.is_empty() {
        if criteria.is_unconstrained() {
            println!("No recipes available at the moment.");
        } else {
            println!("No recipes match your current filters. Try adjusting them.");
        }
        return Ok(());
    }

    for recipe in matches {
        println!(
            "{:<4} {} [{} / {}] {} - rated {:.1}",
            recipe.id,
            recipe.title,
            recipe.category.as_str(),
            recipe.difficulty.as_str(),
            format_total_time(recipe.prep_time, recipe.cook_time),
            recipe.rating,
        );
    }

    Ok(())
}

fn scale(catalog: &Path, id: &str, servings: u32) -> Result<()> {
    let recipes = load_catalog(catalog)?;
    let Some(recipe) = find_recipe_by_id(id, &recipes) else {
        bail!("no recipe with id {id}");
    };

    let servings = clamp_servings(servings);
    let factor = scale_factor(servings, recipe.servings);

    println!("{}", recipe.title);
    println!(
        "Serves {} (scaled from {})",
        servings, recipe.servings
    );

    println!("\nIngredients:");
    for line in &recipe.ingredients {
        println!("  - {}", scale_ingredient_line(line, factor));
    }

    println!("\nInstructions:");
    for (i, line) in recipe.instructions.iter().enumerate() {
        println!("  {}. {}", i + 1, scale_instruction_line(line, factor));
    }

    Ok(())
}

fn validate(catalog: &Path) -> Result<()> {
    let recipes = load_catalog(catalog)?;
    let mut invalid = 0;

    for recipe in &recipes {
        if let Err(errors) = validate_recipe(recipe) {
            invalid += 1;
            println!("{} ({}):", recipe.title, recipe.id);
            for error in errors {
                println!("  - {error}");
            }
        }
    }

    if invalid > 0 {
        bail!("{invalid} of {} recipes failed validation", recipes.len());
    }

    println!("All {} recipes are valid.", recipes.len());
    Ok(())
}
