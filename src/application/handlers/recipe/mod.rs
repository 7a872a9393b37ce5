//! Recipe generation flow.

mod generate_recipe;

pub use generate_recipe::{
    GenerateRecipeCommand, GenerateRecipeHandler, GeneratedRecipe, RecipeError,
};
