//! Recipe books stored as TOML.
//!
//! ```
//! let book = plats::config::from_toml_str(r#"
//!     name = "flan"
//!
//!     [[ingredients]]
//!     name = "oeuf"
//!     stock = 6
//!
//!     [[recipes]]
//!     name = "flan"
//!     ingredients = { oeuf = 2 }
//! "#).unwrap();
//!
//! assert_eq!(book.objective_label, "Somme totale");
//! assert_eq!(book.recipes[0].value, 1);
//! ```

use std::path::Path;

use tracing::debug;

use crate::error::ConfigError;
use crate::kitchen::RecipeBook;

/// Parses and validates a recipe book.
pub fn from_toml_str(s: &str) -> Result<RecipeBook, ConfigError> {
    let book: RecipeBook = toml::from_str(s)?;
    book.validate()?;
    Ok(book)
}

pub fn load(path: impl AsRef<Path>) -> Result<RecipeBook, ConfigError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let book = from_toml_str(&contents)?;
    debug!(
        event = "book_loaded",
        path = %path.display(),
        ingredients = book.ingredients.len(),
        recipes = book.recipes.len(),
    );
    Ok(book)
}

/// Serializes a book back to TOML, e.g. to seed a file from a built-in.
pub fn to_toml_string(book: &RecipeBook) -> Result<String, toml::ser::Error> {
    toml::to_string(book)
}
