use thiserror::Error;

/// A recipe book that cannot be turned into a well-formed model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookError {
    #[error("ingredient `{0}` is declared more than once")]
    DuplicateIngredient(String),

    #[error("recipe `{0}` is declared more than once")]
    DuplicateRecipe(String),

    #[error("recipe `{recipe}` uses unknown ingredient `{ingredient}`")]
    UnknownIngredient { recipe: String, ingredient: String },

    #[error("recipe `{recipe}` uses zero units of `{ingredient}`")]
    ZeroQuantity { recipe: String, ingredient: String },

    #[error("recipe `{0}` uses no ingredients and would be unbounded")]
    EmptyRecipe(String),
}

/// Errors raised while loading a recipe book from disk.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid recipe book: {0}")]
    Book(#[from] BookError),
}

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("invalid recipe book: {0}")]
    Book(#[from] BookError),

    /// The SCIP backend did not produce a usable answer.
    #[error("SCIP solver backend failed (status {status}); check the russcip/SCIP installation")]
    Solver { status: String },

    /// The model produced a result that cannot happen for a valid book.
    #[error("internal consistency error: {reason}")]
    Inconsistent { reason: String },
}
