//! Integer production planning over a shared ingredient stock.
//!
//! A [`RecipeBook`] lists ingredients with their stock and recipes with the
//! ingredients one unit consumes. [`solve`] turns it into an integer program
//! and asks SCIP for the production plan of maximum value.

pub mod config;
pub mod error;
pub mod kitchen;
pub mod logging;
pub mod plan;
pub mod report;
pub mod solver;

pub use error::{BookError, ConfigError, PlanError};
pub use kitchen::{Ingredient, Recipe, RecipeBook};
pub use plan::{Plan, Usage};
pub use solver::{Goal, plan, solve};
