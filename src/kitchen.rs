//! Ingredients, recipes and the recipe books the planner works on.
//!
//! A [`RecipeBook`] is the whole input of a planning run: every ingredient
//! with its stock, and every recipe with the quantity of each ingredient one
//! unit consumes. Each recipe becomes an integer decision variable and each
//! used ingredient a `<=` stock constraint.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::BookError;

pub const DEFAULT_OBJECTIVE_LABEL: &str = "Somme totale";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Ingredient {
    pub name: String,
    pub stock: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Recipe {
    pub name: String,
    /// Worth of one unit in the objective.
    #[serde(default = "unit_value")]
    pub value: u32,
    /// Units of each ingredient consumed per unit produced.
    pub ingredients: BTreeMap<String, u32>,
}

fn unit_value() -> u32 {
    1
}

fn default_objective_label() -> String {
    DEFAULT_OBJECTIVE_LABEL.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RecipeBook {
    pub name: String,
    #[serde(default = "default_objective_label")]
    pub objective_label: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub recipes: Vec<Recipe>,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, stock: u32) -> Self {
        Self {
            name: name.into(),
            stock,
        }
    }
}

impl Recipe {
    pub fn new(name: impl Into<String>, value: u32, ingredients: &[(&str, u32)]) -> Self {
        Self {
            name: name.into(),
            value,
            ingredients: ingredients
                .iter()
                .map(|(ingredient, qty)| (ingredient.to_string(), *qty))
                .collect(),
        }
    }

    /// Units of `ingredient` used per unit of this recipe, 0 if unused.
    pub fn uses(&self, ingredient: &str) -> u32 {
        self.ingredients.get(ingredient).copied().unwrap_or(0)
    }
}

impl RecipeBook {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            objective_label: default_objective_label(),
            ingredients: Vec::new(),
            recipes: Vec::new(),
        }
    }

    pub fn with_objective_label(mut self, label: impl Into<String>) -> Self {
        self.objective_label = label.into();
        self
    }

    pub fn with_ingredient(mut self, name: impl Into<String>, stock: u32) -> Self {
        self.ingredients.push(Ingredient::new(name, stock));
        self
    }

    pub fn with_recipe(mut self, recipe: Recipe) -> Self {
        self.recipes.push(recipe);
        self
    }

    /// The six desserts sharing twelve ingredients. Every unit is worth 1,
    /// so the objective is the total number of units produced.
    pub fn desserts() -> Self {
        let stock = [
            ("oeuf", 20),
            ("levure", 26),
            ("bonbon", 34),
            ("amandes", 18),
            ("lait", 19),
            ("confiture", 38),
            ("sucre", 15),
            ("glacage", 25),
            ("cacao", 18),
            ("farine", 27),
            ("cafe", 19),
            ("guimauve", 21),
        ];
        let recipes = [
            Recipe::new("marteau", 1, &[("oeuf", 1), ("levure", 1), ("bonbon", 2)]),
            Recipe::new("neige", 1, &[("amandes", 1), ("lait", 1), ("confiture", 2)]),
            Recipe::new("biscuit", 1, &[("lait", 1), ("sucre", 1), ("glacage", 2)]),
            Recipe::new("mousse", 1, &[("levure", 1), ("cacao", 2), ("farine", 1)]),
            Recipe::new("cappuccino", 1, &[("amandes", 1), ("sucre", 1), ("cafe", 2)]),
            Recipe::new("gateau", 1, &[("oeuf", 1), ("farine", 1), ("guimauve", 2)]),
        ];

        let mut book = RecipeBook::new("desserts");
        for (name, qty) in stock {
            book = book.with_ingredient(name, qty);
        }
        recipes.into_iter().fold(book, RecipeBook::with_recipe)
    }

    /// Holiday dinner dishes, valued at their selling price.
    pub fn dinner() -> Self {
        let stock = [
            ("dinde", 7),
            ("patate", 21),
            ("citrouille", 8),
            ("mais", 13),
            ("haricots", 4),
            ("canneberge", 7),
            ("beurre", 9),
            ("assaisonement", 10),
            ("eau", 11),
            ("lait", 5),
            ("oeuf", 19),
            ("farine", 3),
        ];
        let recipes = [
            Recipe::new("dinde_roti", 40, &[("dinde", 2), ("beurre", 1), ("assaisonement", 1)]),
            Recipe::new("pain_mais", 40, &[("mais", 2), ("oeuf", 1), ("farine", 1)]),
            Recipe::new("tarte_citrouille", 50, &[("citrouille", 2), ("lait", 1), ("farine", 1)]),
            Recipe::new("casserole_haricots", 40, &[("haricots", 2), ("beurre", 1), ("eau", 1)]),
            Recipe::new("puree", 40, &[("patate", 2), ("lait", 1), ("oeuf", 1)]),
            Recipe::new("sauce", 50, &[("canneberge", 2), ("assaisonement", 1), ("eau", 1)]),
        ];

        let mut book = RecipeBook::new("dinner").with_objective_label("Revenu total");
        for (name, qty) in stock {
            book = book.with_ingredient(name, qty);
        }
        recipes.into_iter().fold(book, RecipeBook::with_recipe)
    }

    /// Looks up a built-in book by name.
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "desserts" => Some(Self::desserts()),
            "dinner" => Some(Self::dinner()),
            _ => None,
        }
    }

    pub fn validate(&self) -> Result<(), BookError> {
        let mut seen = HashSet::new();
        for ingredient in &self.ingredients {
            if !seen.insert(ingredient.name.as_str()) {
                return Err(BookError::DuplicateIngredient(ingredient.name.clone()));
            }
        }

        let mut recipes = HashSet::new();
        for recipe in &self.recipes {
            if !recipes.insert(recipe.name.as_str()) {
                return Err(BookError::DuplicateRecipe(recipe.name.clone()));
            }
            if recipe.ingredients.is_empty() {
                return Err(BookError::EmptyRecipe(recipe.name.clone()));
            }
            for (ingredient, qty) in &recipe.ingredients {
                if !seen.contains(ingredient.as_str()) {
                    return Err(BookError::UnknownIngredient {
                        recipe: recipe.name.clone(),
                        ingredient: ingredient.clone(),
                    });
                }
                if *qty == 0 {
                    return Err(BookError::ZeroQuantity {
                        recipe: recipe.name.clone(),
                        ingredient: ingredient.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn recipe(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.name == name)
    }

    /// Largest number of units of `recipe` the stock allows on its own.
    pub fn max_batches(&self, recipe: &Recipe) -> u64 {
        recipe
            .ingredients
            .iter()
            .filter(|(_, qty)| **qty > 0)
            .map(|(name, qty)| {
                let stock = self
                    .ingredients
                    .iter()
                    .find(|i| &i.name == name)
                    .map_or(0, |i| i.stock);
                u64::from(stock / qty)
            })
            .min()
            .unwrap_or(0)
    }

    /// Objective value of `quantities`, given in recipe order.
    pub fn objective_of(&self, quantities: &[u64]) -> u64 {
        self.recipes
            .iter()
            .zip(quantities)
            .map(|(recipe, qty)| u64::from(recipe.value) * qty)
            .sum()
    }

    /// Units of each ingredient consumed by `quantities`, in ingredient order.
    pub fn consumption(&self, quantities: &[u64]) -> Vec<u64> {
        self.ingredients
            .iter()
            .map(|ingredient| {
                self.recipes
                    .iter()
                    .zip(quantities)
                    .map(|(recipe, qty)| u64::from(recipe.uses(&ingredient.name)) * qty)
                    .sum()
            })
            .collect()
    }

    /// Whether `quantities` (in recipe order) fits within every stock.
    pub fn fits(&self, quantities: &[u64]) -> bool {
        quantities.len() == self.recipes.len()
            && self
                .consumption(quantities)
                .iter()
                .zip(&self.ingredients)
                .all(|(used, ingredient)| *used <= u64::from(ingredient.stock))
    }

    /// Whether any recipe consumes `ingredient`.
    pub fn is_used(&self, ingredient: &str) -> bool {
        self.recipes.iter().any(|r| r.uses(ingredient) > 0)
    }
}
