mod common;

use plats::{Recipe, RecipeBook, solve};
use proptest::prelude::*;

fn book_strategy() -> impl Strategy<Value = RecipeBook> {
    let stocks = prop::collection::vec(0u32..20, 1..5);
    stocks.prop_flat_map(|stocks| {
        let n = stocks.len();
        let recipe = (1u32..6, prop::collection::vec(0u32..3, n))
            .prop_filter("recipe needs an ingredient", |(_, uses)| uses.iter().any(|q| *q > 0));
        let recipes = prop::collection::vec(recipe, 1..5);
        (Just(stocks), recipes).prop_map(|(stocks, recipes)| {
            let mut book = RecipeBook::new("random");
            for (i, stock) in stocks.iter().enumerate() {
                book = book.with_ingredient(format!("i{i}"), *stock);
            }
            for (r, (value, uses)) in recipes.into_iter().enumerate() {
                let names: Vec<String> = (0..uses.len()).map(|i| format!("i{i}")).collect();
                let pairs: Vec<(&str, u32)> = names
                    .iter()
                    .zip(&uses)
                    .filter(|(_, q)| **q > 0)
                    .map(|(name, q)| (name.as_str(), *q))
                    .collect();
                book = book.with_recipe(Recipe::new(format!("r{r}"), value, &pairs));
            }
            book
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn solver_plan_is_feasible_and_optimal(book in book_strategy()) {
        let plan = solve(&book).unwrap();
        prop_assert!(plan.is_feasible(&book));
        prop_assert_eq!(plan.objective, common::exhaustive_optimum(&book));
    }
}
