use anyhow::{Context, Result};
use plats::{RecipeBook, logging, report, solve};

// Six desserts drawn from twelve shared ingredients.
// Each unit of any dessert counts 1; maximize the number of units.

fn main() -> Result<()> {
    logging::init();

    let book = RecipeBook::desserts();
    let plan = solve(&book).context("failed to plan the desserts")?;

    print!("{}", report::render(&book, &plan));

    Ok(())
}
