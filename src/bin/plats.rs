use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use plats::{Goal, RecipeBook, config, logging, plan, report};

#[derive(Parser)]
#[command(name = "plats")]
#[command(about = "Plan integer production from a shared ingredient stock", long_about = None)]
struct Cli {
    /// Built-in book (desserts, dinner) or path to a TOML recipe book
    #[arg(short, long, default_value = "desserts")]
    book: String,

    /// Reach this value with as few units as possible instead of maximizing
    #[arg(short, long)]
    target: Option<u64>,

    /// Also print used and leftover stock per ingredient
    #[arg(short, long)]
    usage: bool,
}

fn load_book(arg: &str) -> Result<RecipeBook> {
    if let Some(book) = RecipeBook::builtin(arg) {
        return Ok(book);
    }
    let path = PathBuf::from(arg);
    config::load(&path).with_context(|| format!("failed to load recipe book {}", path.display()))
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let book = load_book(&cli.book)?;
    let goal = match cli.target {
        Some(target) => Goal::ReachTarget(target),
        None => Goal::MaximizeValue,
    };

    let plan = plan(&book, goal).with_context(|| format!("failed to plan `{}`", book.name))?;

    print!("{}", report::render(&book, &plan));
    if cli.usage {
        print!("{}", report::render_usage(&book, &plan));
    }

    Ok(())
}
