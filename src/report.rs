//! Plain-text rendering of a plan, one `name = value` line per recipe.

use std::fmt::Write;

use crate::kitchen::RecipeBook;
use crate::plan::Plan;
use crate::solver::Goal;

/// Renders the quantities in recipe order followed by the objective line.
pub fn render(book: &RecipeBook, plan: &Plan) -> String {
    let mut out = String::new();
    if let Goal::ReachTarget(target) = plan.goal {
        if !plan.target_met {
            let _ = writeln!(out, "Objectif {target} non atteint");
        }
    }
    for (name, qty) in &plan.quantities {
        let _ = writeln!(out, "{name} = {qty}");
    }
    let _ = writeln!(out, "{} = {}", book.objective_label, plan.objective);
    out
}

/// Renders used and leftover stock per ingredient.
pub fn render_usage(book: &RecipeBook, plan: &Plan) -> String {
    let mut out = String::new();
    for usage in plan.usage(book) {
        let _ = writeln!(
            out,
            "{}: {}/{} (reste {})",
            usage.ingredient,
            usage.used,
            usage.stock,
            usage.leftover()
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(goal: Goal, target_met: bool) -> Plan {
        Plan {
            book: "desserts".into(),
            goal,
            quantities: vec![
                ("marteau".into(), 10),
                ("neige".into(), 11),
                ("biscuit".into(), 8),
                ("mousse".into(), 9),
                ("cappuccino".into(), 7),
                ("gateau".into(), 10),
            ],
            objective: 55,
            target_met,
        }
    }

    #[test]
    fn renders_one_line_per_recipe_then_the_total() {
        let text = render(&RecipeBook::desserts(), &plan(Goal::MaximizeValue, true));
        assert_eq!(
            text,
            "marteau = 10\nneige = 11\nbiscuit = 8\nmousse = 9\ncappuccino = 7\ngateau = 10\nSomme totale = 55\n"
        );
    }

    #[test]
    fn missed_target_is_announced_first() {
        let text = render(&RecipeBook::desserts(), &plan(Goal::ReachTarget(60), false));
        assert!(text.starts_with("Objectif 60 non atteint\nmarteau = 10\n"));

        let text = render(&RecipeBook::desserts(), &plan(Goal::ReachTarget(50), true));
        assert!(text.starts_with("marteau = 10\n"));
    }

    #[test]
    fn usage_lines() {
        let text = render_usage(&RecipeBook::desserts(), &plan(Goal::MaximizeValue, true));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], "oeuf: 20/20 (reste 0)");
        assert_eq!(lines[9], "farine: 19/27 (reste 8)");
    }
}
