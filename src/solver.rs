//! Builds the integer program for a recipe book and hands it to SCIP.
//!
//! One integer variable per recipe, bounded below by zero, and one `<=`
//! row per ingredient that some recipe uses. The search itself is left
//! entirely to SCIP's branch-and-bound.

use russcip::{Model, ObjSense, ProblemOrSolving, Status, VarType, WithSolutions};
use tracing::{debug, info, warn};

use crate::error::PlanError;
use crate::kitchen::RecipeBook;
use crate::plan::Plan;

/// Distance from an integer beyond which a solver value is rejected.
const INTEGRALITY_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Goal {
    /// Maximize the summed value of everything produced.
    MaximizeValue,
    /// Reach at least this value with as few units as possible.
    ReachTarget(u64),
}

enum Outcome {
    Optimal { counts: Vec<u64>, obj_val: f64 },
    Infeasible(String),
}

/// Solves `book` for maximum value.
pub fn solve(book: &RecipeBook) -> Result<Plan, PlanError> {
    plan(book, Goal::MaximizeValue)
}

pub fn plan(book: &RecipeBook, goal: Goal) -> Result<Plan, PlanError> {
    book.validate()?;

    match goal {
        Goal::MaximizeValue => match run(book, None)? {
            Outcome::Optimal { counts, obj_val } => Ok(finish(book, goal, counts, obj_val, true)),
            // All-zero production is always feasible and every recipe is
            // bounded by some stock, so this means the model is corrupt.
            Outcome::Infeasible(status) => Err(PlanError::Inconsistent {
                reason: format!("book `{}` solved with status {status}", book.name),
            }),
        },
        Goal::ReachTarget(target) => match run(book, Some(target))? {
            Outcome::Optimal { counts, obj_val } => Ok(finish(book, goal, counts, obj_val, true)),
            Outcome::Infeasible(status) => {
                warn!(
                    event = "target_unreachable",
                    book = %book.name,
                    wanted = target,
                    status = %status,
                );
                let mut best = plan(book, Goal::MaximizeValue)?;
                best.goal = goal;
                best.target_met = false;
                Ok(best)
            }
        },
    }
}

fn finish(book: &RecipeBook, goal: Goal, counts: Vec<u64>, obj_val: f64, target_met: bool) -> Plan {
    let objective = book.objective_of(&counts);
    let solver_objective = match goal {
        Goal::MaximizeValue => objective,
        Goal::ReachTarget(_) => counts.iter().sum(),
    };
    if (obj_val - solver_objective as f64).abs() > INTEGRALITY_TOLERANCE {
        warn!(
            event = "objective_mismatch",
            book = %book.name,
            solver = obj_val,
            recomputed = solver_objective,
        );
    }

    let quantities = book
        .recipes
        .iter()
        .zip(counts)
        .map(|(recipe, qty)| (recipe.name.clone(), qty))
        .collect();

    Plan {
        book: book.name.clone(),
        goal,
        quantities,
        objective,
        target_met,
    }
}

/// Builds and solves one SCIP model. `target` switches to fewest-units mode.
fn run(book: &RecipeBook, target: Option<u64>) -> Result<Outcome, PlanError> {
    let sense = if target.is_some() {
        ObjSense::Minimize
    } else {
        ObjSense::Maximize
    };

    let mut model = Model::new()
        .hide_output()
        .include_default_plugins()
        .create_prob(&book.name)
        .set_obj_sense(sense);

    let vars: Vec<_> = book
        .recipes
        .iter()
        .map(|recipe| {
            let obj = match target {
                Some(_) => 1.0,
                None => f64::from(recipe.value),
            };
            model.add_var(0., f64::INFINITY, obj, &recipe.name, VarType::Integer)
        })
        .collect();

    let mut rows = 0;
    for ingredient in &book.ingredients {
        let mut terms = Vec::new();
        let mut coefs = Vec::new();
        for (recipe, var) in book.recipes.iter().zip(&vars) {
            let qty = recipe.uses(&ingredient.name);
            if qty > 0 {
                terms.push(var);
                coefs.push(f64::from(qty));
            }
        }

        if terms.is_empty() {
            debug!(event = "skip_unused", ingredient = %ingredient.name);
            continue;
        }

        debug!(
            event = "add_constraint",
            ingredient = %ingredient.name,
            terms = terms.len(),
            stock = ingredient.stock,
        );
        model.add_cons(
            terms,
            &coefs,
            -f64::INFINITY,
            f64::from(ingredient.stock),
            &ingredient.name,
        );
        rows += 1;
    }

    if let Some(target) = target {
        let values: Vec<f64> = book.recipes.iter().map(|r| f64::from(r.value)).collect();
        model.add_cons(vars.iter().collect(), &values, target as f64, f64::INFINITY, "target");
        rows += 1;
    }

    info!(
        event = "solve_start",
        book = %book.name,
        variables = vars.len(),
        constraints = rows,
        wanted = ?target,
    );

    let solved_model = model.solve();
    let status = solved_model.status();

    info!(event = "solve_end", book = %book.name, status = ?status);

    match status {
        Status::Optimal => {
            let Some(sol) = solved_model.best_sol() else {
                return Err(PlanError::Solver {
                    status: "optimal without a stored solution".to_string(),
                });
            };

            let mut counts = Vec::with_capacity(vars.len());
            for (recipe, var) in book.recipes.iter().zip(&vars) {
                counts.push(to_count(&recipe.name, sol.val(var))?);
            }

            let obj_val = solved_model.obj_val();
            info!(event = "optimum", book = %book.name, objective = obj_val);
            Ok(Outcome::Optimal { counts, obj_val })
        }
        Status::Infeasible | Status::Unbounded | Status::Inforunbd => {
            Ok(Outcome::Infeasible(format!("{status:?}")))
        }
        _ => Err(PlanError::Solver {
            status: format!("{status:?}"),
        }),
    }
}

/// Converts a solver value to a unit count, rejecting anything that is not
/// a non-negative integer within tolerance.
fn to_count(name: &str, value: f64) -> Result<u64, PlanError> {
    let rounded = value.round();
    if (value - rounded).abs() > INTEGRALITY_TOLERANCE || rounded < 0.0 {
        return Err(PlanError::Inconsistent {
            reason: format!("variable `{name}` has value {value}, expected a non-negative integer"),
        });
    }
    Ok(rounded as u64)
}
