use crate::kitchen::RecipeBook;
use crate::solver::Goal;

/// An integer production plan for one recipe book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub book: String,
    pub goal: Goal,
    /// Units per recipe, in recipe order.
    pub quantities: Vec<(String, u64)>,
    /// Objective value, computed from the integer quantities.
    pub objective: u64,
    /// False only when a [`Goal::ReachTarget`] fell back to the best value.
    pub target_met: bool,
}

/// How much of one ingredient a plan consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Usage {
    pub ingredient: String,
    pub used: u64,
    pub stock: u64,
}

impl Usage {
    pub fn leftover(&self) -> u64 {
        self.stock.saturating_sub(self.used)
    }

    pub fn is_tight(&self) -> bool {
        self.used == self.stock
    }
}

impl Plan {
    pub fn value_of(&self, recipe: &str) -> Option<u64> {
        self.quantities
            .iter()
            .find(|(name, _)| name == recipe)
            .map(|(_, qty)| *qty)
    }

    pub fn total_units(&self) -> u64 {
        self.quantities.iter().map(|(_, qty)| qty).sum()
    }

    fn counts(&self) -> Vec<u64> {
        self.quantities.iter().map(|(_, qty)| *qty).collect()
    }

    pub fn is_feasible(&self, book: &RecipeBook) -> bool {
        book.fits(&self.counts())
    }

    pub fn usage(&self, book: &RecipeBook) -> Vec<Usage> {
        book.consumption(&self.counts())
            .into_iter()
            .zip(&book.ingredients)
            .map(|(used, ingredient)| Usage {
                ingredient: ingredient.name.clone(),
                used,
                stock: u64::from(ingredient.stock),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_plan() -> Plan {
        let quantities = [
            ("marteau", 10),
            ("neige", 11),
            ("biscuit", 8),
            ("mousse", 9),
            ("cappuccino", 7),
            ("gateau", 10),
        ];
        Plan {
            book: "desserts".into(),
            goal: Goal::MaximizeValue,
            quantities: quantities
                .into_iter()
                .map(|(name, qty)| (name.to_string(), qty))
                .collect(),
            objective: 55,
            target_met: true,
        }
    }

    #[test]
    fn lookups() {
        let plan = reference_plan();
        assert_eq!(plan.value_of("neige"), Some(11));
        assert_eq!(plan.value_of("tiramisu"), None);
        assert_eq!(plan.total_units(), 55);
    }

    #[test]
    fn usage_reports_tight_ingredients() {
        let book = RecipeBook::desserts();
        let plan = reference_plan();
        assert!(plan.is_feasible(&book));

        let usage = plan.usage(&book);
        assert_eq!(usage.len(), 12);
        let tight: Vec<&str> = usage
            .iter()
            .filter(|u| u.is_tight())
            .map(|u| u.ingredient.as_str())
            .collect();
        assert_eq!(tight, ["oeuf", "amandes", "lait", "sucre", "cacao"]);

        let farine = usage.iter().find(|u| u.ingredient == "farine").unwrap();
        assert_eq!((farine.used, farine.leftover()), (19, 8));
    }

    #[test]
    fn overdrawn_plan_is_infeasible() {
        let book = RecipeBook::desserts();
        let mut plan = reference_plan();
        plan.quantities[4].1 += 1;
        assert!(!plan.is_feasible(&book));
    }
}
