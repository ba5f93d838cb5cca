// The fixed two-product beverage model.

use super::models::{Constraint, Objective, OptimizationProblem, Variable};
use super::resources::ResourceSet;
use super::value_objects::Resource;

/// Per-unit consumption of each resource, indexed by [`Resource::ORDER`].
/// One lemonade takes 2 water, 1 sugar and 1 lemon juice; one juice takes
/// 1 water and 2 fruit puree.
const LEMONADE_RATES: [f64; 4] = [2.0, 1.0, 1.0, 0.0];
const JUICE_RATES: [f64; 4] = [1.0, 0.0, 0.0, 2.0];

/// Builds the declarative model for one production run: two non-negative
/// integer counts, one consumption constraint per resource, and the total
/// count as the maximized objective.
///
/// No solving happens here. For non-negative quantities the zero assignment
/// satisfies every constraint, so the model is always feasible.
pub fn build_problem(resources: &ResourceSet) -> OptimizationProblem {
    let mut problem = OptimizationProblem::new(Objective::maximize(vec![1.0, 1.0]))
        .with_name("beverage_production")
        .with_variables(vec![Variable::count("lemonade"), Variable::count("juice")]);

    for (i, resource) in Resource::ORDER.iter().enumerate() {
        problem = problem.add_constraint(
            Constraint::less_eq(
                vec![LEMONADE_RATES[i], JUICE_RATES[i]],
                resources.get(*resource),
            )
            .with_name(resource.name()),
        );
    }

    problem
}
