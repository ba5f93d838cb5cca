use super::value_objects::SolutionStatus;

/// Decision variable counting units of one product.
///
/// Every variable in this model is integer-typed: fractional drinks cannot
/// be produced. Lower bound defaults to zero, no upper bound.
#[derive(Debug, Clone)]
pub struct Variable {
    pub name: String,
    pub lower_bound: f64,
    pub upper_bound: Option<f64>,
}

impl Variable {
    pub fn count(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lower_bound: 0.0,
            upper_bound: None,
        }
    }

    pub fn with_bounds(mut self, lower: f64, upper: Option<f64>) -> Self {
        self.lower_bound = lower;
        self.upper_bound = upper;
        self
    }
}

/// Linear consumption constraint of the form `Σ coefficient·variable ≤ bound`.
#[derive(Debug, Clone)]
pub struct Constraint {
    pub coefficients: Vec<f64>,
    pub bound: f64,
    pub name: String,
}

impl Constraint {
    pub fn less_eq(coefficients: Vec<f64>, bound: f64) -> Self {
        Self {
            coefficients,
            bound,
            name: String::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn num_variables(&self) -> usize {
        self.coefficients.len()
    }
}

/// Maximization objective over the decision variables.
#[derive(Debug, Clone)]
pub struct Objective {
    pub coefficients: Vec<f64>,
}

impl Objective {
    pub fn maximize(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }

    pub fn num_variables(&self) -> usize {
        self.coefficients.len()
    }
}

/// Declarative optimization model handed to a solver backend.
///
/// Built fresh for every call, never mutated after being handed over, and
/// discarded once the result is extracted.
#[derive(Debug, Clone)]
pub struct OptimizationProblem {
    pub name: String,
    pub objective: Objective,
    pub constraints: Vec<Constraint>,
    pub variables: Vec<Variable>,
}

impl OptimizationProblem {
    pub fn new(objective: Objective) -> Self {
        Self {
            name: String::new(),
            objective,
            constraints: Vec::new(),
            variables: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn add_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn with_variables(mut self, variables: Vec<Variable>) -> Self {
        self.variables = variables;
        self
    }

    pub fn num_variables(&self) -> usize {
        self.objective.num_variables()
    }
}

/// Statistics about the solve process
#[derive(Debug, Clone, Default)]
pub struct SolverStatistics {
    pub solve_time_ms: f64,
    pub num_variables: u32,
    pub num_constraints: u32,
}

/// Solved-model view returned by a solver backend.
#[derive(Debug, Clone)]
pub struct Solution {
    pub status: SolutionStatus,
    pub objective_value: Option<f64>,
    pub variable_values: Vec<f64>,
    pub message: String,
    pub statistics: SolverStatistics,
}

impl Solution {
    pub fn new(status: SolutionStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            objective_value: None,
            variable_values: Vec::new(),
            message: message.into(),
            statistics: SolverStatistics::default(),
        }
    }

    pub fn optimal(value: f64, variable_values: Vec<f64>) -> Self {
        Self {
            status: SolutionStatus::Optimal,
            objective_value: Some(value),
            variable_values,
            message: "Optimal solution found".to_string(),
            statistics: SolverStatistics::default(),
        }
    }

    pub fn with_statistics(mut self, statistics: SolverStatistics) -> Self {
        self.statistics = statistics;
        self
    }

    pub fn is_optimal(&self) -> bool {
        self.status == SolutionStatus::Optimal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_variables_start_at_zero_and_are_unbounded_above() {
        let var = Variable::count("lemonade");
        assert_eq!(var.lower_bound, 0.0);
        assert!(var.upper_bound.is_none());
    }

    #[test]
    fn problem_builder_accumulates_constraints() {
        let problem = OptimizationProblem::new(Objective::maximize(vec![1.0, 1.0]))
            .with_name("test")
            .add_constraint(Constraint::less_eq(vec![2.0, 1.0], 100.0).with_name("first"))
            .add_constraint(Constraint::less_eq(vec![0.0, 2.0], 40.0));
        assert_eq!(problem.num_variables(), 2);
        assert_eq!(problem.constraints.len(), 2);
        assert_eq!(problem.constraints[0].name, "first");
    }

    #[test]
    fn optimal_solution_carries_its_objective() {
        let solution = Solution::optimal(50.0, vec![30.0, 20.0]);
        assert!(solution.is_optimal());
        assert_eq!(solution.objective_value, Some(50.0));
    }

    #[test]
    fn non_optimal_solution_has_no_objective() {
        let solution = Solution::new(SolutionStatus::Infeasible, "no feasible assignment");
        assert!(!solution.is_optimal());
        assert!(solution.objective_value.is_none());
    }
}
