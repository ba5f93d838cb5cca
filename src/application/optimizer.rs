// One optimization run: resolve arguments, build a fresh model, solve,
// read the count back.

use crate::domain::models::Solution;
use crate::domain::production::build_problem;
use crate::domain::resources::{ResolveError, ResourceArgs};
use crate::domain::solver_service::{SolverError, SolverService};
use crate::domain::value_objects::SolutionStatus;
use crate::solver::{SolverBackend, SolverFactory};
use log::debug;
use std::sync::Arc;

/// Error surface of [`ProductionOptimizer::optimize`].
#[derive(Debug, thiserror::Error)]
pub enum OptimizeError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Solver(#[from] SolverError),

    /// The backend ended in a terminal non-optimal state. Cannot happen for
    /// a fully-resolved, non-negative resource set.
    #[error("solve ended with status: {0}")]
    UnexpectedStatus(SolutionStatus),
}

/// Computes the maximum total number of drinks producible from a set of
/// resource quantities.
///
/// Each call builds its own model, hands it to the solver and discards it
/// after extracting the count; nothing is shared between invocations, so a
/// single optimizer can be used from concurrent call sites.
pub struct ProductionOptimizer {
    solver: Arc<dyn SolverService>,
}

impl ProductionOptimizer {
    pub fn new(solver: Arc<dyn SolverService>) -> Self {
        Self { solver }
    }

    /// Optimizer backed by the default solver for this build.
    pub fn with_default_solver() -> Result<Self, OptimizeError> {
        Ok(Self::new(SolverFactory::default_solver()?))
    }

    /// Optimizer backed by a specific [`SolverBackend`].
    pub fn with_backend(backend: SolverBackend) -> Result<Self, OptimizeError> {
        Ok(Self::new(SolverFactory::create(backend)?))
    }

    /// Maximum total number of drinks producible from the supplied
    /// resources. Fails before any model is built if the arguments do not
    /// resolve to all four quantities.
    pub fn optimize(&self, args: ResourceArgs) -> Result<u64, OptimizeError> {
        let resources = args.resolve()?;
        let problem = build_problem(&resources);
        debug!(
            "solving '{}' with {}: {} variables, {} constraints",
            problem.name,
            self.solver.name(),
            problem.num_variables(),
            problem.constraints.len()
        );

        let solution = self.solver.solve(&problem)?;
        debug!(
            "solve finished in {:.3} ms: {} ({})",
            solution.statistics.solve_time_ms, solution.status, solution.message
        );

        extract_count(&solution)
    }
}

/// One-shot convenience around [`ProductionOptimizer`] with the default
/// solver.
pub fn optimize(args: ResourceArgs) -> Result<u64, OptimizeError> {
    ProductionOptimizer::with_default_solver()?.optimize(args)
}

/// Reads the solved objective as an integer count.
///
/// Integer variables can still come back carrying float noise (49.999999
/// for an exact 50), so the objective is rounded to the nearest integer
/// rather than truncated.
fn extract_count(solution: &Solution) -> Result<u64, OptimizeError> {
    if !solution.is_optimal() {
        return Err(OptimizeError::UnexpectedStatus(solution.status));
    }
    let objective = solution
        .objective_value
        .ok_or(OptimizeError::UnexpectedStatus(solution.status))?;
    Ok(objective.round() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::OptimizationProblem;
    use crate::domain::solver_service::Result as SolverResult;

    struct FixedObjectiveSolver {
        objective: f64,
    }

    impl SolverService for FixedObjectiveSolver {
        fn solve(&self, problem: &OptimizationProblem) -> SolverResult<Solution> {
            Ok(Solution::optimal(
                self.objective,
                vec![0.0; problem.num_variables()],
            ))
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    struct UnreachableSolver;

    impl SolverService for UnreachableSolver {
        fn solve(&self, _problem: &OptimizationProblem) -> SolverResult<Solution> {
            panic!("solver must not be reached for unresolved arguments");
        }

        fn name(&self) -> &str {
            "unreachable"
        }
    }

    struct InfeasibleSolver;

    impl SolverService for InfeasibleSolver {
        fn solve(&self, _problem: &OptimizationProblem) -> SolverResult<Solution> {
            Ok(Solution::new(SolutionStatus::Infeasible, "no feasible assignment"))
        }

        fn name(&self) -> &str {
            "infeasible"
        }
    }

    fn full_args() -> ResourceArgs {
        ResourceArgs::positional([100.0, 50.0, 30.0, 40.0])
    }

    #[test]
    fn objective_noise_below_the_integer_is_rounded_up() {
        let optimizer =
            ProductionOptimizer::new(Arc::new(FixedObjectiveSolver { objective: 49.999999 }));
        assert_eq!(optimizer.optimize(full_args()).unwrap(), 50);
    }

    #[test]
    fn objective_noise_above_the_integer_is_rounded_down() {
        let optimizer =
            ProductionOptimizer::new(Arc::new(FixedObjectiveSolver { objective: 50.000001 }));
        assert_eq!(optimizer.optimize(full_args()).unwrap(), 50);
    }

    #[test]
    fn incomplete_arguments_fail_before_the_solver_runs() {
        let optimizer = ProductionOptimizer::new(Arc::new(UnreachableSolver));
        let err = optimizer
            .optimize(ResourceArgs::positional([100.0, 50.0]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Expected 4 arguments, received 2.");
    }

    #[test]
    fn negative_quantities_fail_before_the_solver_runs() {
        let optimizer = ProductionOptimizer::new(Arc::new(UnreachableSolver));
        let err = optimizer
            .optimize(ResourceArgs::positional([100.0, 50.0, 30.0, -40.0]))
            .unwrap_err();
        assert!(matches!(
            err,
            OptimizeError::Resolve(ResolveError::NegativeQuantity { .. })
        ));
    }

    #[test]
    fn terminal_non_optimal_status_is_an_error() {
        let optimizer = ProductionOptimizer::new(Arc::new(InfeasibleSolver));
        let err = optimizer.optimize(full_args()).unwrap_err();
        assert!(matches!(
            err,
            OptimizeError::UnexpectedStatus(SolutionStatus::Infeasible)
        ));
    }
}
