// HiGHS adapter. Translates the domain model to the HiGHS row-problem API.

use crate::domain::{
    models::{OptimizationProblem, Solution, SolverStatistics},
    solver_service::{Result, SolverError, SolverService},
    value_objects::SolutionStatus,
};
use highs::{HighsModelStatus, RowProblem, Sense};
use std::time::Instant;

pub struct HighsSolver;

impl HighsSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HighsSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverService for HighsSolver {
    fn solve(&self, problem: &OptimizationProblem) -> Result<Solution> {
        self.validate(problem)?;

        let start = Instant::now();

        let mut pb = RowProblem::default();
        let cols: Vec<_> = problem
            .variables
            .iter()
            .enumerate()
            .map(|(i, def)| {
                let obj_coeff = problem.objective.coefficients[i];
                let upper = def.upper_bound.unwrap_or(f64::INFINITY);
                pb.add_integer_column(obj_coeff, def.lower_bound..upper)
            })
            .collect();

        for constraint in &problem.constraints {
            let terms: Vec<_> = constraint
                .coefficients
                .iter()
                .zip(cols.iter())
                .filter(|(&coeff, _)| coeff != 0.0)
                .map(|(&coeff, &col)| (col, coeff))
                .collect();
            pb.add_row(..=constraint.bound, &terms);
        }

        let solved = pb.optimise(Sense::Maximise).solve();

        let statistics = SolverStatistics {
            solve_time_ms: start.elapsed().as_secs_f64() * 1000.0,
            num_variables: problem.num_variables() as u32,
            num_constraints: problem.constraints.len() as u32,
        };

        match solved.status() {
            HighsModelStatus::Optimal => {
                let values = solved.get_solution().columns().to_vec();
                let objective_value = problem
                    .objective
                    .coefficients
                    .iter()
                    .zip(values.iter())
                    .map(|(&coeff, &value)| coeff * value)
                    .sum();
                Ok(Solution::optimal(objective_value, values).with_statistics(statistics))
            }
            HighsModelStatus::Infeasible => Ok(Solution::new(
                SolutionStatus::Infeasible,
                "no assignment satisfies every constraint",
            )
            .with_statistics(statistics)),
            HighsModelStatus::Unbounded | HighsModelStatus::UnboundedOrInfeasible => {
                Ok(Solution::new(
                    SolutionStatus::Unbounded,
                    "objective can grow without bound",
                )
                .with_statistics(statistics))
            }
            status => Err(SolverError::ExecutionFailed(format!(
                "HiGHS returned status: {:?}",
                status
            ))),
        }
    }

    fn name(&self) -> &str {
        "HiGHS"
    }
}
