// COIN-OR CBC adapter, via good_lp.

use crate::domain::{
    models::{OptimizationProblem, Solution, SolverStatistics},
    solver_service::{Result, SolverError, SolverService},
    value_objects::SolutionStatus,
};
use good_lp::{
    solvers::coin_cbc, variable, variables, Expression, ResolutionError, Solution as _,
    SolverModel, Variable as LpVariable,
};
use std::time::Instant;

pub struct CoinCbcSolver;

impl CoinCbcSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CoinCbcSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverService for CoinCbcSolver {
    fn solve(&self, problem: &OptimizationProblem) -> Result<Solution> {
        self.validate(problem)?;

        let start = Instant::now();

        let mut vars = variables!();
        let lp_vars: Vec<LpVariable> = problem
            .variables
            .iter()
            .map(|def| {
                let definition = variable().integer().min(def.lower_bound);
                let definition = match def.upper_bound {
                    Some(upper) => definition.max(upper),
                    None => definition,
                };
                vars.add(definition)
            })
            .collect();

        let mut objective: Expression = 0.into();
        for (&coeff, &var) in problem.objective.coefficients.iter().zip(lp_vars.iter()) {
            if coeff != 0.0 {
                objective += coeff * var;
            }
        }

        let mut model = vars.maximise(objective).using(coin_cbc::coin_cbc);
        for constraint in &problem.constraints {
            let mut consumed: Expression = 0.into();
            for (&coeff, &var) in constraint.coefficients.iter().zip(lp_vars.iter()) {
                if coeff != 0.0 {
                    consumed += coeff * var;
                }
            }
            model = model.with(consumed.leq(constraint.bound));
        }

        let outcome = model.solve();

        let statistics = SolverStatistics {
            solve_time_ms: start.elapsed().as_secs_f64() * 1000.0,
            num_variables: problem.num_variables() as u32,
            num_constraints: problem.constraints.len() as u32,
        };

        match outcome {
            Ok(lp_solution) => {
                let values: Vec<f64> = lp_vars.iter().map(|&var| lp_solution.value(var)).collect();
                let objective_value = problem
                    .objective
                    .coefficients
                    .iter()
                    .zip(values.iter())
                    .map(|(&coeff, &value)| coeff * value)
                    .sum();
                Ok(Solution::optimal(objective_value, values).with_statistics(statistics))
            }
            Err(ResolutionError::Infeasible) => Ok(Solution::new(
                SolutionStatus::Infeasible,
                "no assignment satisfies every constraint",
            )
            .with_statistics(statistics)),
            Err(ResolutionError::Unbounded) => Ok(Solution::new(
                SolutionStatus::Unbounded,
                "objective can grow without bound",
            )
            .with_statistics(statistics)),
            Err(err) => Err(SolverError::ExecutionFailed(format!("{:?}", err))),
        }
    }

    fn name(&self) -> &str {
        "COIN-OR CBC"
    }
}
