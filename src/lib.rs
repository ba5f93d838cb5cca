// Domain layer: resource resolution and the production model
pub mod domain;

// Application layer: the optimize pipeline
pub mod application;

// Solver adapters: concrete implementations of SolverService
pub mod solver;

// Re-export commonly used types
pub use domain::{
    Constraint, Objective, OptimizationProblem, ResolveError, Resource, ResourceArgs, ResourceSet,
    Solution, SolutionStatus, SolverError, SolverService, SolverStatistics, Variable,
};

pub use application::{optimize, OptimizeError, ProductionOptimizer};

pub use solver::{SolverBackend, SolverFactory};

#[cfg(feature = "coin-cbc")]
pub use solver::CoinCbcSolver;
#[cfg(feature = "highs")]
pub use solver::HighsSolver;
