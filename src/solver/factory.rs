use crate::domain::solver_service::{Result, SolverError, SolverService};
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "coin-cbc")]
use super::CoinCbcSolver;
#[cfg(feature = "highs")]
use super::HighsSolver;

/// Solver backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverBackend {
    /// Automatically select the best available backend
    Auto,
    /// COIN-OR CBC solver
    CoinCbc,
    /// HiGHS solver
    Highs,
}

impl fmt::Display for SolverBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverBackend::Auto => write!(f, "Auto"),
            SolverBackend::CoinCbc => write!(f, "COIN-OR CBC"),
            SolverBackend::Highs => write!(f, "HiGHS"),
        }
    }
}

/// Factory for creating solver instances from a backend selection.
pub struct SolverFactory;

impl SolverFactory {
    /// Create a solver for a specific backend. Backends compiled out of this
    /// build report [`SolverError::Unavailable`].
    pub fn create(backend: SolverBackend) -> Result<Arc<dyn SolverService>> {
        match backend {
            SolverBackend::Auto => Self::default_solver(),
            #[cfg(feature = "coin-cbc")]
            SolverBackend::CoinCbc => Ok(Arc::new(CoinCbcSolver::new())),
            #[cfg(feature = "highs")]
            SolverBackend::Highs => Ok(Arc::new(HighsSolver::new())),
            #[allow(unreachable_patterns)]
            other => Err(SolverError::Unavailable(other.to_string())),
        }
    }

    /// Default backend for this build: HiGHS when compiled in, otherwise CBC.
    pub fn default_solver() -> Result<Arc<dyn SolverService>> {
        #[cfg(feature = "highs")]
        return Ok(Arc::new(HighsSolver::new()));
        #[cfg(all(feature = "coin-cbc", not(feature = "highs")))]
        return Ok(Arc::new(CoinCbcSolver::new()));
        #[cfg(not(any(feature = "highs", feature = "coin-cbc")))]
        Err(SolverError::Unavailable(
            "no solver backend enabled; build with the `highs` or `coin-cbc` feature".to_string(),
        ))
    }
}
