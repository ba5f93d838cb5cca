// Application layer: orchestration of one optimization run

pub mod optimizer;

pub use optimizer::{optimize, OptimizeError, ProductionOptimizer};
