// Domain module: resource resolution, the production model and the solver contract

pub mod models;
pub mod production;
pub mod resources;
pub mod solver_service;
pub mod value_objects;

pub use models::*;
pub use production::*;
pub use resources::*;
pub use solver_service::*;
pub use value_objects::*;
