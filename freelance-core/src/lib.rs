pub mod calculations;
pub mod models;

pub use calculations::{ScenarioConfig, ScenarioRunner, StatusError, run_all_scenarios};
pub use models::*;
