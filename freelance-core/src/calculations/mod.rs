//! Net income calculations for French freelance legal statuses.
//!
//! This module provides the progressive bracket calculator, the three
//! status models built on it, and the scenario runner that compares them.

pub mod common;
pub mod progressive;
pub mod scenarios;
pub mod statuses;

pub use progressive::compute_progressive_tax;
pub use scenarios::{ScenarioConfig, ScenarioRunner, run_all_scenarios, sasu_label};
pub use statuses::{
    ComputeResult, LegalStatus, MicroEntrepreneur, MicroEntrepreneurConfig, SimplifiedStockCompany,
    SimplifiedStockCompanyConfig, SingleMemberLlc, SingleMemberLlcConfig, StatusError,
};
