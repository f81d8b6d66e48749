//! Side-by-side comparison of legal statuses for one revenue figure.
//!
//! The default run computes, in order:
//!
//! | Label                | Status |
//! |----------------------|--------|
//! | `AutoEntrepreneur`   | Micro-entrepreneur, default configuration |
//! | `SASU_100%_salaire`  | SASU, all salary |
//! | `SASU_70%_salaire`   | SASU, 70% salary / 30% dividends |
//! | `SASU_50%_salaire`   | SASU, 50% salary / 50% dividends |
//! | `SASU_0%_salaire`    | SASU, all dividends |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use freelance_core::run_all_scenarios;
//!
//! let scenarios = run_all_scenarios(dec!(60000)).unwrap();
//!
//! assert_eq!(
//!     scenarios.labels().collect::<Vec<_>>(),
//!     vec![
//!         "AutoEntrepreneur",
//!         "SASU_100%_salaire",
//!         "SASU_70%_salaire",
//!         "SASU_50%_salaire",
//!         "SASU_0%_salaire",
//!     ]
//! );
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::common::whole_percent;
use super::statuses::{
    ComputeResult, LegalStatus, MicroEntrepreneur, MicroEntrepreneurConfig, SimplifiedStockCompany,
    SimplifiedStockCompanyConfig, SingleMemberLlc, SingleMemberLlcConfig, StatusError,
};
use crate::{ScenarioMap, TaxSchedule};

pub const MICRO_ENTREPRENEUR_LABEL: &str = "AutoEntrepreneur";
pub const SINGLE_MEMBER_LLC_LABEL: &str = "EURL";

/// Scenario label for a SASU salary ratio, e.g. `SASU_70%_salaire`.
pub fn sasu_label(salary_ratio: Decimal) -> String {
    format!("SASU_{}%_salaire", whole_percent(salary_ratio))
}

/// Parameters of a scenario run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub micro_entrepreneur: MicroEntrepreneurConfig,

    /// Fixed charges applied to every SASU scenario.
    pub sasu_fixed_charges: Decimal,

    /// Reserve ratio applied to every SASU scenario.
    pub sasu_reserve_ratio: Decimal,

    /// One SASU scenario is computed per ratio, in this order.
    pub salary_ratios: Vec<Decimal>,

    /// When set, an EURL scenario is appended after the SASU ones.
    pub single_member_llc: Option<SingleMemberLlcConfig>,

    pub schedule: TaxSchedule,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            micro_entrepreneur: MicroEntrepreneurConfig::default(),
            sasu_fixed_charges: Decimal::ZERO,
            sasu_reserve_ratio: Decimal::ZERO,
            salary_ratios: vec![
                Decimal::ONE,
                Decimal::new(7, 1),
                Decimal::new(5, 1),
                Decimal::ZERO,
            ],
            single_member_llc: None,
            schedule: TaxSchedule::default(),
        }
    }
}

/// Runs every configured status for a revenue figure.
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    config: ScenarioConfig,
}

impl ScenarioRunner {
    pub fn new(config: ScenarioConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    /// Builds the labelled statuses in computation order.
    pub fn statuses(
        &self,
        revenue: Decimal,
    ) -> Vec<(String, LegalStatus)> {
        let config = &self.config;
        let mut statuses = Vec::with_capacity(config.salary_ratios.len() + 2);

        statuses.push((
            MICRO_ENTREPRENEUR_LABEL.to_string(),
            MicroEntrepreneur::new(revenue, config.micro_entrepreneur.clone())
                .with_schedule(config.schedule.clone())
                .into(),
        ));

        for &salary_ratio in &config.salary_ratios {
            let sasu_config = SimplifiedStockCompanyConfig {
                fixed_charges: config.sasu_fixed_charges,
                reserve_ratio: config.sasu_reserve_ratio,
                salary_ratio,
            };
            statuses.push((
                sasu_label(salary_ratio),
                SimplifiedStockCompany::new(revenue, sasu_config)
                    .with_schedule(config.schedule.clone())
                    .into(),
            ));
        }

        if let Some(eurl_config) = &config.single_member_llc {
            statuses.push((
                SINGLE_MEMBER_LLC_LABEL.to_string(),
                SingleMemberLlc::new(revenue, eurl_config.clone())
                    .with_schedule(config.schedule.clone())
                    .into(),
            ));
        }

        statuses
    }

    /// Computes every scenario and collects the results in order.
    ///
    /// # Errors
    ///
    /// Returns the first [`StatusError`] raised by a status.
    pub fn run(
        &self,
        revenue: Decimal,
    ) -> Result<ScenarioMap, StatusError> {
        let mut scenarios = ScenarioMap::new();

        for (label, status) in self.statuses(revenue) {
            let result = status.compute_result()?;
            debug!(scenario = %label, net_income = %result.net_income(), "scenario computed");
            scenarios.insert(label, result);
        }

        info!(revenue = %revenue, scenarios = scenarios.len(), "scenarios computed");
        Ok(scenarios)
    }
}

/// Runs the default comparison: micro-entrepreneur plus SASU at 100%, 70%,
/// 50% and 0% salary.
///
/// # Errors
///
/// Propagates any [`StatusError`]; none is expected with the defaults.
pub fn run_all_scenarios(revenue: Decimal) -> Result<ScenarioMap, StatusError> {
    ScenarioRunner::default().run(revenue)
}
