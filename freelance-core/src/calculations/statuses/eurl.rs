//! EURL (single-member limited liability company) status under the income
//! tax regime, with the manager treated as self-employed (TNS).
//!
//! The contribution rate is a flat approximation of TNS contributions, which
//! range between roughly 40% and 50% in practice.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{ComputeResult, StatusError, ensure_non_negative, ensure_unit_ratio};
use crate::calculations::common::round_half_up;
use crate::calculations::compute_progressive_tax;
use crate::{SingleMemberLlcResult, StatusResult, TaxSchedule};

/// Configuration of the EURL computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SingleMemberLlcConfig {
    /// Operating charges deducted from revenue. Defaults to 0.
    pub fixed_charges: Decimal,

    /// Flat TNS contribution rate on profit after reserve. Defaults to 45%.
    pub contribution_rate: Decimal,

    /// Share of profit kept in the company. Defaults to 0.
    pub reserve_ratio: Decimal,
}

impl Default for SingleMemberLlcConfig {
    fn default() -> Self {
        Self {
            fixed_charges: Decimal::ZERO,
            contribution_rate: Decimal::new(45, 2),
            reserve_ratio: Decimal::ZERO,
        }
    }
}

impl SingleMemberLlcConfig {
    /// Validates the charges and rates.
    ///
    /// # Errors
    ///
    /// Returns [`StatusError::NegativeAmount`] if `fixed_charges` is
    /// negative, and [`StatusError::InvalidRatio`] if `contribution_rate` or
    /// `reserve_ratio` is outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), StatusError> {
        ensure_non_negative("fixed_charges", self.fixed_charges)?;
        ensure_unit_ratio("contribution_rate", self.contribution_rate)?;
        ensure_unit_ratio("reserve_ratio", self.reserve_ratio)
    }
}

/// Calculator for the EURL status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleMemberLlc {
    revenue: Decimal,
    config: SingleMemberLlcConfig,
    schedule: TaxSchedule,
}

impl SingleMemberLlc {
    pub fn new(
        revenue: Decimal,
        config: SingleMemberLlcConfig,
    ) -> Self {
        Self {
            revenue,
            config,
            schedule: TaxSchedule::default(),
        }
    }

    /// Replaces the tax schedule used for income tax.
    pub fn with_schedule(
        mut self,
        schedule: TaxSchedule,
    ) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn revenue(&self) -> Decimal {
        self.revenue
    }

    pub fn config(&self) -> &SingleMemberLlcConfig {
        &self.config
    }
}

impl ComputeResult for SingleMemberLlc {
    fn compute_result(&self) -> Result<StatusResult, StatusError> {
        self.config.validate()?;

        let profit = self.revenue - self.config.fixed_charges;
        let reserve = profit * self.config.reserve_ratio;
        let net_profit = profit - reserve;

        let contributions = net_profit * self.config.contribution_rate;
        let taxable_income = net_profit - contributions;
        if taxable_income < Decimal::ZERO {
            warn!(
                taxable_income = %taxable_income,
                "Taxable income is negative; income tax will be zero"
            );
        }

        let income_tax = compute_progressive_tax(taxable_income, &self.schedule.income_tax);
        let net_income = taxable_income - income_tax;

        debug!(
            net_profit = %net_profit,
            contributions = %contributions,
            taxable_income = %taxable_income,
            income_tax = %income_tax,
            "EURL computed"
        );

        Ok(SingleMemberLlcResult {
            status: "EURL (IR)".to_string(),
            net_income: round_half_up(net_income),
            taxable_income: round_half_up(taxable_income),
            contributions: round_half_up(contributions),
            income_tax,
            reserve: round_half_up(reserve),
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn compute(config: SingleMemberLlcConfig, revenue: Decimal) -> SingleMemberLlcResult {
        match SingleMemberLlc::new(revenue, config).compute_result().unwrap() {
            StatusResult::SingleMemberLlc(result) => result,
            other => panic!("unexpected result variant: {other:?}"),
        }
    }

    #[test]
    fn default_contribution_rate_is_45_percent() {
        assert_eq!(SingleMemberLlcConfig::default().contribution_rate, dec!(0.45));
    }

    #[test]
    fn eurl_with_fixed_charges() {
        let config = SingleMemberLlcConfig {
            fixed_charges: dec!(10000),
            ..Default::default()
        };

        let result = compute(config, dec!(80000));

        assert_eq!(
            result,
            SingleMemberLlcResult {
                status: "EURL (IR)".to_string(),
                net_income: dec!(33663.77),
                taxable_income: dec!(38500.00),
                contributions: dec!(31500.00),
                income_tax: dec!(4836.23),
                reserve: dec!(0.00),
            }
        );
        assert!(result.contributions > dec!(0));
        assert!(result.income_tax >= dec!(0));
        assert!(result.net_income > dec!(0));
    }

    #[test]
    fn reserve_is_ratio_of_profit() {
        let config = SingleMemberLlcConfig {
            fixed_charges: dec!(5000),
            reserve_ratio: dec!(0.10),
            ..Default::default()
        };

        let result = compute(config, dec!(60000));

        assert!((result.reserve - dec!(0.10) * dec!(55000)).abs() <= dec!(0.01));
        assert_eq!(result.contributions, dec!(22275.00));
        assert_eq!(result.income_tax, dec!(1752.41));
        assert_eq!(result.net_income, dec!(25472.59));
    }

    #[test]
    fn contribution_rate_is_configurable() {
        let config = SingleMemberLlcConfig {
            contribution_rate: dec!(0.40),
            ..Default::default()
        };

        let result = compute(config, dec!(50000));

        assert_eq!(result.contributions, dec!(20000.00));
        assert_eq!(result.taxable_income, dec!(30000.00));
    }

    #[test]
    fn losses_owe_no_income_tax() {
        let config = SingleMemberLlcConfig {
            fixed_charges: dec!(20000),
            ..Default::default()
        };

        let result = compute(config, dec!(10000));

        assert_eq!(result.income_tax, dec!(0));
        assert_eq!(result.net_income, dec!(-5500.00));
    }

    #[test]
    fn contribution_rate_out_of_range_is_rejected() {
        let config = SingleMemberLlcConfig {
            contribution_rate: dec!(-0.45),
            ..Default::default()
        };

        let result = SingleMemberLlc::new(dec!(80000), config).compute_result();

        assert_eq!(
            result,
            Err(StatusError::InvalidRatio {
                name: "contribution_rate",
                value: dec!(-0.45),
            })
        );
    }

    #[test]
    fn negative_fixed_charges_are_rejected() {
        let config = SingleMemberLlcConfig {
            fixed_charges: dec!(-1),
            ..Default::default()
        };

        let result = SingleMemberLlc::new(dec!(80000), config).compute_result();

        assert_eq!(
            result,
            Err(StatusError::NegativeAmount {
                name: "fixed_charges",
                value: dec!(-1),
            })
        );
    }
}
