//! SASU (simplified joint-stock company) status.
//!
//! The founder is paid through a mix of salary and dividends:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Pre-salary profit: revenue − fixed charges |
//! | 2    | Reserve: profit × reserve ratio; distributable = profit − reserve |
//! | 3    | Gross salary: distributable × salary ratio; gross dividends: the rest |
//! | 4    | Salary contributions: gross salary × 65%; net salary = gross − contributions |
//! | 5    | Corporate taxable profit: distributable − gross salary |
//! | 6    | Corporate tax: corporate schedule on step 5 |
//! | 7    | Net dividends: gross dividends × 70% (30% flat withholding) |
//! | 8    | Net income: net salary + net dividends |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use freelance_core::calculations::{
//!     ComputeResult, SimplifiedStockCompany, SimplifiedStockCompanyConfig,
//! };
//!
//! let config = SimplifiedStockCompanyConfig {
//!     fixed_charges: dec!(10000),
//!     salary_ratio: dec!(0.5),
//!     ..Default::default()
//! };
//! let result = SimplifiedStockCompany::new(dec!(100000), config)
//!     .compute_result()
//!     .unwrap();
//!
//! assert_eq!(result.status(), "SASU (salaire 50%)");
//! assert_eq!(result.field("corporate_tax"), Some(dec!(7000.00)));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{ComputeResult, StatusError, ensure_non_negative, ensure_unit_ratio};
use crate::calculations::common::{round_half_up, whole_percent};
use crate::calculations::compute_progressive_tax;
use crate::{SimplifiedStockCompanyResult, StatusResult, TaxSchedule};

/// Combined employer and employee social charges on the gross salary.
pub const SALARY_CONTRIBUTION_RATE: Decimal = Decimal::from_parts(65, 0, 0, false, 2);

/// Flat withholding (PFU) on dividends: 12.8% income tax + 17.2% social levies.
pub const DIVIDEND_WITHHOLDING_RATE: Decimal = Decimal::from_parts(30, 0, 0, false, 2);

/// Configuration of the SASU computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimplifiedStockCompanyConfig {
    /// Operating charges deducted from revenue. Defaults to 0.
    pub fixed_charges: Decimal,

    /// Share of pre-salary profit set aside (R&D reserve). Not deductible.
    /// Defaults to 0.
    pub reserve_ratio: Decimal,

    /// Share of distributable profit paid as gross salary; the remainder is
    /// paid as gross dividends. Defaults to 1.0 (all salary).
    pub salary_ratio: Decimal,
}

impl Default for SimplifiedStockCompanyConfig {
    fn default() -> Self {
        Self {
            fixed_charges: Decimal::ZERO,
            reserve_ratio: Decimal::ZERO,
            salary_ratio: Decimal::ONE,
        }
    }
}

impl SimplifiedStockCompanyConfig {
    /// Validates the charges and ratios.
    ///
    /// # Errors
    ///
    /// Returns [`StatusError::NegativeAmount`] if `fixed_charges` is
    /// negative, and [`StatusError::InvalidRatio`] if `reserve_ratio` or
    /// `salary_ratio` is outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), StatusError> {
        ensure_non_negative("fixed_charges", self.fixed_charges)?;
        ensure_unit_ratio("reserve_ratio", self.reserve_ratio)?;
        ensure_unit_ratio("salary_ratio", self.salary_ratio)
    }
}

/// Calculator for the SASU status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimplifiedStockCompany {
    revenue: Decimal,
    config: SimplifiedStockCompanyConfig,
    schedule: TaxSchedule,
}

impl SimplifiedStockCompany {
    pub fn new(
        revenue: Decimal,
        config: SimplifiedStockCompanyConfig,
    ) -> Self {
        Self {
            revenue,
            config,
            schedule: TaxSchedule::default(),
        }
    }

    /// Replaces the tax schedule used for corporate tax.
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

    pub fn config(&self) -> &SimplifiedStockCompanyConfig {
        &self.config
    }

    /// Label such as `SASU (salaire 70%)`.
    pub fn status_label(&self) -> String {
        format!("SASU (salaire {}%)", whole_percent(self.config.salary_ratio))
    }

    fn pre_salary_profit(&self) -> Decimal {
        let profit = self.revenue - self.config.fixed_charges;
        if profit < Decimal::ZERO {
            warn!(
                revenue = %self.revenue,
                fixed_charges = %self.config.fixed_charges,
                profit = %profit,
                "Pre-salary profit is negative; corporate tax will be zero"
            );
        }
        profit
    }

    /// Splits profit into (reserve, distributable).
    fn reserve_split(
        &self,
        profit: Decimal,
    ) -> (Decimal, Decimal) {
        let reserve = profit * self.config.reserve_ratio;
        (reserve, profit - reserve)
    }

    /// Splits distributable profit into (gross salary, gross dividends).
    fn remuneration_split(
        &self,
        distributable: Decimal,
    ) -> (Decimal, Decimal) {
        let gross_salary = distributable * self.config.salary_ratio;
        let gross_dividends = distributable * (Decimal::ONE - self.config.salary_ratio);
        (gross_salary, gross_dividends)
    }

    fn corporate_tax(
        &self,
        corporate_profit: Decimal,
    ) -> Decimal {
        compute_progressive_tax(corporate_profit, &self.schedule.corporate_tax)
    }
}

impl ComputeResult for SimplifiedStockCompany {
    fn compute_result(&self) -> Result<StatusResult, StatusError> {
        self.config.validate()?;

        let profit = self.pre_salary_profit();
        let (reserve, distributable) = self.reserve_split(profit);
        let (gross_salary, gross_dividends) = self.remuneration_split(distributable);

        let salary_contributions = gross_salary * SALARY_CONTRIBUTION_RATE;
        let net_salary = round_half_up(gross_salary - salary_contributions);

        let corporate_profit = distributable - gross_salary;
        let corporate_tax = self.corporate_tax(corporate_profit);

        let net_dividends =
            round_half_up(gross_dividends * (Decimal::ONE - DIVIDEND_WITHHOLDING_RATE));

        debug!(
            distributable = %distributable,
            gross_salary = %gross_salary,
            gross_dividends = %gross_dividends,
            corporate_profit = %corporate_profit,
            corporate_tax = %corporate_tax,
            "SASU computed"
        );

        Ok(SimplifiedStockCompanyResult {
            status: self.status_label(),
            net_income: net_salary + net_dividends,
            net_salary,
            net_dividends,
            salary_contributions: round_half_up(salary_contributions),
            corporate_tax,
            reserve: round_half_up(reserve),
            gross_salary: round_half_up(gross_salary),
            gross_dividends: round_half_up(gross_dividends),
        }
        .into())
    }
}
