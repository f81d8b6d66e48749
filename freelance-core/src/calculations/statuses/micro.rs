//! Micro-entrepreneur (auto-entrepreneur) status.
//!
//! Social contributions are a flat share of revenue. Income tax applies
//! the progressive schedule to revenue minus the fiscal allowance of the
//! activity category:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Social contributions: revenue × contribution rate |
//! | 2    | Taxable income: revenue × (1 − allowance) |
//! | 3    | Income tax: progressive schedule on step 2 |
//! | 4    | Net income: revenue − step 1 − step 3 |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use freelance_core::calculations::{ComputeResult, MicroEntrepreneur, MicroEntrepreneurConfig};
//!
//! let config = MicroEntrepreneurConfig {
//!     activity_type: "bic".to_string(),
//!     ..Default::default()
//! };
//! let result = MicroEntrepreneur::new(dec!(50000), config).compute_result().unwrap();
//!
//! assert_eq!(result.status(), "Auto-entrepreneur (BIC)");
//! assert_eq!(result.field("taxable_income"), Some(dec!(25000.00)));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{ComputeResult, StatusError, ensure_unit_ratio};
use crate::calculations::common::round_half_up;
use crate::calculations::compute_progressive_tax;
use crate::{ActivityType, MicroEntrepreneurResult, StatusResult, TaxSchedule};

/// Configuration of the micro-entrepreneur computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MicroEntrepreneurConfig {
    /// Flat social contribution rate applied to revenue. Defaults to 22%.
    pub contribution_rate: Decimal,

    /// Activity category code (`BIC`, `BNC` or `VENTE`), any case.
    ///
    /// Kept as free text so an unknown code surfaces as
    /// [`StatusError::InvalidActivityType`] at computation time. Defaults
    /// to `BNC`.
    pub activity_type: String,
}

impl Default for MicroEntrepreneurConfig {
    fn default() -> Self {
        Self {
            contribution_rate: Decimal::new(22, 2),
            activity_type: ActivityType::Bnc.as_str().to_string(),
        }
    }
}

/// Calculator for the micro-entrepreneur status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MicroEntrepreneur {
    revenue: Decimal,
    config: MicroEntrepreneurConfig,
    schedule: TaxSchedule,
}

impl MicroEntrepreneur {
    /// Creates a calculator using the built-in tax schedule.
    ///
    /// The activity type is normalized to uppercase.
    pub fn new(
        revenue: Decimal,
        mut config: MicroEntrepreneurConfig,
    ) -> Self {
        config.activity_type = config.activity_type.to_uppercase();
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

    pub fn config(&self) -> &MicroEntrepreneurConfig {
        &self.config
    }

    /// Resolves the configured activity code.
    fn activity_type(&self) -> Result<ActivityType, StatusError> {
        ActivityType::parse(&self.config.activity_type).ok_or_else(|| {
            StatusError::InvalidActivityType {
                value: self.config.activity_type.clone(),
            }
        })
    }

    /// Social contributions are due on the whole revenue, regardless of the allowance.
    fn social_contributions(&self) -> Decimal {
        self.revenue * self.config.contribution_rate
    }

    fn taxable_income(
        &self,
        activity: ActivityType,
    ) -> Decimal {
        self.revenue * (Decimal::ONE - activity.allowance())
    }
}

impl ComputeResult for MicroEntrepreneur {
    fn compute_result(&self) -> Result<StatusResult, StatusError> {
        let activity = self.activity_type()?;
        ensure_unit_ratio("contribution_rate", self.config.contribution_rate)?;

        if self.revenue < Decimal::ZERO {
            warn!(revenue = %self.revenue, "Revenue is negative; income tax will be zero");
        }

        let social_contributions = self.social_contributions();
        let taxable_income = self.taxable_income(activity);
        let income_tax = compute_progressive_tax(taxable_income, &self.schedule.income_tax);
        let net_income = self.revenue - social_contributions - income_tax;

        debug!(
            activity = %activity,
            social_contributions = %social_contributions,
            taxable_income = %taxable_income,
            income_tax = %income_tax,
            "micro-entrepreneur computed"
        );

        Ok(MicroEntrepreneurResult {
            status: format!("Auto-entrepreneur ({activity})"),
            net_income: round_half_up(net_income),
            social_contributions: round_half_up(social_contributions),
            taxable_income: round_half_up(taxable_income),
            income_tax: round_half_up(income_tax),
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use tracing_subscriber::fmt::format::FmtSpan;

    use super::*;

    fn compute(
        revenue: Decimal,
        activity_type: &str,
    ) -> Result<MicroEntrepreneurResult, StatusError> {
        let config = MicroEntrepreneurConfig {
            activity_type: activity_type.to_string(),
            ..Default::default()
        };
        match MicroEntrepreneur::new(revenue, config).compute_result()? {
            StatusResult::MicroEntrepreneur(result) => Ok(result),
            other => panic!("unexpected result variant: {other:?}"),
        }
    }

    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_span_events(FmtSpan::NONE)
            .with_test_writer()
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    // =========================================================================
    // Configuration tests
    // =========================================================================

    #[test]
    fn default_config_is_bnc_at_22_percent() {
        let config = MicroEntrepreneurConfig::default();

        assert_eq!(config.contribution_rate, dec!(0.22));
        assert_eq!(config.activity_type, "BNC");
    }

    #[test]
    fn new_normalizes_activity_type_to_uppercase() {
        let config = MicroEntrepreneurConfig {
            activity_type: "vente".to_string(),
            ..Default::default()
        };

        let micro = MicroEntrepreneur::new(dec!(1000), config);

        assert_eq!(micro.config().activity_type, "VENTE");
    }

    // =========================================================================
    // Computation tests
    // =========================================================================

    #[test]
    fn bnc_at_50000() {
        let result = compute(dec!(50000), "BNC").unwrap();

        assert_eq!(
            result,
            MicroEntrepreneurResult {
                status: "Auto-entrepreneur (BNC)".to_string(),
                net_income: dec!(35813.77),
                social_contributions: dec!(11000.00),
                taxable_income: dec!(33000.00),
                income_tax: dec!(3186.23),
            }
        );
    }

    #[test]
    fn bnc_net_income_is_between_30000_and_revenue() {
        let result = compute(dec!(50000), "bnc").unwrap();

        assert!(result.net_income >= dec!(30000));
        assert!(result.net_income <= dec!(50000));
    }

    #[test]
    fn bnc_at_100000_keeps_at_least_60000() {
        let result = compute(dec!(100000), "BNC").unwrap();

        assert_eq!(result.net_income, dec!(64913.77));
        assert!(result.net_income >= dec!(60000));
    }

    #[test]
    fn bic_uses_50_percent_allowance() {
        let result = compute(dec!(50000), "BIC").unwrap();

        assert_eq!(result.taxable_income, dec!(25000.00));
        assert_eq!(result.income_tax, dec!(1507.66));
        assert_eq!(result.net_income, dec!(37492.34));
    }

    #[test]
    fn vente_uses_71_percent_allowance() {
        let result = compute(dec!(50000), "Vente").unwrap();

        assert_eq!(result.status, "Auto-entrepreneur (VENTE)");
        assert_eq!(result.taxable_income, dec!(14500.00));
        assert_eq!(result.income_tax, dec!(352.66));
    }

    #[test]
    fn contributions_are_due_below_the_tax_threshold() {
        let result = compute(dec!(10000), "BNC").unwrap();

        assert_eq!(result.income_tax, dec!(0));
        assert_eq!(result.social_contributions, dec!(2200.00));
        assert_eq!(result.net_income, dec!(7800.00));
    }

    #[test]
    fn net_income_stays_within_revenue_across_range() {
        for revenue in [dec!(1), dec!(25000), dec!(120000), dec!(500000)] {
            for activity in ["BIC", "BNC", "VENTE"] {
                let result = compute(revenue, activity).unwrap();

                assert!(result.net_income <= revenue);
                assert!(result.net_income >= dec!(0));
            }
        }
    }

    #[test]
    fn zero_revenue_yields_zero_everywhere() {
        let result = compute(dec!(0), "BNC").unwrap();

        assert_eq!(result.net_income, dec!(0));
        assert_eq!(result.income_tax, dec!(0));
    }

    #[test]
    fn negative_revenue_is_not_an_error() {
        let _guard = init_test_tracing();

        let result = compute(dec!(-1000), "BNC").unwrap();

        assert_eq!(result.income_tax, dec!(0));
        assert_eq!(result.net_income, dec!(-780.00));
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn invalid_activity_type_is_rejected() {
        let result = compute(dec!(50000), "xyz");

        assert_eq!(
            result,
            Err(StatusError::InvalidActivityType {
                value: "XYZ".to_string(),
            })
        );
    }

    #[test]
    fn invalid_activity_type_error_lists_valid_options() {
        let error = compute(dec!(50000), "XYZ").unwrap_err();
        let message = error.to_string();

        for code in ["BIC", "BNC", "VENTE"] {
            assert!(message.contains(code), "missing {code} in {message}");
        }
    }

    #[test]
    fn contribution_rate_above_one_is_rejected() {
        let config = MicroEntrepreneurConfig {
            contribution_rate: dec!(1.5),
            ..Default::default()
        };

        let result = MicroEntrepreneur::new(dec!(50000), config).compute_result();

        assert_eq!(
            result,
            Err(StatusError::InvalidRatio {
                name: "contribution_rate",
                value: dec!(1.5),
            })
        );
    }
}
