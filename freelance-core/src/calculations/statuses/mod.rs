//! Legal status models.
//!
//! Each status owns its configuration and turns one revenue figure into a
//! [`StatusResult`] through [`ComputeResult::compute_result`]. The
//! [`LegalStatus`] sum type is the single dispatch point over the three
//! statuses.

pub mod eurl;
pub mod micro;
pub mod sasu;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::ActivityType;
use crate::StatusResult;
use crate::calculations::common::is_unit_ratio;

pub use eurl::{SingleMemberLlc, SingleMemberLlcConfig};
pub use micro::{MicroEntrepreneur, MicroEntrepreneurConfig};
pub use sasu::{SimplifiedStockCompany, SimplifiedStockCompanyConfig};

/// Errors that can occur while computing a status result.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatusError {
    /// The micro-entrepreneur activity type is not a recognised category.
    #[error("invalid activity type '{value}', expected one of {valid}", valid = ActivityType::valid_codes())]
    InvalidActivityType { value: String },

    /// A configured rate or ratio lies outside `[0, 1]`.
    #[error("{name} must be between 0 and 1, got {value}")]
    InvalidRatio { name: &'static str, value: Decimal },

    /// A configured amount, such as the fixed charges, is negative.
    #[error("{name} must be non-negative, got {value}")]
    NegativeAmount { name: &'static str, value: Decimal },
}

/// Checks that a configured rate or ratio lies within `[0, 1]`.
pub(crate) fn ensure_unit_ratio(
    name: &'static str,
    value: Decimal,
) -> Result<(), StatusError> {
    if is_unit_ratio(value) {
        Ok(())
    } else {
        Err(StatusError::InvalidRatio { name, value })
    }
}

/// Checks that a configured amount is not negative.
pub(crate) fn ensure_non_negative(
    name: &'static str,
    value: Decimal,
) -> Result<(), StatusError> {
    if value < Decimal::ZERO {
        Err(StatusError::NegativeAmount { name, value })
    } else {
        Ok(())
    }
}

/// The capability every legal status provides.
pub trait ComputeResult {
    /// Computes the take-home breakdown for this status.
    ///
    /// # Errors
    ///
    /// Returns [`StatusError`] when the status configuration is invalid. No
    /// partial result is ever produced.
    fn compute_result(&self) -> Result<StatusResult, StatusError>;
}

/// Any of the supported legal statuses.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use freelance_core::calculations::{ComputeResult, LegalStatus, SingleMemberLlc};
///
/// let status = LegalStatus::from(SingleMemberLlc::new(dec!(80000), Default::default()));
/// let result = status.compute_result().unwrap();
///
/// assert_eq!(result.status(), "EURL (IR)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LegalStatus {
    MicroEntrepreneur(MicroEntrepreneur),
    SimplifiedStockCompany(SimplifiedStockCompany),
    SingleMemberLlc(SingleMemberLlc),
}

impl ComputeResult for LegalStatus {
    fn compute_result(&self) -> Result<StatusResult, StatusError> {
        match self {
            Self::MicroEntrepreneur(status) => status.compute_result(),
            Self::SimplifiedStockCompany(status) => status.compute_result(),
            Self::SingleMemberLlc(status) => status.compute_result(),
        }
    }
}

impl From<MicroEntrepreneur> for LegalStatus {
    fn from(status: MicroEntrepreneur) -> Self {
        Self::MicroEntrepreneur(status)
    }
}

impl From<SimplifiedStockCompany> for LegalStatus {
    fn from(status: SimplifiedStockCompany) -> Self {
        Self::SimplifiedStockCompany(status)
    }
}

impl From<SingleMemberLlc> for LegalStatus {
    fn from(status: SingleMemberLlc) -> Self {
        Self::SingleMemberLlc(status)
    }
}
