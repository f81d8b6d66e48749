use std::fmt;

use rust_decimal::Decimal;

/// Micro-regime activity category, each with its own fiscal allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityType {
    /// Commercial and craft services (BIC).
    Bic,
    /// Liberal professions (BNC).
    Bnc,
    /// Sale of goods.
    Vente,
}

impl ActivityType {
    pub const ALL: [ActivityType; 3] = [Self::Bic, Self::Bnc, Self::Vente];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bic => "BIC",
            Self::Bnc => "BNC",
            Self::Vente => "VENTE",
        }
    }

    /// Case-insensitive lookup. Surrounding whitespace is not trimmed.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "BIC" => Some(Self::Bic),
            "BNC" => Some(Self::Bnc),
            "VENTE" => Some(Self::Vente),
            _ => None,
        }
    }

    /// Share of revenue excluded from taxable income.
    pub fn allowance(&self) -> Decimal {
        match self {
            Self::Bic => Decimal::new(50, 2),
            Self::Bnc => Decimal::new(34, 2),
            Self::Vente => Decimal::new(71, 2),
        }
    }

    /// Comma-separated list of every recognised code, for error messages.
    pub fn valid_codes() -> String {
        Self::ALL
            .iter()
            .map(ActivityType::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ActivityType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
