use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Outcome of the micro-entrepreneur computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MicroEntrepreneurResult {
    /// Human-readable label, e.g. `Auto-entrepreneur (BNC)`.
    pub status: String,
    pub net_income: Decimal,
    pub social_contributions: Decimal,
    pub taxable_income: Decimal,
    pub income_tax: Decimal,
}

/// Outcome of the SASU computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplifiedStockCompanyResult {
    /// Human-readable label, e.g. `SASU (salaire 70%)`.
    pub status: String,

    /// Net salary plus net dividends.
    pub net_income: Decimal,
    pub net_salary: Decimal,
    pub net_dividends: Decimal,

    /// Social charges levied on the gross salary.
    pub salary_contributions: Decimal,
    pub corporate_tax: Decimal,

    /// Profit set aside before the salary/dividend split.
    pub reserve: Decimal,

    pub gross_salary: Decimal,
    pub gross_dividends: Decimal,
}

/// Outcome of the EURL computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleMemberLlcResult {
    /// Human-readable label, always `EURL (IR)`.
    pub status: String,
    pub net_income: Decimal,
    pub taxable_income: Decimal,
    pub contributions: Decimal,
    pub income_tax: Decimal,
    pub reserve: Decimal,
}

/// Result of any status computation.
///
/// Each variant keeps its typed fields; [`StatusResult::fields`] flattens
/// them into the ordered `(name, value)` pairs shown to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatusResult {
    MicroEntrepreneur(MicroEntrepreneurResult),
    SimplifiedStockCompany(SimplifiedStockCompanyResult),
    SingleMemberLlc(SingleMemberLlcResult),
}

impl StatusResult {
    pub fn status(&self) -> &str {
        match self {
            Self::MicroEntrepreneur(r) => &r.status,
            Self::SimplifiedStockCompany(r) => &r.status,
            Self::SingleMemberLlc(r) => &r.status,
        }
    }

    pub fn net_income(&self) -> Decimal {
        match self {
            Self::MicroEntrepreneur(r) => r.net_income,
            Self::SimplifiedStockCompany(r) => r.net_income,
            Self::SingleMemberLlc(r) => r.net_income,
        }
    }

    /// Monetary fields in presentation order, net income first.
    pub fn fields(&self) -> Vec<(&'static str, Decimal)> {
        match self {
            Self::MicroEntrepreneur(r) => vec![
                ("net_income", r.net_income),
                ("social_contributions", r.social_contributions),
                ("taxable_income", r.taxable_income),
                ("income_tax", r.income_tax),
            ],
            Self::SimplifiedStockCompany(r) => vec![
                ("net_income", r.net_income),
                ("net_salary", r.net_salary),
                ("net_dividends", r.net_dividends),
                ("salary_contributions", r.salary_contributions),
                ("corporate_tax", r.corporate_tax),
                ("reserve", r.reserve),
                ("gross_salary", r.gross_salary),
                ("gross_dividends", r.gross_dividends),
            ],
            Self::SingleMemberLlc(r) => vec![
                ("net_income", r.net_income),
                ("taxable_income", r.taxable_income),
                ("contributions", r.contributions),
                ("income_tax", r.income_tax),
                ("reserve", r.reserve),
            ],
        }
    }

    /// Looks up a single monetary field by name.
    pub fn field(
        &self,
        name: &str,
    ) -> Option<Decimal> {
        self.fields()
            .into_iter()
            .find_map(|(key, value)| (key == name).then_some(value))
    }
}

impl From<MicroEntrepreneurResult> for StatusResult {
    fn from(result: MicroEntrepreneurResult) -> Self {
        Self::MicroEntrepreneur(result)
    }
}

impl From<SimplifiedStockCompanyResult> for StatusResult {
    fn from(result: SimplifiedStockCompanyResult) -> Self {
        Self::SimplifiedStockCompany(result)
    }
}

impl From<SingleMemberLlcResult> for StatusResult {
    fn from(result: SingleMemberLlcResult) -> Self {
        Self::SingleMemberLlc(result)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn eurl_result() -> StatusResult {
        SingleMemberLlcResult {
            status: "EURL (IR)".to_string(),
            net_income: dec!(30000.00),
            taxable_income: dec!(35000.00),
            contributions: dec!(25000.00),
            income_tax: dec!(5000.00),
            reserve: dec!(0.00),
        }
        .into()
    }

    #[test]
    fn fields_start_with_net_income() {
        let result = eurl_result();

        let names: Vec<_> = result.fields().into_iter().map(|(name, _)| name).collect();

        assert_eq!(
            names,
            vec![
                "net_income",
                "taxable_income",
                "contributions",
                "income_tax",
                "reserve"
            ]
        );
    }

    #[test]
    fn field_looks_up_by_name() {
        let result = eurl_result();

        assert_eq!(result.field("income_tax"), Some(dec!(5000.00)));
        assert_eq!(result.field("corporate_tax"), None);
    }

    #[test]
    fn accessors_read_through_variant() {
        let result = eurl_result();

        assert_eq!(result.status(), "EURL (IR)");
        assert_eq!(result.net_income(), dec!(30000.00));
    }
}
