use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a sequence of brackets does not form a valid table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BracketTableError {
    #[error("bracket table has no brackets")]
    Empty,

    #[error("first bracket must start at 0, got {0}")]
    FirstBracketNotAtZero(Decimal),

    #[error("bracket {index} starts at {found} but the previous bracket ends at {expected}")]
    NotContiguous {
        index: usize,
        expected: Decimal,
        found: Decimal,
    },

    #[error("bracket {0} is unbounded but is not the last bracket")]
    UnboundedBeforeLast(usize),

    #[error("last bracket must be unbounded, got upper bound {0}")]
    LastBracketBounded(Decimal),

    #[error("bracket {index} is empty: upper bound {max} is not above lower bound {min}")]
    EmptyBracket {
        index: usize,
        min: Decimal,
        max: Decimal,
    },

    #[error("bracket {index} rate must be between 0 and 1, got {rate}")]
    InvalidRate { index: usize, rate: Decimal },
}

/// One slice of a progressive schedule.
///
/// `max_income` of `None` means the bracket has no upper bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub rate: Decimal,
}

impl TaxBracket {
    pub fn new(
        min_income: Decimal,
        max_income: Option<Decimal>,
        rate: Decimal,
    ) -> Self {
        Self {
            min_income,
            max_income,
            rate,
        }
    }
}

/// An ordered, contiguous sequence of brackets covering `[0, +inf)`.
///
/// The only way to obtain a table is through [`BracketTable::new`] (which
/// validates the brackets) or one of the built-in schedules, so every
/// instance upholds the contiguity invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BracketTable {
    brackets: Vec<TaxBracket>,
}

impl BracketTable {
    /// Builds a table from brackets sorted by `min_income`.
    ///
    /// # Errors
    ///
    /// Returns [`BracketTableError`] if the table is empty, does not start
    /// at zero, has gaps or overlaps, has an unbounded bracket anywhere but
    /// last, has an empty bracket, or has a rate outside `[0, 1]`.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use freelance_core::{BracketTable, BracketTableError, TaxBracket};
    ///
    /// let table = BracketTable::new(vec![
    ///     TaxBracket::new(dec!(0), Some(dec!(10000)), dec!(0)),
    ///     TaxBracket::new(dec!(10000), None, dec!(0.2)),
    /// ]);
    /// assert!(table.is_ok());
    ///
    /// let gap = BracketTable::new(vec![
    ///     TaxBracket::new(dec!(0), Some(dec!(10000)), dec!(0)),
    ///     TaxBracket::new(dec!(12000), None, dec!(0.2)),
    /// ]);
    /// assert_eq!(
    ///     gap,
    ///     Err(BracketTableError::NotContiguous {
    ///         index: 1,
    ///         expected: dec!(10000),
    ///         found: dec!(12000),
    ///     })
    /// );
    /// ```
    pub fn new(brackets: Vec<TaxBracket>) -> Result<Self, BracketTableError> {
        let first = brackets.first().ok_or(BracketTableError::Empty)?;
        if !first.min_income.is_zero() {
            return Err(BracketTableError::FirstBracketNotAtZero(first.min_income));
        }

        let last_index = brackets.len() - 1;
        let mut expected_min = Decimal::ZERO;
        for (index, bracket) in brackets.iter().enumerate() {
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(BracketTableError::InvalidRate {
                    index,
                    rate: bracket.rate,
                });
            }
            if bracket.min_income != expected_min {
                return Err(BracketTableError::NotContiguous {
                    index,
                    expected: expected_min,
                    found: bracket.min_income,
                });
            }
            match bracket.max_income {
                Some(max) if index == last_index => {
                    return Err(BracketTableError::LastBracketBounded(max));
                }
                Some(max) if max <= bracket.min_income => {
                    return Err(BracketTableError::EmptyBracket {
                        index,
                        min: bracket.min_income,
                        max,
                    });
                }
                Some(max) => expected_min = max,
                None if index != last_index => {
                    return Err(BracketTableError::UnboundedBeforeLast(index));
                }
                None => {}
            }
        }

        Ok(Self { brackets })
    }

    /// French personal income tax schedule (5 brackets, 0% to 45%).
    pub fn income_tax() -> Self {
        Self {
            brackets: vec![
                TaxBracket::new(Decimal::ZERO, Some(Decimal::from(11_294)), Decimal::ZERO),
                TaxBracket::new(
                    Decimal::from(11_294),
                    Some(Decimal::from(28_797)),
                    Decimal::new(11, 2),
                ),
                TaxBracket::new(
                    Decimal::from(28_797),
                    Some(Decimal::from(82_341)),
                    Decimal::new(30, 2),
                ),
                TaxBracket::new(
                    Decimal::from(82_341),
                    Some(Decimal::from(177_106)),
                    Decimal::new(41, 2),
                ),
                TaxBracket::new(Decimal::from(177_106), None, Decimal::new(45, 2)),
            ],
        }
    }

    /// Corporate tax (IS) schedule: 15% up to 42 500, 25% above.
    pub fn corporate_tax() -> Self {
        Self {
            brackets: vec![
                TaxBracket::new(
                    Decimal::ZERO,
                    Some(Decimal::from(42_500)),
                    Decimal::new(15, 2),
                ),
                TaxBracket::new(Decimal::from(42_500), None, Decimal::new(25, 2)),
            ],
        }
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TaxBracket> {
        self.brackets.iter()
    }

    pub fn len(&self) -> usize {
        self.brackets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.brackets.is_empty()
    }
}

impl<'a> IntoIterator for &'a BracketTable {
    type Item = &'a TaxBracket;
    type IntoIter = std::slice::Iter<'a, TaxBracket>;

    fn into_iter(self) -> Self::IntoIter {
        self.brackets.iter()
    }
}

impl<'de> Deserialize<'de> for BracketTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let brackets = Vec::<TaxBracket>::deserialize(deserializer)?;
        BracketTable::new(brackets).map_err(serde::de::Error::custom)
    }
}

/// The pair of schedules consulted by the status models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSchedule {
    /// Personal progressive income tax, used by the micro-entrepreneur and
    /// EURL models.
    pub income_tax: BracketTable,

    /// Corporate tax on retained profit, used by the SASU model.
    pub corporate_tax: BracketTable,
}

impl Default for TaxSchedule {
    fn default() -> Self {
        Self {
            income_tax: BracketTable::income_tax(),
            corporate_tax: BracketTable::corporate_tax(),
        }
    }
}
