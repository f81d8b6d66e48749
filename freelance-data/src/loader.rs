use std::io::Read;

use freelance_core::{BracketTable, BracketTableError, TaxBracket, TaxSchedule};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur when loading bracket data.
#[derive(Debug, Error)]
pub enum BracketLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("Invalid table '{0}' (expected 'income' or 'corporate')")]
    InvalidTable(String),

    #[error("Invalid {table} brackets: {source}")]
    InvalidBrackets {
        table: TableKind,
        #[source]
        source: BracketTableError,
    },
}

impl From<csv::Error> for BracketLoaderError {
    fn from(err: csv::Error) -> Self {
        BracketLoaderError::CsvParse(err.to_string())
    }
}

/// Which schedule a CSV row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Income,
    Corporate,
}

impl TableKind {
    fn parse(s: &str) -> Result<Self, BracketLoaderError> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "corporate" => Ok(Self::Corporate),
            _ => Err(BracketLoaderError::InvalidTable(s.to_string())),
        }
    }
}

impl std::fmt::Display for TableKind {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Self::Income => f.write_str("income"),
            Self::Corporate => f.write_str("corporate"),
        }
    }
}

/// A single record from a bracket CSV file.
///
/// - `table`: `income` or `corporate` (any case)
/// - `min_income`: lower bound of the bracket
/// - `max_income`: upper bound (empty for unlimited)
/// - `rate`: marginal rate as a decimal (e.g. 0.11 for 11%)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BracketRecord {
    pub table: String,
    pub min_income: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub max_income: Option<Decimal>,
    pub rate: Decimal,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Loader for bracket tables from CSV files.
///
/// Tables present in the file replace the matching table of a base
/// [`TaxSchedule`]; tables absent from the file are kept as they are.
pub struct BracketTableLoader;

impl BracketTableLoader {
    /// Parse bracket records from a CSV reader.
    ///
    /// The reader can be any type that implements `Read`, such as a file or
    /// a byte slice.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<BracketRecord>, BracketLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: BracketRecord = result?;
            records.push(record);
        }

        debug!(records = records.len(), "parsed bracket records");
        Ok(records)
    }

    /// Build a schedule from parsed records on top of `base`.
    ///
    /// Records are grouped by table, sorted by `min_income` and validated as
    /// a [`BracketTable`].
    pub fn apply(
        base: TaxSchedule,
        records: &[BracketRecord],
    ) -> Result<TaxSchedule, BracketLoaderError> {
        let mut income = Vec::new();
        let mut corporate = Vec::new();

        for record in records {
            let bracket = TaxBracket::new(record.min_income, record.max_income, record.rate);
            match TableKind::parse(&record.table)? {
                TableKind::Income => income.push(bracket),
                TableKind::Corporate => corporate.push(bracket),
            }
        }

        let mut schedule = base;
        if let Some(table) = Self::build_table(TableKind::Income, income)? {
            schedule.income_tax = table;
        }
        if let Some(table) = Self::build_table(TableKind::Corporate, corporate)? {
            schedule.corporate_tax = table;
        }

        Ok(schedule)
    }

    /// Parse a CSV reader and apply it on top of the built-in schedule.
    pub fn load<R: Read>(reader: R) -> Result<TaxSchedule, BracketLoaderError> {
        let records = Self::parse(reader)?;
        Self::apply(TaxSchedule::default(), &records)
    }

    fn build_table(
        kind: TableKind,
        mut brackets: Vec<TaxBracket>,
    ) -> Result<Option<BracketTable>, BracketLoaderError> {
        if brackets.is_empty() {
            return Ok(None);
        }

        brackets.sort_by(|a, b| a.min_income.cmp(&b.min_income));
        let count = brackets.len();
        let table = BracketTable::new(brackets).map_err(|source| {
            BracketLoaderError::InvalidBrackets {
                table: kind,
                source,
            }
        })?;

        info!(table = %kind, brackets = count, "loaded bracket table");
        Ok(Some(table))
    }
}
