use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use freelance_core::calculations::{MicroEntrepreneurConfig, SingleMemberLlcConfig};
use freelance_core::{ScenarioConfig, TaxSchedule};
use freelance_data::BracketTableLoader;
use rust_decimal::Decimal;
use tracing::debug;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Net income simulator for French freelance legal statuses.
///
/// Compares the micro-entrepreneur regime with a SASU paid through
/// several salary/dividend splits for one annual revenue figure.
#[derive(Debug, Parser)]
#[command(name = "freelance-sim", version, about, long_about = None)]
pub struct Cli {
    /// Annual revenue (chiffre d'affaires) in euros.
    #[arg(value_parser = parse_revenue)]
    pub revenue: Decimal,

    /// Micro-entrepreneur activity type: BIC, BNC or VENTE.
    #[arg(long, default_value = "BNC")]
    pub activity: String,

    /// Fixed charges deducted from revenue for the company statuses.
    #[arg(long, default_value = "0", value_parser = parse_fixed_charges)]
    pub fixed_charges: Decimal,

    /// Share of profit kept as reserve for the company statuses (0 to 1).
    #[arg(long, default_value = "0")]
    pub reserve_ratio: Decimal,

    /// Also compute the EURL (income tax regime) scenario.
    #[arg(long, default_value_t = false)]
    pub eurl: bool,

    /// EURL contribution rate (0 to 1).
    #[arg(long, default_value = "0.45")]
    pub eurl_contribution_rate: Decimal,

    /// CSV file with alternative bracket tables
    /// (columns: table,min_income,max_income,rate).
    #[arg(long)]
    pub brackets: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Parses the revenue argument, rejecting negative amounts.
fn parse_revenue(s: &str) -> Result<Decimal, String> {
    parse_non_negative("revenue", s)
}

/// Parses the fixed charges argument, rejecting negative amounts.
fn parse_fixed_charges(s: &str) -> Result<Decimal, String> {
    parse_non_negative("fixed charges", s)
}

fn parse_non_negative(
    name: &str,
    s: &str,
) -> Result<Decimal, String> {
    let amount: Decimal = s
        .trim()
        .parse()
        .map_err(|e| format!("invalid amount '{s}': {e}"))?;
    if amount < Decimal::ZERO {
        return Err(format!("{name} must be non-negative, got {amount}"));
    }
    Ok(amount)
}

impl Cli {
    /// Builds the scenario configuration described by the arguments.
    pub fn scenario_config(&self) -> Result<ScenarioConfig> {
        let schedule = match &self.brackets {
            Some(path) => {
                debug!(path = %path.display(), "loading bracket tables");
                let file = File::open(path)
                    .with_context(|| format!("Failed to open: {}", path.display()))?;
                BracketTableLoader::load(file)
                    .with_context(|| format!("Failed to load brackets: {}", path.display()))?
            }
            None => TaxSchedule::default(),
        };

        let single_member_llc = self.eurl.then(|| SingleMemberLlcConfig {
            fixed_charges: self.fixed_charges,
            contribution_rate: self.eurl_contribution_rate,
            reserve_ratio: self.reserve_ratio,
        });

        Ok(ScenarioConfig {
            micro_entrepreneur: MicroEntrepreneurConfig {
                activity_type: self.activity.clone(),
                ..Default::default()
            },
            sasu_fixed_charges: self.fixed_charges,
            sasu_reserve_ratio: self.reserve_ratio,
            single_member_llc,
            schedule,
            ..Default::default()
        })
    }
}
