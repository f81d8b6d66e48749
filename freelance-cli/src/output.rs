use std::io::{self, Write};

use freelance_core::ScenarioMap;

/// Turns a field key such as `net_income` into `Net income`.
pub fn humanize(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Writes one block per scenario: a `=== label ===` header followed by one
/// `Field : value €` line per monetary field.
pub fn write_text<W: Write>(
    mut writer: W,
    scenarios: &ScenarioMap,
) -> io::Result<()> {
    for (label, result) in scenarios.iter() {
        writeln!(writer)?;
        writeln!(writer, "=== {label} ===")?;
        writeln!(writer, "Statut : {}", result.status())?;
        for (key, value) in result.fields() {
            writeln!(writer, "{} : {} €", humanize(key), value)?;
        }
    }
    Ok(())
}

/// Writes the scenario map as pretty-printed JSON, keeping scenario order.
pub fn write_json<W: Write>(
    mut writer: W,
    scenarios: &ScenarioMap,
) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut writer, scenarios)?;
    writeln!(writer)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn humanize_replaces_underscores_and_capitalizes() {
        assert_eq!(humanize("net_income"), "Net income");
        assert_eq!(humanize("salary_contributions"), "Salary contributions");
        assert_eq!(humanize(""), "");
    }

    #[test]
    fn text_output_lists_scenarios_in_order() {
        let scenarios = freelance_core::run_all_scenarios(dec!(50000)).unwrap();
        let mut out = Vec::new();

        write_text(&mut out, &scenarios).unwrap();
        let text = String::from_utf8(out).unwrap();

        let micro = text.find("=== AutoEntrepreneur ===").unwrap();
        let full_salary = text.find("=== SASU_100%_salaire ===").unwrap();
        let dividends = text.find("=== SASU_0%_salaire ===").unwrap();
        assert!(micro < full_salary && full_salary < dividends);
        assert!(text.contains("Statut : Auto-entrepreneur (BNC)"));
        assert!(text.contains("Net income : 35813.77 €"));
    }

    #[test]
    fn text_output_prints_every_amount_in_cents() {
        let scenarios = freelance_core::run_all_scenarios(dec!(50000)).unwrap();
        let mut out = Vec::new();

        write_text(&mut out, &scenarios).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Gross salary : 50000.00 €"));
        assert!(text.contains("Net dividends : 0.00 €"));
        assert!(text.contains("Reserve : 0.00 €"));
        for line in text.lines().filter(|line| line.ends_with(" €")) {
            let amount = line.trim_end_matches(" €").rsplit(' ').next().unwrap_or_default();
            let cents = amount.split('.').nth(1).map(str::len);
            assert_eq!(cents, Some(2), "{line}");
        }
    }

    #[test]
    fn json_output_keeps_scenario_order() {
        let scenarios = freelance_core::run_all_scenarios(dec!(50000)).unwrap();
        let mut out = Vec::new();

        write_json(&mut out, &scenarios).unwrap();
        let json = String::from_utf8(out).unwrap();

        let micro = json.find("\"AutoEntrepreneur\"").unwrap();
        let full_salary = json.find("\"SASU_100%_salaire\"").unwrap();
        assert!(micro < full_salary);
        assert!(json.contains("\"status\": \"SASU (salaire 70%)\""));
    }
}
