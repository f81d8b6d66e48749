use serde::ser::{Serialize, Serializer};

use super::StatusResult;

/// Ordered mapping from scenario label to its result.
///
/// Insertion order is the computation order and is kept when iterating and
/// when serializing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScenarioMap {
    entries: Vec<(String, StatusResult)>,
}

impl ScenarioMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a scenario, replacing the result of an existing label in place.
    pub fn insert(
        &mut self,
        label: impl Into<String>,
        result: StatusResult,
    ) {
        let label = label.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == label) {
            Some((_, slot)) => *slot = result,
            None => self.entries.push((label, result)),
        }
    }

    pub fn get(
        &self,
        label: &str,
    ) -> Option<&StatusResult> {
        self.entries
            .iter()
            .find_map(|(existing, result)| (existing == label).then_some(result))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StatusResult)> {
        self.entries
            .iter()
            .map(|(label, result)| (label.as_str(), result))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ScenarioMap {
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::SingleMemberLlcResult;

    fn result(net_income: rust_decimal::Decimal) -> StatusResult {
        SingleMemberLlcResult {
            status: "EURL (IR)".to_string(),
            net_income,
            taxable_income: net_income,
            contributions: dec!(0),
            income_tax: dec!(0),
            reserve: dec!(0),
        }
        .into()
    }

    #[test]
    fn insert_keeps_insertion_order() {
        let mut map = ScenarioMap::new();
        map.insert("zeta", result(dec!(1)));
        map.insert("alpha", result(dec!(2)));

        assert_eq!(map.labels().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
    }

    #[test]
    fn insert_replaces_existing_label_in_place() {
        let mut map = ScenarioMap::new();
        map.insert("a", result(dec!(1)));
        map.insert("b", result(dec!(2)));
        map.insert("a", result(dec!(3)));

        assert_eq!(map.len(), 2);
        assert_eq!(map.labels().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(map.get("a").map(StatusResult::net_income), Some(dec!(3)));
    }

    #[test]
    fn serializes_as_ordered_object() {
        let mut map = ScenarioMap::new();
        map.insert("zeta", result(dec!(1)));
        map.insert("alpha", result(dec!(2)));

        let json = serde_json::to_string(&map).unwrap();

        let zeta = json.find("\"zeta\"").unwrap();
        let alpha = json.find("\"alpha\"").unwrap();
        assert!(zeta < alpha);
    }
}
