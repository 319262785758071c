//! Emission factor table (category -> kg CO2 per unit).

use super::{ConfigError, ConfigResult};
use serde::Serialize;
use std::collections::BTreeMap;

/// Demonstration factors; real factors vary widely by grid, fuel and vehicle.
const BUILTIN_FACTORS: &[(&str, f64)] = &[
    ("Electricity (kWh)", 0.85),
    ("Petrol (liters)", 2.31),
    ("Diesel (liters)", 2.68),
    ("Car Travel (km)", 0.21),
    ("Bus Travel (km)", 0.11),
    ("Train Travel (km)", 0.05),
    ("Air Travel (km)", 0.18),
    ("Gas Consumption (m3)", 2.0),
    ("Industrial Processes (tons of material)", 1000.0),
];

/// Immutable category -> factor mapping.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EmissionFactorTable {
    factors: BTreeMap<String, f64>,
}

impl EmissionFactorTable {
    /// Builds a validated table.
    ///
    /// # Errors
    /// - `EmptyCategory` for an empty name.
    /// - `DuplicateCategory` when the same name appears twice.
    /// - `InvalidFactor` for negative or non-finite factors.
    pub fn new<I, S>(entries: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut factors = BTreeMap::new();
        for (category, factor) in entries {
            let category = category.into();
            if category.is_empty() {
                return Err(ConfigError::EmptyCategory);
            }
            if !factor.is_finite() || factor < 0.0 {
                return Err(ConfigError::InvalidFactor {
                    category,
                    value: factor,
                });
            }
            if factors.contains_key(&category) {
                return Err(ConfigError::DuplicateCategory(category));
            }
            factors.insert(category, factor);
        }
        Ok(Self { factors })
    }

    /// Built-in demonstration table.
    pub fn builtin() -> Self {
        Self {
            factors: BUILTIN_FACTORS
                .iter()
                .map(|(category, factor)| ((*category).to_string(), *factor))
                .collect(),
        }
    }

    /// Exact lookup; `None` for unrecognized categories.
    pub fn get(&self, category: &str) -> Option<f64> {
        self.factors.get(category).copied()
    }

    /// Factor used by the aggregator: unrecognized categories weigh 0.
    pub fn factor_for(&self, category: &str) -> f64 {
        self.get(category).unwrap_or(0.0)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.factors.contains_key(category)
    }

    /// Iterates `(category, factor)` in category order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.factors
            .iter()
            .map(|(category, factor)| (category.as_str(), *factor))
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::EmissionFactorTable;
    use crate::tables::ConfigError;

    #[test]
    fn lookup_is_exact_and_case_sensitive() {
        let table = EmissionFactorTable::builtin();
        assert_eq!(table.get("Electricity (kWh)"), Some(0.85));
        assert_eq!(table.get("electricity (kwh)"), None);
        assert_eq!(table.get("Electricity (kWh) "), None);
        assert_eq!(table.factor_for("Unknown Source"), 0.0);
    }

    #[test]
    fn builtin_table_has_all_demo_categories() {
        let table = EmissionFactorTable::builtin();
        assert_eq!(table.len(), 9);
        assert_eq!(
            table.get("Industrial Processes (tons of material)"),
            Some(1000.0)
        );
    }

    #[test]
    fn rejects_negative_factor() {
        let err = EmissionFactorTable::new([("Diesel (liters)", -2.68)]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFactor { .. }));
    }

    #[test]
    fn rejects_duplicate_category() {
        let err = EmissionFactorTable::new([("Petrol (liters)", 2.31), ("Petrol (liters)", 2.4)])
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::DuplicateCategory("Petrol (liters)".to_string())
        );
    }

    #[test]
    fn zero_factor_is_allowed() {
        let table = EmissionFactorTable::new([("Solar (kWh)", 0.0)]).expect("zero factor");
        assert!(table.contains("Solar (kWh)"));
    }
}
