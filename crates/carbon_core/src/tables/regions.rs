//! Region profile catalog.

use super::{ConfigError, ConfigResult};
use crate::model::region::RegionProfile;
use crate::offset::OffsetError;
use std::collections::BTreeMap;

/// `(region, species, peak_age, annual_absorption_kg)`
const BUILTIN_REGIONS: &[(&str, &str, u32, f64)] = &[
    ("Maharashtra", "Neem", 10, 31.82),
    ("Karnataka", "Mango", 12, 28.5),
    ("Delhi", "Peepal", 15, 22.0),
    ("Uttar Pradesh", "Banyan", 20, 45.0),
    ("West Bengal", "Coconut", 8, 18.5),
    ("Tamil Nadu", "Tamarind", 14, 25.0),
    ("Gujarat", "Mahua", 11, 30.5),
    ("Rajasthan", "Khejri", 10, 15.0),
    ("Kerala", "Jackfruit", 13, 26.0),
    ("Punjab", "Sheesham", 16, 33.0),
    ("Andhra Pradesh", "Mango", 12, 28.5),
    ("Telangana", "Neem", 10, 31.82),
    ("Bihar", "Peepal", 15, 22.0),
    ("Assam", "Sal", 18, 38.0),
    ("Odisha", "Banyan", 20, 45.0),
    ("Madhya Pradesh", "Teak", 17, 40.0),
    ("Haryana", "Khejri", 10, 15.0),
    ("Himachal Pradesh", "Deodar", 25, 50.0),
    ("Jammu and Kashmir", "Chinar", 30, 55.0),
    ("Jharkhand", "Sal", 18, 38.0),
    ("Uttarakhand", "Deodar", 25, 50.0),
    ("Chhattisgarh", "Teak", 17, 40.0),
    ("Goa", "Coconut", 8, 18.5),
    ("Meghalaya", "Pine", 22, 42.0),
    ("Manipur", "Pine", 22, 42.0),
    ("Tripura", "Bamboo", 5, 10.0),
    ("Mizoram", "Bamboo", 5, 10.0),
    ("Nagaland", "Pine", 22, 42.0),
    ("Sikkim", "Rhododendron", 15, 20.0),
    ("Arunachal Pradesh", "Sal", 18, 38.0),
    ("Andaman and Nicobar Islands", "Coconut", 8, 18.5),
    ("Chandigarh", "Peepal", 15, 22.0),
    ("Dadra and Nagar Haveli and Daman and Diu", "Teak", 17, 40.0),
    ("Lakshadweep", "Coconut", 8, 18.5),
    ("Puducherry", "Tamarind", 14, 25.0),
    ("Ladakh", "Willow", 10, 12.0),
];

/// Fixed set of supported regions, keyed by exact name.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionCatalog {
    profiles: BTreeMap<String, RegionProfile>,
}

impl RegionCatalog {
    /// Builds a validated catalog.
    ///
    /// # Errors
    /// - `NoRegions` for an empty input.
    /// - `EmptyRegion`, `EmptySpecies`, `DuplicateRegion` for malformed names.
    /// - `InvalidAbsorption` when the rate is not finite and positive.
    pub fn new(profiles: impl IntoIterator<Item = RegionProfile>) -> ConfigResult<Self> {
        let mut by_name = BTreeMap::new();
        for profile in profiles {
            if profile.region.is_empty() {
                return Err(ConfigError::EmptyRegion);
            }
            if profile.species.trim().is_empty() {
                return Err(ConfigError::EmptySpecies {
                    region: profile.region,
                });
            }
            if !profile.annual_absorption_kg.is_finite() || profile.annual_absorption_kg <= 0.0 {
                return Err(ConfigError::InvalidAbsorption {
                    value: profile.annual_absorption_kg,
                    region: profile.region,
                });
            }
            if by_name.contains_key(&profile.region) {
                return Err(ConfigError::DuplicateRegion(profile.region));
            }
            by_name.insert(profile.region.clone(), profile);
        }
        if by_name.is_empty() {
            return Err(ConfigError::NoRegions);
        }
        Ok(Self { profiles: by_name })
    }

    /// Built-in catalog of Indian states and union territories.
    pub fn builtin() -> Self {
        Self {
            profiles: BUILTIN_REGIONS
                .iter()
                .map(|(region, species, peak_age, absorption)| {
                    (
                        (*region).to_string(),
                        RegionProfile::new(*region, *species, *peak_age, *absorption),
                    )
                })
                .collect(),
        }
    }

    /// Exact, case-sensitive lookup.
    ///
    /// # Errors
    /// - `OffsetError::InvalidRegion` when `region` is not in the catalog.
    pub fn lookup(&self, region: &str) -> Result<&RegionProfile, OffsetError> {
        self.profiles
            .get(region)
            .ok_or_else(|| OffsetError::InvalidRegion(region.to_string()))
    }

    pub fn contains(&self, region: &str) -> bool {
        self.profiles.contains_key(region)
    }

    /// Region names in sorted order, as offered for selection.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    /// Profiles in region-name order.
    pub fn profiles(&self) -> impl Iterator<Item = &RegionProfile> {
        self.profiles.values()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::RegionCatalog;
    use crate::model::region::RegionProfile;
    use crate::offset::OffsetError;
    use crate::tables::ConfigError;

    #[test]
    fn builtin_catalog_covers_all_states_and_territories() {
        let catalog = RegionCatalog::builtin();
        assert_eq!(catalog.len(), 36);
        let names: Vec<&str> = catalog.names().collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn lookup_is_exact() {
        let catalog = RegionCatalog::builtin();
        let profile = catalog.lookup("Maharashtra").expect("known region");
        assert_eq!(profile.species, "Neem");
        assert_eq!(profile.peak_age, 10);
        assert_eq!(profile.annual_absorption_kg, 31.82);

        let err = catalog.lookup("maharashtra").unwrap_err();
        assert_eq!(err, OffsetError::InvalidRegion("maharashtra".to_string()));
    }

    #[test]
    fn rejects_non_positive_absorption() {
        let err = RegionCatalog::new([RegionProfile::new("Ladakh", "Willow", 10, 0.0)])
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAbsorption { .. }));
    }

    #[test]
    fn rejects_duplicate_and_empty_catalogs() {
        let duplicate = RegionCatalog::new([
            RegionProfile::new("Goa", "Coconut", 8, 18.5),
            RegionProfile::new("Goa", "Cashew", 9, 20.0),
        ])
        .unwrap_err();
        assert_eq!(duplicate, ConfigError::DuplicateRegion("Goa".to_string()));

        let empty = RegionCatalog::new(Vec::new()).unwrap_err();
        assert_eq!(empty, ConfigError::NoRegions);
    }
}
