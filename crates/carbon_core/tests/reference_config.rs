use carbon_core::{ConfigError, ReferenceData};
use std::fs;

#[test]
fn loads_reference_file_from_disk() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("reference.json");
    let json = serde_json::to_string_pretty(&ReferenceData::builtin().to_file())
        .expect("serialize builtin tables");
    fs::write(&path, json).expect("write reference file");

    let loaded = ReferenceData::load_from_path(&path).expect("valid reference file");
    assert_eq!(loaded, ReferenceData::builtin());
}

#[test]
fn edited_reference_file_changes_lookups() {
    let mut file = ReferenceData::builtin().to_file();
    file.emission_factors
        .insert("Refrigerant Leak (kg)".to_string(), 1430.0);
    file.regions.retain(|profile| profile.region != "Ladakh");

    let reference = file.into_reference_data().expect("edited tables");
    assert_eq!(reference.factors.get("Refrigerant Leak (kg)"), Some(1430.0));
    assert!(!reference.regions.contains("Ladakh"));
}

#[test]
fn band_gap_in_file_fails_at_load_time() {
    let mut file = ReferenceData::builtin().to_file();
    file.benchmark.bands[2].lower_kg = 16_000.0;

    let err = file.into_reference_data().unwrap_err();
    assert!(matches!(err, ConfigError::BandGap { .. }));
}

#[test]
fn non_positive_absorption_in_file_fails_at_load_time() {
    let mut file = ReferenceData::builtin().to_file();
    file.regions[0].annual_absorption_kg = -3.0;

    let err = file.into_reference_data().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidAbsorption { .. }));
}

#[test]
fn missing_and_malformed_files_are_config_errors() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = ReferenceData::load_from_path(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(missing, ConfigError::Read { .. }));

    let path = dir.path().join("broken.json");
    fs::write(&path, "{ \"emission_factors\": ").expect("write broken file");
    let broken = ReferenceData::load_from_path(&path).unwrap_err();
    assert!(matches!(broken, ConfigError::Parse(_)));
}
