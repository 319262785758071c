use carbon_core::{
    estimate, estimate_for_region, OffsetError, RegionCatalog, RegionProfile,
};

#[test]
fn maharashtra_scenario() {
    let catalog = RegionCatalog::builtin();
    let result = estimate_for_region(955.0, "Maharashtra", &catalog).expect("known region");
    assert!((result.trees_required - 30.01).abs() < 0.01);
    assert_eq!(result.trees_required, 955.0 / 31.82);
}

#[test]
fn estimate_is_proportional_to_total() {
    let catalog = RegionCatalog::builtin();
    for profile in catalog.profiles() {
        let single = estimate(1234.5, profile).expect("valid profile");
        let double = estimate(2.0 * 1234.5, profile).expect("valid profile");
        assert_eq!(double.trees_required, 2.0 * single.trees_required);
    }
}

#[test]
fn atlantis_is_rejected() {
    let catalog = RegionCatalog::builtin();
    let err = estimate_for_region(955.0, "Atlantis", &catalog).unwrap_err();
    assert_eq!(err, OffsetError::InvalidRegion("Atlantis".to_string()));
}

#[test]
fn region_lookup_does_not_normalize_names() {
    let catalog = RegionCatalog::builtin();
    for name in ["delhi", " Delhi", "DELHI", "Delhi "] {
        assert!(matches!(
            estimate_for_region(1.0, name, &catalog),
            Err(OffsetError::InvalidRegion(_))
        ));
    }
    assert!(estimate_for_region(1.0, "Delhi", &catalog).is_ok());
}

#[test]
fn corrupted_profile_fails_with_division_error() {
    let profile = RegionProfile::new("Ladakh", "Willow", 10, 0.0);
    let err = estimate(500.0, &profile).unwrap_err();
    assert_eq!(
        err,
        OffsetError::Division {
            region: "Ladakh".to_string(),
            annual_absorption_kg: 0.0,
        }
    );
}

#[test]
fn zero_total_needs_zero_trees() {
    let catalog = RegionCatalog::builtin();
    let result = estimate_for_region(0.0, "Goa", &catalog).expect("known region");
    assert_eq!(result.trees_required, 0.0);
}
