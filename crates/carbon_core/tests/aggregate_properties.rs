use carbon_core::{aggregate, ActivityRecord, DataFormatError, EmissionFactorTable};

fn scenario_factors() -> EmissionFactorTable {
    EmissionFactorTable::new([("Electricity (kWh)", 0.85), ("Car Travel (km)", 0.21)])
        .expect("scenario factors")
}

#[test]
fn electricity_and_car_travel_scenario() {
    let records = vec![
        ActivityRecord::new("Electricity (kWh)", 1000.0),
        ActivityRecord::new("Car Travel (km)", 500.0),
    ];

    let result = aggregate(&records, &scenario_factors()).expect("valid records");
    assert_eq!(result.per_category.len(), 2);
    assert_eq!(result.per_category["Electricity (kWh)"], 850.0);
    assert_eq!(result.per_category["Car Travel (km)"], 105.0);
    assert_eq!(result.total_kg, 955.0);
}

#[test]
fn empty_input_yields_zero_total() {
    let result = aggregate(&[], &EmissionFactorTable::builtin()).expect("empty input");
    assert_eq!(result.total_kg, 0.0);
    assert!(result.per_category.is_empty());
    assert!(result.is_zero());
}

#[test]
fn unknown_category_contributes_nothing() {
    let factors = EmissionFactorTable::builtin();
    let with_unknown = vec![
        ActivityRecord::new("Diesel (liters)", 40.0),
        ActivityRecord::new("Unknown Source", 100.0),
    ];
    let without_unknown = vec![ActivityRecord::new("Diesel (liters)", 40.0)];

    let a = aggregate(&with_unknown, &factors).expect("valid records");
    let b = aggregate(&without_unknown, &factors).expect("valid records");
    assert_eq!(a.total_kg, b.total_kg);
    assert!(!a.per_category.contains_key("Unknown Source"));

    let only_unknown = aggregate(&[ActivityRecord::new("Unknown Source", 100.0)], &factors)
        .expect("valid records");
    assert_eq!(only_unknown.total_kg, 0.0);
    assert!(only_unknown.per_category.is_empty());
}

#[test]
fn zero_factor_category_is_dropped_from_breakdown() {
    let factors = EmissionFactorTable::new([("Solar (kWh)", 0.0), ("Petrol (liters)", 2.31)])
        .expect("factors");
    let records = vec![
        ActivityRecord::new("Solar (kWh)", 5000.0),
        ActivityRecord::new("Petrol (liters)", 10.0),
    ];

    let result = aggregate(&records, &factors).expect("valid records");
    assert_eq!(result.per_category.keys().collect::<Vec<_>>(), vec!["Petrol (liters)"]);
    assert_eq!(result.per_category_sum(), result.total_kg);
}

#[test]
fn breakdown_sums_to_total_exactly() {
    let records = vec![
        ActivityRecord::new("Electricity (kWh)", 1234.5),
        ActivityRecord::new("Air Travel (km)", 8765.4),
        ActivityRecord::new("Bus Travel (km)", 321.0),
        ActivityRecord::new("Electricity (kWh)", 17.25),
        ActivityRecord::new("Gas Consumption (m3)", 0.3),
    ];
    let result = aggregate(&records, &EmissionFactorTable::builtin()).expect("valid records");
    assert_eq!(result.per_category.len(), 4);
    assert_eq!(result.per_category_sum(), result.total_kg);
}

#[test]
fn aggregation_is_linear_in_quantities() {
    let factors = EmissionFactorTable::builtin();
    let base = vec![
        ActivityRecord::new("Petrol (liters)", 120.0),
        ActivityRecord::new("Train Travel (km)", 900.0),
        ActivityRecord::new("Industrial Processes (tons of material)", 1.5),
    ];
    let base_total = aggregate(&base, &factors).expect("valid records").total_kg;

    for k in [0.0, 0.5, 2.0, 8.0] {
        let scaled: Vec<ActivityRecord> = base
            .iter()
            .map(|record| ActivityRecord::new(record.category.clone(), record.quantity * k))
            .collect();
        let scaled_total = aggregate(&scaled, &factors).expect("valid records").total_kg;
        assert_eq!(scaled_total, base_total * k, "k = {k}");
    }
}

#[test]
fn row_order_does_not_change_result() {
    let factors = EmissionFactorTable::builtin();
    let forward = vec![
        ActivityRecord::new("Diesel (liters)", 3.0),
        ActivityRecord::new("Car Travel (km)", 44.0),
        ActivityRecord::new("Diesel (liters)", 7.0),
    ];
    let mut reversed = forward.clone();
    reversed.reverse();

    let a = aggregate(&forward, &factors).expect("valid records");
    let b = aggregate(&reversed, &factors).expect("valid records");
    assert_eq!(a.per_category.keys().collect::<Vec<_>>(), b.per_category.keys().collect::<Vec<_>>());
    assert!((a.total_kg - b.total_kg).abs() < 1e-9);
}

#[test]
fn malformed_record_reports_its_row() {
    let records = vec![
        ActivityRecord::new("Electricity (kWh)", 1.0),
        ActivityRecord::new("Electricity (kWh)", 2.0),
        ActivityRecord::new("Electricity (kWh)", f64::NAN),
    ];
    let err = aggregate(&records, &EmissionFactorTable::builtin()).unwrap_err();
    assert_eq!(err, DataFormatError::NonFiniteQuantity { row: 3 });
}
