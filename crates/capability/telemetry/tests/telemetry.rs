use encl_telemetry::{
    init_tracing, metrics, new_validation_id, record_catalog_miss, record_fit_failures,
    record_validation,
};

#[test]
fn validation_ids_are_unique() {
    let first = new_validation_id();
    let second = new_validation_id();
    assert!(!first.is_empty());
    assert_ne!(first, second);
}

#[test]
fn counters_only_grow() {
    init_tracing();
    let before = metrics().snapshot();
    record_validation(true);
    record_validation(false);
    record_fit_failures(3);
    record_catalog_miss();
    let after = metrics().snapshot();
    assert!(after.validations >= before.validations + 2);
    assert!(after.orders_fitting > before.orders_fitting);
    assert!(after.fit_failures >= before.fit_failures + 3);
    assert!(after.catalog_misses > before.catalog_misses);
}
