use domain::{Material, Side};
use encl_catalog::{
    CatalogError, CatalogLookup, load_catalog_dir, parse_enclosures, parse_glands,
    snapshot_from_json,
};
use rust_decimal::Decimal;

fn data_dir() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data")
}

#[test]
fn load_catalog_dir_reads_all_files() {
    let snapshot = load_catalog_dir(data_dir()).expect("load");
    assert_eq!(snapshot.enclosure_count(), 2);
    assert_eq!(snapshot.gland_count(), 2);
    assert_eq!(snapshot.terminal_count(), 2);

    let e1 = snapshot.enclosure("E1").expect("E1");
    assert_eq!(e1.price, "149.90".parse::<Decimal>().expect("decimal"));
    assert!(e1.mounting_area(Side::Top).is_some());
    assert!(e1.mounting_area(Side::Bottom).is_some());
    assert!(e1.mounting_area(Side::Right).is_none());
    assert_eq!(e1.terminal_rail.map(|rail| rail.usable_width_mm), Some(100.0));

    let brass = snapshot.gland("M20", Material::Brass).expect("brass");
    assert_eq!(brass.catalog_number, "GL-M20-MS");
}

#[test]
fn numeric_price_and_null_rail_are_accepted() {
    let snapshot = load_catalog_dir(data_dir()).expect("load");
    let e2 = snapshot.enclosure("E2").expect("E2");
    assert_eq!(e2.price, "59.5".parse::<Decimal>().expect("decimal"));
    assert!(e2.terminal_rail.is_none());
    // 只有 x 没有 y 的安装面视为未声明
    assert!(e2.mounting_area(Side::Top).is_none());
}

#[test]
fn rail_width_may_be_a_plain_number() {
    let json = r#"{"enclosures":[{"name":"n","code":"R1","dimension_width":100,
        "dimension_height":100,"dimension_depth":50,"price":"10.00",
        "enclosure_terminals":75.5}]}"#;
    let enclosures = parse_enclosures(json).expect("parse");
    assert_eq!(
        enclosures[0].terminal_rail.map(|rail| rail.usable_width_mm),
        Some(75.5)
    );
}

#[test]
fn missing_top_level_key_is_reported() {
    let err = parse_glands(r#"{"items": []}"#).expect_err("missing key");
    assert!(matches!(err, CatalogError::MissingKey("glands")));
}

#[test]
fn unknown_material_is_rejected() {
    let json = r#"{"glands":[{"size":"M12","diameter_mm":12,"physical_diameter_mm":15,
        "cable_range_min":3,"cable_range_max":6,"material":"Steel","price":"1.00",
        "catalog_number":"X"}]}"#;
    let err = parse_glands(json).expect_err("material");
    assert!(err.to_string().contains("unknown material"));
}

#[test]
fn invalid_record_fails_whole_snapshot() {
    let glands = r#"{"glands":[{"size":"M12","diameter_mm":12,"physical_diameter_mm":10,
        "cable_range_min":3,"cable_range_max":6,"material":"PA","price":"1.00",
        "catalog_number":"X"}]}"#;
    let err = snapshot_from_json(r#"{"enclosures":[]}"#, glands, r#"{"terminals":[]}"#)
        .expect_err("physical < nominal");
    assert!(matches!(err, CatalogError::InvalidRecord { .. }));
}

#[test]
fn missing_directory_is_io_error() {
    let err = load_catalog_dir(data_dir().join("missing")).expect_err("io");
    assert!(matches!(err, CatalogError::Io { .. }));
}
