use domain::{Dimensions, Enclosure, Gland, Material, MountingArea, Side, Terminal};
use encl_catalog::{CatalogLookup, CatalogLookupError, CatalogSnapshot, InMemoryCatalog};
use rust_decimal::Decimal;

fn money(value: &str) -> Decimal {
    value.parse().expect("decimal")
}

fn enclosure(code: &str, price: &str) -> Enclosure {
    Enclosure::new(
        code,
        format!("Enclosure {code}"),
        Dimensions::new(120.0, 200.0, 90.0),
        money(price),
    )
    .with_mounting_area(Side::Top, MountingArea::new(10.0, 5.0))
}

fn gland(size: &str, material: Material) -> Gland {
    Gland {
        size: size.to_string(),
        material,
        diameter_mm: 12.0,
        physical_diameter_mm: 15.0,
        cable_range_min_mm: 3.0,
        cable_range_max_mm: 6.5,
        price: money("1.40"),
        catalog_number: format!("GL-{size}"),
    }
}

fn terminal(cross_section: &str, color: &str) -> Terminal {
    Terminal {
        wire_cross_section: cross_section.to_string(),
        width_mm: 5.2,
        color: color.to_string(),
        voltage: 800.0,
        current: 24.0,
        price: money("0.85"),
        catalog_number: format!("TB-{cross_section}-{color}"),
    }
}

#[test]
fn lookups_use_unique_keys() {
    let catalog = InMemoryCatalog::new();
    catalog.upsert_enclosure(enclosure("E1", "99.00")).expect("enclosure");
    catalog.upsert_gland(gland("M12", Material::Pa)).expect("gland");
    catalog.upsert_terminal(terminal("2.5", "grey")).expect("terminal");

    assert!(catalog.enclosure("E1").is_ok());
    assert!(catalog.gland("M12", Material::Pa).is_ok());
    assert!(catalog.terminal("2.5", "grey").is_ok());

    let err = catalog.gland("M12", Material::Brass).expect_err("brass missing");
    assert_eq!(err, CatalogLookupError::gland("M12", Material::Brass));
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "gland not found: M12/Brass");

    let err = catalog.terminal("2.5", "blue").expect_err("blue missing");
    assert_eq!(err, CatalogLookupError::terminal("2.5", "blue"));
}

#[test]
fn upsert_replaces_existing_record() {
    let catalog = InMemoryCatalog::new();
    catalog.upsert_enclosure(enclosure("E1", "99.00")).expect("first");
    catalog.upsert_enclosure(enclosure("E1", "109.00")).expect("second");
    let found = catalog.enclosure("E1").expect("E1");
    assert_eq!(found.price, money("109.00"));
}

#[test]
fn invalid_records_are_rejected() {
    let catalog = InMemoryCatalog::new();
    let mut bad = gland("M16", Material::Pa);
    bad.physical_diameter_mm = 10.0;
    assert!(catalog.upsert_gland(bad).is_err());

    let mut bad = terminal("4", "grey");
    bad.width_mm = 0.0;
    assert!(catalog.upsert_terminal(bad).is_err());

    assert!(catalog.upsert_enclosure(enclosure("E9", "1.999")).is_err());
    assert!(catalog.enclosure("E9").is_err());
}

#[test]
fn snapshot_is_isolated_from_later_updates() {
    let catalog = InMemoryCatalog::new();
    catalog.upsert_enclosure(enclosure("E1", "99.00")).expect("enclosure");
    let snapshot = catalog.snapshot().expect("snapshot");

    catalog.upsert_enclosure(enclosure("E1", "120.00")).expect("update");
    catalog.upsert_enclosure(enclosure("E2", "50.00")).expect("insert");

    assert_eq!(snapshot.enclosure("E1").expect("E1").price, money("99.00"));
    assert!(snapshot.enclosure("E2").is_err());
    assert_eq!(catalog.enclosure("E1").expect("E1").price, money("120.00"));
}

#[test]
fn replace_with_swaps_contents() {
    let catalog = InMemoryCatalog::new();
    catalog.upsert_enclosure(enclosure("OLD", "10.00")).expect("old");
    let snapshot = CatalogSnapshot::builder()
        .enclosure(enclosure("NEW", "20.00"))
        .expect("builder")
        .build();
    catalog.replace_with(&snapshot).expect("replace");
    assert!(catalog.enclosure("OLD").is_err());
    assert!(catalog.enclosure("NEW").is_ok());
}
