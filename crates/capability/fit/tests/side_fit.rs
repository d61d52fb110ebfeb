use domain::{
    Dimensions, Enclosure, FitFailureReason, FitScope, Gland, GlandRequest, ItemRef, MarginMode,
    Material, MountingArea, ResolvedGland, Side,
};
use encl_fit::{FitPolicy, check_side_fit, side_capacity};
use rust_decimal::Decimal;

fn enclosure() -> Enclosure {
    // 上面：120 - 2 × 10 = 100 mm；左面：200 - 2 × 20 = 160 mm
    Enclosure::new(
        "E1",
        "Enclosure",
        Dimensions::new(120.0, 200.0, 90.0),
        Decimal::new(9900, 2),
    )
    .with_mounting_area(Side::Top, MountingArea::new(10.0, 5.0))
    .with_mounting_area(Side::Left, MountingArea::new(5.0, 20.0))
}

fn resolved(side: Side, size: &str, physical_diameter_mm: f64, quantity: u32) -> ResolvedGland {
    ResolvedGland {
        side,
        request: GlandRequest {
            size: size.to_string(),
            material: Material::Pa,
            quantity,
        },
        gland: Gland {
            size: size.to_string(),
            material: Material::Pa,
            diameter_mm: physical_diameter_mm - 2.0,
            physical_diameter_mm,
            cable_range_min_mm: 1.0,
            cable_range_max_mm: 2.0,
            price: Decimal::new(100, 2),
            catalog_number: format!("GL-{size}"),
        },
    }
}

fn check(side: Side, glands: &[ResolvedGland]) -> encl_fit::FitOutcome {
    let policy = FitPolicy::default();
    let capacity = side_capacity(&enclosure(), side, &policy);
    let refs: Vec<&ResolvedGland> = glands.iter().collect();
    check_side_fit(side, capacity, &refs, &policy)
}

#[test]
fn capacity_uses_axis_and_margin_mode() {
    let symmetric = FitPolicy::default();
    assert_eq!(side_capacity(&enclosure(), Side::Top, &symmetric), Some(100.0));
    assert_eq!(side_capacity(&enclosure(), Side::Left, &symmetric), Some(160.0));
    assert_eq!(side_capacity(&enclosure(), Side::Right, &symmetric), None);

    let near_edge = FitPolicy {
        margin_mode: MarginMode::NearEdgeOnly,
        ..FitPolicy::default()
    };
    assert_eq!(side_capacity(&enclosure(), Side::Top, &near_edge), Some(110.0));
}

#[test]
fn capacity_never_goes_negative() {
    let tiny = Enclosure::new(
        "T",
        "Tiny",
        Dimensions::new(10.0, 10.0, 10.0),
        Decimal::ZERO,
    )
    .with_mounting_area(Side::Top, MountingArea::new(8.0, 0.0));
    assert_eq!(side_capacity(&tiny, Side::Top, &FitPolicy::default()), Some(0.0));
}

#[test]
fn three_glands_fit_on_top() {
    let outcome = check(Side::Top, &[resolved(Side::Top, "M20", 20.0, 3)]);
    assert!(outcome.fits());
    assert_eq!(outcome.required_mm, 64.0);
    assert_eq!(outcome.available_mm, Some(100.0));
    assert!(outcome.offending_items.is_empty());
}

#[test]
fn five_glands_overflow_top() {
    let outcome = check(Side::Top, &[resolved(Side::Top, "M20", 20.0, 5)]);
    assert!(!outcome.fits());
    assert_eq!(outcome.failure, Some(FitFailureReason::Overflow));

    let failure = outcome.into_failure(0).expect("failure");
    assert_eq!(failure.scope, FitScope::Side(Side::Top));
    assert_eq!(failure.required_mm, 108.0);
    assert_eq!(failure.available_mm, 100.0);
    assert_eq!(
        failure.offending_items,
        vec![ItemRef::Gland {
            size: "M20".to_string(),
            material: Material::Pa,
            quantity: 5,
        }]
    );
}

#[test]
fn exact_fill_fits() {
    // 2 × 49 + 2 = 100
    let outcome = check(Side::Top, &[resolved(Side::Top, "M50", 49.0, 2)]);
    assert!(outcome.fits());
}

#[test]
fn growing_one_diameter_flips_to_overflow() {
    let mut glands = vec![
        resolved(Side::Top, "M20", 20.0, 2),
        resolved(Side::Top, "M25", 25.0, 1),
    ];
    // 40 + 25 + 2 × 2 = 69
    assert!(check(Side::Top, &glands).fits());

    glands[1].gland.physical_diameter_mm = 56.0;
    // 40 + 56 + 4 = 100
    assert!(check(Side::Top, &glands).fits());

    glands[1].gland.physical_diameter_mm = 56.5;
    let outcome = check(Side::Top, &glands);
    assert_eq!(outcome.failure, Some(FitFailureReason::Overflow));
    assert_eq!(outcome.scope, FitScope::Side(Side::Top));
    assert_eq!(outcome.offending_items.len(), 2);
}

#[test]
fn clearance_counts_across_groups() {
    let policy = FitPolicy {
        gland_clearance_mm: 5.0,
        ..FitPolicy::default()
    };
    let glands = [
        resolved(Side::Left, "M20", 20.0, 2),
        resolved(Side::Left, "M32", 32.0, 1),
    ];
    let refs: Vec<&ResolvedGland> = glands.iter().collect();
    let capacity = side_capacity(&enclosure(), Side::Left, &policy);
    let outcome = check_side_fit(Side::Left, capacity, &refs, &policy);
    assert_eq!(outcome.required_mm, 40.0 + 32.0 + 2.0 * 5.0);
}

#[test]
fn undeclared_side_is_unsupported() {
    let outcome = check(Side::Right, &[resolved(Side::Right, "M12", 15.0, 1)]);
    assert_eq!(outcome.failure, Some(FitFailureReason::UnsupportedSide));
    assert_eq!(outcome.available_mm, None);
    let failure = outcome.into_failure(2).expect("failure");
    assert_eq!(failure.line_index, 2);
    assert_eq!(failure.available_mm, 0.0);
    assert_eq!(failure.reason.to_string(), "unsupported side");
}

#[test]
fn zero_quantity_on_undeclared_side_is_fine() {
    let outcome = check(Side::Bottom, &[resolved(Side::Bottom, "M12", 15.0, 0)]);
    assert!(outcome.fits());
    assert_eq!(outcome.required_mm, 0.0);
}

#[test]
fn zero_quantity_items_are_not_offending() {
    let outcome = check(
        Side::Top,
        &[
            resolved(Side::Top, "M20", 20.0, 5),
            resolved(Side::Top, "M12", 15.0, 0),
        ],
    );
    assert_eq!(outcome.required_mm, 108.0);
    assert_eq!(outcome.offending_items.len(), 1);
}

#[test]
fn cable_range_is_ignored() {
    let mut gland = resolved(Side::Top, "M20", 20.0, 1);
    gland.gland.cable_range_min_mm = 50.0;
    gland.gland.cable_range_max_mm = 60.0;
    assert!(check(Side::Top, &[gland]).fits());
}
