use domain::{GlandRequest, Material, Order, OrderLine, Side};

fn gland(size: &str, quantity: u32) -> GlandRequest {
    GlandRequest {
        size: size.to_string(),
        material: Material::Pa,
        quantity,
    }
}

#[test]
fn side_parse_accepts_down_alias() {
    assert_eq!(Side::parse("down"), Some(Side::Bottom));
    assert_eq!(Side::parse(" Top "), Some(Side::Top));
    assert_eq!(Side::parse("front"), None);
}

#[test]
fn material_parse_is_case_insensitive() {
    assert_eq!("brass".parse::<Material>().expect("brass"), Material::Brass);
    assert_eq!("PA".parse::<Material>().expect("pa"), Material::Pa);
    assert!("steel".parse::<Material>().is_err());
}

#[test]
fn gland_views_share_items() {
    let line = OrderLine::new("E1", 1)
        .with_glands(Side::Top, vec![gland("M12", 2), gland("M20", 1)])
        .with_glands(Side::Left, vec![gland("M16", 3)])
        .with_glands(Side::Top, vec![gland("M25", 1)]);

    let flat: Vec<_> = line
        .configuration
        .gland_items()
        .map(|(side, item)| (side, item.size.as_str()))
        .collect();
    assert_eq!(
        flat,
        vec![
            (Side::Top, "M12"),
            (Side::Top, "M20"),
            (Side::Left, "M16"),
            (Side::Top, "M25"),
        ]
    );

    let by_side = line.configuration.glands_by_side();
    assert_eq!(by_side.len(), 2);
    assert_eq!(by_side[&Side::Top].len(), 3);
    assert_eq!(by_side[&Side::Left][0].quantity, 3);
}

#[test]
fn check_shape_reports_every_issue() {
    let order = Order::new(
        "Jan",
        "jan@example.com",
        vec![OrderLine::new("E1", 0), OrderLine::new(" ", 2)],
    );
    let err = order.check_shape().expect_err("invalid");
    assert_eq!(err.issues.len(), 2);
    assert_eq!(err.issues[0].field, "lines[0].quantity");
    assert_eq!(err.issues[1].field, "lines[1].enclosure_code");
}

#[test]
fn check_shape_rejects_empty_order() {
    let order = Order::new("Jan", "jan@example.com", Vec::new());
    let err = order.check_shape().expect_err("empty");
    assert!(err.to_string().contains("at least one line"));
}

#[test]
fn check_shape_accepts_valid_order() {
    let order = Order::new("Jan", "jan@example.com", vec![OrderLine::new("E1", 1)]);
    assert!(order.check_shape().is_ok());
}
