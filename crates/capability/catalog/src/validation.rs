//! 验证辅助函数
//!
//! 目录记录写入前的合法性校验：
//! - ensure_price：价格非负且最多两位小数
//! - ensure_enclosure / ensure_gland / ensure_terminal：尺寸与键的约束

use crate::error::{CatalogError, CatalogKind};
use domain::{Enclosure, Gland, Side, Terminal};
use rust_decimal::Decimal;

/// 验证价格非负且最多两位小数
pub fn ensure_price(kind: CatalogKind, key: &str, price: Decimal) -> Result<(), CatalogError> {
    if price < Decimal::ZERO {
        return Err(CatalogError::invalid(kind, key, "price must not be negative"));
    }
    if price.normalize().scale() > 2 {
        return Err(CatalogError::invalid(
            kind,
            key,
            "price must have at most two fractional digits",
        ));
    }
    Ok(())
}

fn ensure_positive(
    kind: CatalogKind,
    key: &str,
    field: &str,
    value: f64,
) -> Result<(), CatalogError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CatalogError::invalid(kind, key, format!("{field} must be positive")));
    }
    Ok(())
}

fn ensure_non_negative(
    kind: CatalogKind,
    key: &str,
    field: &str,
    value: f64,
) -> Result<(), CatalogError> {
    if !value.is_finite() || value < 0.0 {
        return Err(CatalogError::invalid(
            kind,
            key,
            format!("{field} must not be negative"),
        ));
    }
    Ok(())
}

fn ensure_key(kind: CatalogKind, key: &str, field: &str, value: &str) -> Result<(), CatalogError> {
    if value.trim().is_empty() {
        return Err(CatalogError::invalid(kind, key, format!("{field} required")));
    }
    Ok(())
}

/// 验证机箱记录
pub fn ensure_enclosure(enclosure: &Enclosure) -> Result<(), CatalogError> {
    let kind = CatalogKind::Enclosure;
    let key = enclosure.code.as_str();
    ensure_key(kind, key, "code", key)?;
    ensure_positive(kind, key, "dimension_width", enclosure.dimensions.width_mm)?;
    ensure_positive(kind, key, "dimension_height", enclosure.dimensions.height_mm)?;
    ensure_positive(kind, key, "dimension_depth", enclosure.dimensions.depth_mm)?;
    ensure_price(kind, key, enclosure.price)?;
    for side in Side::ALL {
        if let Some(area) = enclosure.mounting_area(side) {
            ensure_non_negative(kind, key, &format!("mounting_area_{side}_x"), area.x_mm)?;
            ensure_non_negative(kind, key, &format!("mounting_area_{side}_y"), area.y_mm)?;
        }
    }
    if let Some(rail) = &enclosure.terminal_rail {
        ensure_non_negative(kind, key, "rail_width_mm", rail.usable_width_mm)?;
    }
    Ok(())
}

/// 验证格兰头记录
pub fn ensure_gland(gland: &Gland) -> Result<(), CatalogError> {
    let kind = CatalogKind::Gland;
    let key = format!("{}/{}", gland.size, gland.material);
    ensure_key(kind, &key, "size", &gland.size)?;
    ensure_positive(kind, &key, "diameter_mm", gland.diameter_mm)?;
    ensure_positive(kind, &key, "physical_diameter_mm", gland.physical_diameter_mm)?;
    if gland.physical_diameter_mm < gland.diameter_mm {
        return Err(CatalogError::invalid(
            kind,
            key,
            "physical_diameter_mm must not be smaller than diameter_mm",
        ));
    }
    ensure_non_negative(kind, &key, "cable_range_min", gland.cable_range_min_mm)?;
    ensure_non_negative(kind, &key, "cable_range_max", gland.cable_range_max_mm)?;
    if gland.cable_range_min_mm > gland.cable_range_max_mm {
        return Err(CatalogError::invalid(
            kind,
            key,
            "cable_range_min must not exceed cable_range_max",
        ));
    }
    ensure_price(kind, &key, gland.price)
}

/// 验证端子记录
pub fn ensure_terminal(terminal: &Terminal) -> Result<(), CatalogError> {
    let kind = CatalogKind::Terminal;
    let key = format!("{}/{}", terminal.wire_cross_section, terminal.color);
    ensure_key(kind, &key, "wire_cross_section", &terminal.wire_cross_section)?;
    ensure_key(kind, &key, "color", &terminal.color)?;
    ensure_positive(kind, &key, "width_mm", terminal.width_mm)?;
    ensure_price(kind, &key, terminal.price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_with_three_digits_is_rejected() {
        let price: Decimal = "1.005".parse().expect("decimal");
        let err = ensure_price(CatalogKind::Gland, "M12/PA", price).expect_err("scale");
        assert!(err.to_string().contains("two fractional digits"));
    }

    #[test]
    fn trailing_zeros_do_not_count() {
        let price: Decimal = "1.500".parse().expect("decimal");
        assert!(ensure_price(CatalogKind::Gland, "M12/PA", price).is_ok());
    }

    #[test]
    fn negative_price_is_rejected() {
        let price: Decimal = "-0.01".parse().expect("decimal");
        assert!(ensure_price(CatalogKind::Terminal, "2.5/grey", price).is_err());
    }
}
