//! JSON 目录文件加载
//!
//! 文件结构：
//! - `enclosures.json`：`{ "enclosures": [...] }`
//! - `glands.json`：`{ "glands": [...] }`
//! - `terminals.json`：`{ "terminals": [...] }`
//!
//! `enclosure_terminals` 可以是数字（导轨宽度 mm）或 `{ "rail_width_mm": ... }`，
//! 为 null 或缺省表示没有导轨。

use crate::error::{CatalogError, CatalogKind};
use crate::snapshot::CatalogSnapshot;
use domain::{Dimensions, Enclosure, Gland, Material, MountingArea, Side, Terminal};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct EnclosureFixture {
    name: String,
    code: String,
    dimension_width: f64,
    dimension_height: f64,
    dimension_depth: f64,
    price: Decimal,
    #[serde(default)]
    mounting_areas: MountingAreasFixture,
    #[serde(default)]
    enclosure_terminals: Option<RailFixture>,
}

#[derive(Debug, Default, Deserialize)]
struct MountingAreasFixture {
    top: Option<AreaFixture>,
    #[serde(alias = "bottom")]
    down: Option<AreaFixture>,
    left: Option<AreaFixture>,
    right: Option<AreaFixture>,
}

#[derive(Debug, Deserialize)]
struct AreaFixture {
    x: Option<f64>,
    y: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RailFixture {
    Width(f64),
    Described { rail_width_mm: f64 },
}

impl RailFixture {
    fn width_mm(&self) -> f64 {
        match self {
            RailFixture::Width(width) => *width,
            RailFixture::Described { rail_width_mm } => *rail_width_mm,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GlandFixture {
    size: String,
    diameter_mm: f64,
    physical_diameter_mm: f64,
    cable_range_min: f64,
    cable_range_max: f64,
    material: String,
    price: Decimal,
    catalog_number: String,
}

#[derive(Debug, Deserialize)]
struct TerminalFixture {
    wire_cross_section: String,
    width_mm: f64,
    color: String,
    voltage: f64,
    current: f64,
    price: Decimal,
    catalog_number: String,
}

fn records<T: DeserializeOwned>(json: &str, key: &'static str) -> Result<Vec<T>, CatalogError> {
    let mut raw: serde_json::Value = serde_json::from_str(json)?;
    let items = raw
        .get_mut(key)
        .map(serde_json::Value::take)
        .ok_or(CatalogError::MissingKey(key))?;
    Ok(serde_json::from_value(items)?)
}

fn mounting_area(code: &str, side: Side, area: Option<&AreaFixture>) -> Option<MountingArea> {
    let area = area?;
    match (area.x, area.y) {
        (Some(x), Some(y)) => Some(MountingArea::new(x, y)),
        _ => {
            tracing::warn!(code, side = side.as_str(), "mounting area without x/y ignored");
            None
        }
    }
}

/// 解析机箱目录文件
pub fn parse_enclosures(json: &str) -> Result<Vec<Enclosure>, CatalogError> {
    let fixtures: Vec<EnclosureFixture> = records(json, "enclosures")?;
    Ok(fixtures
        .into_iter()
        .map(|item| {
            let areas = &item.mounting_areas;
            let sides = [
                (Side::Top, areas.top.as_ref()),
                (Side::Bottom, areas.down.as_ref()),
                (Side::Left, areas.left.as_ref()),
                (Side::Right, areas.right.as_ref()),
            ];
            let mut enclosure = Enclosure::new(
                item.code.clone(),
                item.name.clone(),
                Dimensions::new(
                    item.dimension_width,
                    item.dimension_height,
                    item.dimension_depth,
                ),
                item.price,
            );
            for (side, area) in sides {
                if let Some(area) = mounting_area(&item.code, side, area) {
                    enclosure = enclosure.with_mounting_area(side, area);
                }
            }
            if let Some(rail) = &item.enclosure_terminals {
                enclosure = enclosure.with_terminal_rail(rail.width_mm());
            }
            enclosure
        })
        .collect())
}

/// 解析格兰头目录文件
pub fn parse_glands(json: &str) -> Result<Vec<Gland>, CatalogError> {
    let fixtures: Vec<GlandFixture> = records(json, "glands")?;
    fixtures
        .into_iter()
        .map(|item| {
            let material = item.material.parse::<Material>().map_err(|err| {
                CatalogError::invalid(CatalogKind::Gland, &item.catalog_number, err.to_string())
            })?;
            Ok(Gland {
                size: item.size,
                material,
                diameter_mm: item.diameter_mm,
                physical_diameter_mm: item.physical_diameter_mm,
                cable_range_min_mm: item.cable_range_min,
                cable_range_max_mm: item.cable_range_max,
                price: item.price,
                catalog_number: item.catalog_number,
            })
        })
        .collect()
}

/// 解析端子目录文件
pub fn parse_terminals(json: &str) -> Result<Vec<Terminal>, CatalogError> {
    let fixtures: Vec<TerminalFixture> = records(json, "terminals")?;
    Ok(fixtures
        .into_iter()
        .map(|item| Terminal {
            wire_cross_section: item.wire_cross_section,
            width_mm: item.width_mm,
            color: item.color,
            voltage: item.voltage,
            current: item.current,
            price: item.price,
            catalog_number: item.catalog_number,
        })
        .collect())
}

/// 由三份 JSON 文本构建快照（任一记录非法则整体失败）。
pub fn snapshot_from_json(
    enclosures: &str,
    glands: &str,
    terminals: &str,
) -> Result<CatalogSnapshot, CatalogError> {
    let mut builder = CatalogSnapshot::builder();
    for enclosure in parse_enclosures(enclosures)? {
        builder = builder.enclosure(enclosure)?;
    }
    for gland in parse_glands(glands)? {
        builder = builder.gland(gland)?;
    }
    for terminal in parse_terminals(terminals)? {
        builder = builder.terminal(terminal)?;
    }
    Ok(builder.build())
}

fn read_file(path: &Path) -> Result<String, CatalogError> {
    std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// 从目录读取 enclosures.json、glands.json、terminals.json。
pub fn load_catalog_dir(dir: impl AsRef<Path>) -> Result<CatalogSnapshot, CatalogError> {
    let dir = dir.as_ref();
    let snapshot = snapshot_from_json(
        &read_file(&dir.join("enclosures.json"))?,
        &read_file(&dir.join("glands.json"))?,
        &read_file(&dir.join("terminals.json"))?,
    )
    .inspect_err(|err| tracing::warn!(dir = %dir.display(), error = %err, "catalog load failed"))?;
    tracing::info!(
        dir = %dir.display(),
        enclosures = snapshot.enclosure_count(),
        glands = snapshot.gland_count(),
        terminals = snapshot.terminal_count(),
        "catalog snapshot loaded"
    );
    Ok(snapshot)
}
