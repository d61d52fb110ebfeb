//! 目录实体：机箱、格兰头、端子。

use crate::{Material, Side};
use rust_decimal::Decimal;

/// 机箱外形尺寸（毫米）。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width_mm: f64,
    pub height_mm: f64,
    pub depth_mm: f64,
}

impl Dimensions {
    pub fn new(width_mm: f64, height_mm: f64, depth_mm: f64) -> Self {
        Self {
            width_mm,
            height_mm,
            depth_mm,
        }
    }
}

/// 安装面原点偏移（毫米）。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MountingArea {
    pub x_mm: f64,
    pub y_mm: f64,
}

impl MountingArea {
    pub fn new(x_mm: f64, y_mm: f64) -> Self {
        Self { x_mm, y_mm }
    }
}

/// 端子导轨可用宽度。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerminalRail {
    pub usable_width_mm: f64,
}

/// 机箱目录记录。
#[derive(Debug, Clone, PartialEq)]
pub struct Enclosure {
    pub code: String,
    pub name: String,
    pub dimensions: Dimensions,
    pub price: Decimal,
    mounting_areas: [Option<MountingArea>; 4],
    pub terminal_rail: Option<TerminalRail>,
}

impl Enclosure {
    /// 构造不含安装面与导轨的机箱。
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        dimensions: Dimensions,
        price: Decimal,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            dimensions,
            price,
            mounting_areas: [None; 4],
            terminal_rail: None,
        }
    }

    pub fn with_mounting_area(mut self, side: Side, area: MountingArea) -> Self {
        self.mounting_areas[side.index()] = Some(area);
        self
    }

    pub fn with_terminal_rail(mut self, usable_width_mm: f64) -> Self {
        self.terminal_rail = Some(TerminalRail { usable_width_mm });
        self
    }

    /// 指定面的安装区域；未声明的面不接受格兰头。
    pub fn mounting_area(&self, side: Side) -> Option<&MountingArea> {
        self.mounting_areas[side.index()].as_ref()
    }

    /// 已声明的安装面（按 `Side::ALL` 顺序）。
    pub fn declared_sides(&self) -> impl Iterator<Item = Side> + '_ {
        Side::ALL
            .into_iter()
            .filter(|side| self.mounting_area(*side).is_some())
    }

    /// 面沿排布方向的外形尺寸与该方向的偏移。
    pub fn side_extent(&self, side: Side) -> Option<(f64, f64)> {
        let area = self.mounting_area(side)?;
        if side.runs_along_width() {
            Some((self.dimensions.width_mm, area.x_mm))
        } else {
            Some((self.dimensions.height_mm, area.y_mm))
        }
    }
}

/// 电缆格兰头目录记录，唯一键 (size, material)。
#[derive(Debug, Clone, PartialEq)]
pub struct Gland {
    pub size: String,
    pub material: Material,
    pub diameter_mm: f64,
    /// 实际占用直径，排布只看它。
    pub physical_diameter_mm: f64,
    pub cable_range_min_mm: f64,
    pub cable_range_max_mm: f64,
    pub price: Decimal,
    pub catalog_number: String,
}

/// 导轨端子目录记录，唯一键 (wire_cross_section, color)。
#[derive(Debug, Clone, PartialEq)]
pub struct Terminal {
    pub wire_cross_section: String,
    pub width_mm: f64,
    pub color: String,
    pub voltage: f64,
    pub current: f64,
    pub price: Decimal,
    pub catalog_number: String,
}
