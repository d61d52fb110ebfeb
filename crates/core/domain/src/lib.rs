//! 机箱报价领域模型：目录实体、订单、解析后的订单与校验结果。

pub mod catalog;
pub mod order;
pub mod report;
pub mod resolved;

pub use catalog::{Dimensions, Enclosure, Gland, MountingArea, Terminal, TerminalRail};
pub use order::{
    GlandGroup, GlandRequest, InvalidOrderShape, LineConfiguration, Order, OrderLine, ShapeIssue,
    TerminalRequest,
};
pub use report::{
    CapacityUsage, FitFailure, FitFailureReason, FitScope, ItemRef, LinePrice, LineReport,
    PriceBreakdown, ValidationResult,
};
pub use resolved::{ResolvedGland, ResolvedLine, ResolvedOrder, ResolvedTerminal};

use std::fmt;
use std::str::FromStr;

/// 机箱安装面（最多四个）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// 固定遍历顺序：上、下、左、右。
    pub const ALL: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    /// 解析安装面名称（兼容目录数据中的 `down`）。
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "top" => Some(Side::Top),
            "bottom" | "down" => Some(Side::Bottom),
            "left" => Some(Side::Left),
            "right" => Some(Side::Right),
            _ => None,
        }
    }

    /// 上下面沿宽度方向排布，左右面沿高度方向排布。
    pub fn runs_along_width(&self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Side::Top => 0,
            Side::Bottom => 1,
            Side::Left => 2,
            Side::Right => 3,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 格兰头材质。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Material {
    Pa,
    Brass,
}

impl Material {
    pub fn as_str(&self) -> &'static str {
        match self {
            Material::Pa => "PA",
            Material::Brass => "Brass",
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 未知材质。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown material: {0}")]
pub struct UnknownMaterial(pub String);

impl FromStr for Material {
    type Err = UnknownMaterial;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pa" => Ok(Material::Pa),
            "brass" => Ok(Material::Brass),
            _ => Err(UnknownMaterial(value.to_string())),
        }
    }
}

/// 安装面远端边距的取法。
///
/// 目录只记录每个面的一组原点偏移，远端是否留出相同边距由该策略决定。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarginMode {
    /// 远端边距与近端相同：可用长度 = 尺寸 - 2 × 偏移。
    #[default]
    Symmetric,
    /// 仅扣除近端边距：可用长度 = 尺寸 - 偏移。
    NearEdgeOnly,
}

impl MarginMode {
    /// 从偏移中扣除的边距份数。
    pub fn margin_count(&self) -> f64 {
        match self {
            MarginMode::Symmetric => 2.0,
            MarginMode::NearEdgeOnly => 1.0,
        }
    }
}
