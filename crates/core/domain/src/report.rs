//! 报价与装配校验结果。

use crate::{Material, Side};
use rust_decimal::Decimal;
use std::fmt;

/// 校验范围：某个安装面或端子导轨。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitScope {
    Side(Side),
    Rail,
}

impl FitScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            FitScope::Side(side) => side.as_str(),
            FitScope::Rail => "rail",
        }
    }
}

impl fmt::Display for FitScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 装不下的原因。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitFailureReason {
    /// 所需长度超出可用长度。
    Overflow,
    /// 机箱未声明该安装面。
    UnsupportedSide,
    /// 机箱没有端子导轨。
    NoTerminalRail,
}

impl FitFailureReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FitFailureReason::Overflow => "overflow",
            FitFailureReason::UnsupportedSide => "unsupported_side",
            FitFailureReason::NoTerminalRail => "no_terminal_rail",
        }
    }
}

impl fmt::Display for FitFailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            FitFailureReason::Overflow => "required space exceeds available space",
            FitFailureReason::UnsupportedSide => "unsupported side",
            FitFailureReason::NoTerminalRail => "no terminal rail available",
        };
        f.write_str(text)
    }
}

/// 导致失败的条目。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemRef {
    Gland {
        size: String,
        material: Material,
        quantity: u32,
    },
    Terminal {
        cross_section: String,
        color: String,
        quantity: u32,
    },
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemRef::Gland {
                size,
                material,
                quantity,
            } => write!(f, "{quantity}x gland {size}/{material}"),
            ItemRef::Terminal {
                cross_section,
                color,
                quantity,
            } => write!(f, "{quantity}x terminal {cross_section}/{color}"),
        }
    }
}

/// 单条装配失败记录（不中断流程，累积返回）。
#[derive(Debug, Clone, PartialEq)]
pub struct FitFailure {
    pub line_index: usize,
    pub scope: FitScope,
    pub reason: FitFailureReason,
    pub required_mm: f64,
    pub available_mm: f64,
    pub offending_items: Vec<ItemRef>,
}

impl fmt::Display for FitFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {} {}: {} (required {:.3} mm, available {:.3} mm)",
            self.line_index, self.scope, self.reason, self.required_mm, self.available_mm
        )
    }
}

/// 单个范围的容量占用。
#[derive(Debug, Clone, PartialEq)]
pub struct CapacityUsage {
    pub scope: FitScope,
    pub required_mm: f64,
    /// `None` 表示该面或导轨不存在。
    pub available_mm: Option<f64>,
    pub fits: bool,
}

/// 单行价格（均已乘以行数量）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinePrice {
    pub line_index: usize,
    pub enclosure: Decimal,
    pub glands: Decimal,
    pub terminals: Decimal,
    pub total: Decimal,
}

/// 订单价格汇总。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceBreakdown {
    pub enclosures: Decimal,
    pub glands: Decimal,
    pub terminals: Decimal,
    pub total: Decimal,
    pub lines: Vec<LinePrice>,
}

/// 单行装配明细。
#[derive(Debug, Clone, PartialEq)]
pub struct LineReport {
    pub line_index: usize,
    pub enclosure_code: String,
    pub quantity: u32,
    pub usage: Vec<CapacityUsage>,
}

impl LineReport {
    pub fn fits(&self) -> bool {
        self.usage.iter().all(|usage| usage.fits)
    }
}

/// 订单校验结果：即使装配失败也包含完整价格。
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub fits: bool,
    pub failures: Vec<FitFailure>,
    pub price: PriceBreakdown,
    pub lines: Vec<LineReport>,
}

impl ValidationResult {
    pub fn total_price(&self) -> Decimal {
        self.price.total
    }

    /// 指定行的失败记录。
    pub fn failures_for_line(&self, line_index: usize) -> impl Iterator<Item = &FitFailure> + '_ {
        self.failures
            .iter()
            .filter(move |failure| failure.line_index == line_index)
    }
}
