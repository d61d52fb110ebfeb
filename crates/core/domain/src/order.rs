//! 订单模型与结构校验。

use crate::{Material, Side};
use std::collections::BTreeMap;
use std::fmt;

/// 单个格兰头需求。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlandRequest {
    pub size: String,
    pub material: Material,
    pub quantity: u32,
}

/// 同一安装面上的格兰头需求。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlandGroup {
    pub side: Side,
    pub items: Vec<GlandRequest>,
}

/// 单个端子需求。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalRequest {
    pub cross_section: String,
    pub color: String,
    pub quantity: u32,
}

/// 一台机箱的配置：按面分组的格兰头与端子清单。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineConfiguration {
    pub glands: Vec<GlandGroup>,
    pub terminals: Vec<TerminalRequest>,
}

impl LineConfiguration {
    /// 扁平视图（报价用），保持分组顺序。
    pub fn gland_items(&self) -> impl Iterator<Item = (Side, &GlandRequest)> + '_ {
        self.glands
            .iter()
            .flat_map(|group| group.items.iter().map(move |item| (group.side, item)))
    }

    /// 按面视图（装配校验用）；同一面的多个分组合并。
    pub fn glands_by_side(&self) -> BTreeMap<Side, Vec<&GlandRequest>> {
        let mut by_side: BTreeMap<Side, Vec<&GlandRequest>> = BTreeMap::new();
        for (side, item) in self.gland_items() {
            by_side.entry(side).or_default().push(item);
        }
        by_side
    }
}

/// 订单行（一种已配置的机箱及其数量）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub enclosure_code: String,
    pub quantity: u32,
    pub configuration: LineConfiguration,
    pub comment: Option<String>,
}

impl OrderLine {
    pub fn new(enclosure_code: impl Into<String>, quantity: u32) -> Self {
        Self {
            enclosure_code: enclosure_code.into(),
            quantity,
            configuration: LineConfiguration::default(),
            comment: None,
        }
    }

    pub fn with_glands(mut self, side: Side, items: Vec<GlandRequest>) -> Self {
        self.configuration.glands.push(GlandGroup { side, items });
        self
    }

    pub fn with_terminal(
        mut self,
        cross_section: impl Into<String>,
        color: impl Into<String>,
        quantity: u32,
    ) -> Self {
        self.configuration.terminals.push(TerminalRequest {
            cross_section: cross_section.into(),
            color: color.into(),
            quantity,
        });
        self
    }
}

/// 客户订单。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub customer_name: String,
    pub customer_email: String,
    pub note: String,
    pub lines: Vec<OrderLine>,
}

impl Order {
    pub fn new(
        customer_name: impl Into<String>,
        customer_email: impl Into<String>,
        lines: Vec<OrderLine>,
    ) -> Self {
        Self {
            customer_name: customer_name.into(),
            customer_email: customer_email.into(),
            note: String::new(),
            lines,
        }
    }

    /// 结构校验：收集全部问题后一次返回。
    pub fn check_shape(&self) -> Result<(), InvalidOrderShape> {
        let mut issues = Vec::new();
        if self.lines.is_empty() {
            issues.push(ShapeIssue::new("lines", "order must contain at least one line"));
        }
        for (index, line) in self.lines.iter().enumerate() {
            if line.quantity == 0 {
                issues.push(ShapeIssue::new(
                    format!("lines[{index}].quantity"),
                    "quantity must be at least 1",
                ));
            }
            if line.enclosure_code.trim().is_empty() {
                issues.push(ShapeIssue::new(
                    format!("lines[{index}].enclosure_code"),
                    "enclosure code required",
                ));
            }
        }
        InvalidOrderShape::from_issues(issues)
    }
}

/// 单条结构问题。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeIssue {
    pub field: String,
    pub message: String,
}

impl ShapeIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ShapeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// 订单结构不合法。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid order: {}", join_issues(.issues))]
pub struct InvalidOrderShape {
    pub issues: Vec<ShapeIssue>,
}

impl InvalidOrderShape {
    /// 无问题时返回 Ok。
    pub fn from_issues(issues: Vec<ShapeIssue>) -> Result<(), Self> {
        if issues.is_empty() {
            Ok(())
        } else {
            Err(Self { issues })
        }
    }
}

fn join_issues(issues: &[ShapeIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
