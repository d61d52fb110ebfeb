//! 与目录记录关联后的订单（同一目录快照）。

use crate::{Enclosure, Gland, GlandRequest, Side, Terminal, TerminalRequest};
use std::collections::BTreeMap;

/// 关联目录后的格兰头需求。
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedGland {
    pub side: Side,
    pub request: GlandRequest,
    pub gland: Gland,
}

/// 关联目录后的端子需求。
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTerminal {
    pub request: TerminalRequest,
    pub terminal: Terminal,
}

/// 关联目录后的订单行。
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLine {
    pub line_index: usize,
    pub quantity: u32,
    pub enclosure: Enclosure,
    pub glands: Vec<ResolvedGland>,
    pub terminals: Vec<ResolvedTerminal>,
}

impl ResolvedLine {
    /// 按面分组的格兰头视图。
    pub fn glands_by_side(&self) -> BTreeMap<Side, Vec<&ResolvedGland>> {
        let mut by_side: BTreeMap<Side, Vec<&ResolvedGland>> = BTreeMap::new();
        for gland in &self.glands {
            by_side.entry(gland.side).or_default().push(gland);
        }
        by_side
    }
}

/// 关联目录后的订单。
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOrder {
    pub lines: Vec<ResolvedLine>,
}
