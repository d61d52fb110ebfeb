//! 装配可行性校验：安装面格兰头排布与端子导轨容量。
//!
//! 两类校验都只判断能否放下，不做具体布局：
//! - 安装面：`Σ(实际直径 × 数量) + 间隙 × (总数 - 1)` 与可用长度比较
//! - 导轨：`Σ(端子宽度 × 数量)` 与导轨可用宽度比较
//!
//! 比较带容差：`required <= available + epsilon`。

use domain::{
    CapacityUsage, Enclosure, FitFailure, FitFailureReason, FitScope, ItemRef, MarginMode,
    ResolvedGland, ResolvedTerminal, Side, TerminalRail,
};

/// 装配校验参数。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitPolicy {
    /// 同一面相邻格兰头之间的最小间隙（mm）。
    pub gland_clearance_mm: f64,
    /// 比较容差（mm）。
    pub epsilon_mm: f64,
    pub margin_mode: MarginMode,
}

impl FitPolicy {
    pub const DEFAULT_GLAND_CLEARANCE_MM: f64 = 2.0;
    pub const DEFAULT_EPSILON_MM: f64 = 1e-6;
}

impl Default for FitPolicy {
    fn default() -> Self {
        Self {
            gland_clearance_mm: Self::DEFAULT_GLAND_CLEARANCE_MM,
            epsilon_mm: Self::DEFAULT_EPSILON_MM,
            margin_mode: MarginMode::default(),
        }
    }
}

/// 单项校验结果。
#[derive(Debug, Clone, PartialEq)]
pub struct FitOutcome {
    pub scope: FitScope,
    pub required_mm: f64,
    /// `None` 表示该面或导轨不存在。
    pub available_mm: Option<f64>,
    pub failure: Option<FitFailureReason>,
    pub offending_items: Vec<ItemRef>,
}

impl FitOutcome {
    pub fn fits(&self) -> bool {
        self.failure.is_none()
    }

    pub fn usage(&self) -> CapacityUsage {
        CapacityUsage {
            scope: self.scope,
            required_mm: self.required_mm,
            available_mm: self.available_mm,
            fits: self.fits(),
        }
    }

    /// 转换为订单级失败记录；能放下时返回 None。
    pub fn into_failure(self, line_index: usize) -> Option<FitFailure> {
        let reason = self.failure?;
        Some(FitFailure {
            line_index,
            scope: self.scope,
            reason,
            required_mm: self.required_mm,
            available_mm: self.available_mm.unwrap_or(0.0),
            offending_items: self.offending_items,
        })
    }
}

/// 面沿排布方向的可用长度；未声明的面返回 None。
pub fn side_capacity(enclosure: &Enclosure, side: Side, policy: &FitPolicy) -> Option<f64> {
    let (extent, offset) = enclosure.side_extent(side)?;
    let available = extent - policy.margin_mode.margin_count() * offset;
    Some(available.max(0.0))
}

fn within(required: f64, available: f64, policy: &FitPolicy) -> bool {
    required <= available + policy.epsilon_mm
}

/// 校验某一面的格兰头是否放得下（只看实际直径，不看电缆范围）。
pub fn check_side_fit(
    side: Side,
    capacity_mm: Option<f64>,
    glands: &[&ResolvedGland],
    policy: &FitPolicy,
) -> FitOutcome {
    let count: u64 = glands
        .iter()
        .map(|item| u64::from(item.request.quantity))
        .sum();
    let required_mm = if count == 0 {
        0.0
    } else {
        let footprint: f64 = glands
            .iter()
            .map(|item| item.gland.physical_diameter_mm * f64::from(item.request.quantity))
            .sum();
        footprint + policy.gland_clearance_mm * (count - 1) as f64
    };

    let failure = match capacity_mm {
        _ if count == 0 => None,
        None => Some(FitFailureReason::UnsupportedSide),
        Some(available) if within(required_mm, available, policy) => None,
        Some(_) => Some(FitFailureReason::Overflow),
    };
    let offending_items = if failure.is_some() {
        glands
            .iter()
            .filter(|item| item.request.quantity > 0)
            .map(|item| ItemRef::Gland {
                size: item.request.size.clone(),
                material: item.request.material,
                quantity: item.request.quantity,
            })
            .collect()
    } else {
        Vec::new()
    };

    FitOutcome {
        scope: FitScope::Side(side),
        required_mm,
        available_mm: capacity_mm,
        failure,
        offending_items,
    }
}

/// 校验端子总宽度是否不超过导轨宽度；颜色顺序不参与校验。
pub fn check_rail_fit(
    rail: Option<&TerminalRail>,
    terminals: &[ResolvedTerminal],
    policy: &FitPolicy,
) -> FitOutcome {
    let count: u64 = terminals
        .iter()
        .map(|item| u64::from(item.request.quantity))
        .sum();
    let required_mm: f64 = terminals
        .iter()
        .map(|item| item.terminal.width_mm * f64::from(item.request.quantity))
        .sum();
    let available_mm = rail.map(|rail| rail.usable_width_mm);

    let failure = match available_mm {
        _ if count == 0 => None,
        None => Some(FitFailureReason::NoTerminalRail),
        Some(available) if within(required_mm, available, policy) => None,
        Some(_) => Some(FitFailureReason::Overflow),
    };
    let offending_items = if failure.is_some() {
        terminals
            .iter()
            .filter(|item| item.request.quantity > 0)
            .map(|item| ItemRef::Terminal {
                cross_section: item.request.cross_section.clone(),
                color: item.request.color.clone(),
                quantity: item.request.quantity,
            })
            .collect()
    } else {
        Vec::new()
    };

    FitOutcome {
        scope: FitScope::Rail,
        required_mm,
        available_mm,
        failure,
        offending_items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn within_absorbs_representation_error() {
        let policy = FitPolicy::default();
        assert!(within(0.1 + 0.2, 0.3, &policy));
        assert!(!within(100.001, 100.0, &policy));
    }
}
