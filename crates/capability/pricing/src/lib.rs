//! 订单报价：机箱、格兰头、端子按行汇总，全程定点小数。

use domain::{InvalidOrderShape, LinePrice, Order, PriceBreakdown, ResolvedLine, ResolvedOrder};
use encl_catalog::{CatalogLookup, CatalogLookupError, resolve_order};
use rust_decimal::Decimal;

/// 报价错误。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error(transparent)]
    InvalidOrder(#[from] InvalidOrderShape),
    #[error(transparent)]
    Catalog(#[from] CatalogLookupError),
    #[error("amount overflow on line {line_index}")]
    AmountOverflow { line_index: usize },
}

/// 结构校验后在同一目录快照上关联并报价；任一引用缺失则整体失败。
pub fn price(order: &Order, catalog: &dyn CatalogLookup) -> Result<PriceBreakdown, PricingError> {
    order.check_shape()?;
    let snapshot = catalog.snapshot()?;
    let resolved = resolve_order(&snapshot, order)?;
    price_resolved(&resolved)
}

/// 对已关联的订单报价。
pub fn price_resolved(order: &ResolvedOrder) -> Result<PriceBreakdown, PricingError> {
    let mut breakdown = PriceBreakdown {
        enclosures: Decimal::ZERO,
        glands: Decimal::ZERO,
        terminals: Decimal::ZERO,
        total: Decimal::ZERO,
        lines: Vec::with_capacity(order.lines.len()),
    };

    for line in &order.lines {
        let line_price = price_line(line)?;
        let overflow = || PricingError::AmountOverflow {
            line_index: line.line_index,
        };
        breakdown.enclosures = breakdown
            .enclosures
            .checked_add(line_price.enclosure)
            .ok_or_else(overflow)?;
        breakdown.glands = breakdown
            .glands
            .checked_add(line_price.glands)
            .ok_or_else(overflow)?;
        breakdown.terminals = breakdown
            .terminals
            .checked_add(line_price.terminals)
            .ok_or_else(overflow)?;
        breakdown.lines.push(line_price);
    }

    breakdown.total = breakdown
        .enclosures
        .checked_add(breakdown.glands)
        .and_then(|sum| sum.checked_add(breakdown.terminals))
        .ok_or(PricingError::AmountOverflow {
            line_index: order.lines.len().saturating_sub(1),
        })?;
    breakdown.enclosures = to_cents(breakdown.enclosures);
    breakdown.glands = to_cents(breakdown.glands);
    breakdown.terminals = to_cents(breakdown.terminals);
    breakdown.total = to_cents(breakdown.total);

    tracing::debug!(
        lines = breakdown.lines.len(),
        total = %breakdown.total,
        "order priced"
    );
    Ok(breakdown)
}

/// 单行价格：各分项先按单台求和，再乘以行数量。
pub fn price_line(line: &ResolvedLine) -> Result<LinePrice, PricingError> {
    let overflow = || PricingError::AmountOverflow {
        line_index: line.line_index,
    };
    let quantity = Decimal::from(line.quantity);

    let mut glands = Decimal::ZERO;
    for item in &line.glands {
        let amount = item
            .gland
            .price
            .checked_mul(Decimal::from(item.request.quantity))
            .ok_or_else(overflow)?;
        glands = glands.checked_add(amount).ok_or_else(overflow)?;
    }

    let mut terminals = Decimal::ZERO;
    for item in &line.terminals {
        let amount = item
            .terminal
            .price
            .checked_mul(Decimal::from(item.request.quantity))
            .ok_or_else(overflow)?;
        terminals = terminals.checked_add(amount).ok_or_else(overflow)?;
    }

    let enclosure = line
        .enclosure
        .price
        .checked_mul(quantity)
        .ok_or_else(overflow)?;
    let glands = glands.checked_mul(quantity).ok_or_else(overflow)?;
    let terminals = terminals.checked_mul(quantity).ok_or_else(overflow)?;
    let total = enclosure
        .checked_add(glands)
        .and_then(|sum| sum.checked_add(terminals))
        .ok_or_else(overflow)?;

    Ok(LinePrice {
        line_index: line.line_index,
        enclosure: to_cents(enclosure),
        glands: to_cents(glands),
        terminals: to_cents(terminals),
        total: to_cents(total),
    })
}

/// 统一为两位小数表示；目录价格已限定两位小数，这里不会舍入。
fn to_cents(amount: Decimal) -> Decimal {
    let mut amount = amount.round_dp(2);
    amount.rescale(2);
    amount
}
