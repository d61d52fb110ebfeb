//! 订单校验编排：结构校验 → 取目录快照并关联 → 报价 → 安装面/导轨校验。
//!
//! 装配失败不会中断流程：所有行、所有面都会检查，失败记录累积返回，
//! 价格始终计算。目录缺失则整体失败，不返回部分结果。
//!
//! 每次校验开始时固定一份目录快照，之后的报价与装配校验只读这份快照。

use domain::{
    FitFailure, InvalidOrderShape, LineReport, Order, ResolvedLine, ResolvedOrder, Side,
    ValidationResult,
};
use encl_catalog::{CatalogLookup, CatalogLookupError, resolve_order};
use encl_config::QuoteConfig;
use encl_fit::{FitOutcome, FitPolicy, check_rail_fit, check_side_fit, side_capacity};
use encl_pricing::{PricingError, price_resolved};
use std::sync::Arc;

/// 订单校验错误（装配失败不属于错误）。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuoteError {
    #[error(transparent)]
    InvalidOrder(#[from] InvalidOrderShape),
    #[error(transparent)]
    Catalog(#[from] CatalogLookupError),
    #[error("amount overflow on line {line_index}")]
    AmountOverflow { line_index: usize },
}

impl From<PricingError> for QuoteError {
    fn from(err: PricingError) -> Self {
        match err {
            PricingError::InvalidOrder(err) => QuoteError::InvalidOrder(err),
            PricingError::Catalog(err) => QuoteError::Catalog(err),
            PricingError::AmountOverflow { line_index } => QuoteError::AmountOverflow { line_index },
        }
    }
}

impl QuoteError {
    /// 对外稳定的错误码。
    pub fn code(&self) -> &'static str {
        match self {
            QuoteError::InvalidOrder(_) => "ORDER.INVALID",
            QuoteError::Catalog(CatalogLookupError::NotFound { .. }) => "CATALOG.NOT_FOUND",
            QuoteError::Catalog(CatalogLookupError::Unavailable) => "CATALOG.UNAVAILABLE",
            QuoteError::AmountOverflow { .. } => "PRICING.OVERFLOW",
        }
    }
}

/// 持有目录与校验参数的编排入口。
#[derive(Clone)]
pub struct OrderValidator {
    catalog: Arc<dyn CatalogLookup>,
    policy: FitPolicy,
}

impl OrderValidator {
    pub fn new(catalog: Arc<dyn CatalogLookup>) -> Self {
        Self::with_policy(catalog, FitPolicy::default())
    }

    pub fn with_policy(catalog: Arc<dyn CatalogLookup>, policy: FitPolicy) -> Self {
        Self { catalog, policy }
    }

    pub fn from_config(catalog: Arc<dyn CatalogLookup>, config: &QuoteConfig) -> Self {
        Self::with_policy(catalog, fit_policy(config))
    }

    pub fn policy(&self) -> &FitPolicy {
        &self.policy
    }

    pub fn validate_and_price(&self, order: &Order) -> Result<ValidationResult, QuoteError> {
        validate_and_price(order, self.catalog.as_ref(), &self.policy)
    }
}

/// 由配置构造装配校验参数。
pub fn fit_policy(config: &QuoteConfig) -> FitPolicy {
    FitPolicy {
        gland_clearance_mm: config.gland_clearance_mm,
        epsilon_mm: config.fit_epsilon_mm,
        margin_mode: config.margin_mode,
    }
}

/// 校验并报价一个订单。
pub fn validate_and_price(
    order: &Order,
    catalog: &dyn CatalogLookup,
    policy: &FitPolicy,
) -> Result<ValidationResult, QuoteError> {
    let validation_id = encl_telemetry::new_validation_id();
    let span = tracing::info_span!(
        "validate_order",
        validation_id = %validation_id,
        lines = order.lines.len()
    );
    let _guard = span.enter();

    if let Err(err) = order.check_shape() {
        encl_telemetry::record_invalid_order();
        tracing::warn!(error = %err, "order rejected before pricing");
        return Err(err.into());
    }

    let resolved = catalog
        .snapshot()
        .and_then(|snapshot| resolve_order(&snapshot, order))
        .inspect_err(|err| {
            if err.is_not_found() {
                encl_telemetry::record_catalog_miss();
            }
            tracing::warn!(error = %err, "catalog lookup failed");
        })?;

    let price = price_resolved(&resolved)?;
    let (failures, lines) = check_fit(&resolved, policy);

    let fits = failures.is_empty();
    encl_telemetry::record_validation(fits);
    encl_telemetry::record_fit_failures(failures.len());
    tracing::info!(
        fits,
        failures = failures.len(),
        total = %price.total,
        "order validated"
    );

    Ok(ValidationResult {
        fits,
        failures,
        price,
        lines,
    })
}

/// 检查所有行；每行只检查一台（同一行的多台配置相同）。
pub fn check_fit(order: &ResolvedOrder, policy: &FitPolicy) -> (Vec<FitFailure>, Vec<LineReport>) {
    let mut failures = Vec::new();
    let mut reports = Vec::with_capacity(order.lines.len());
    for line in &order.lines {
        let outcomes = check_line(line, policy);
        reports.push(LineReport {
            line_index: line.line_index,
            enclosure_code: line.enclosure.code.clone(),
            quantity: line.quantity,
            usage: outcomes.iter().map(FitOutcome::usage).collect(),
        });
        for outcome in outcomes {
            if let Some(failure) = outcome.into_failure(line.line_index) {
                tracing::warn!(
                    line = failure.line_index,
                    scope = %failure.scope,
                    reason = failure.reason.as_str(),
                    required_mm = failure.required_mm,
                    available_mm = failure.available_mm,
                    "component does not fit"
                );
                failures.push(failure);
            }
        }
    }
    (failures, reports)
}

/// 单行：已声明或被请求的每个面，加一次导轨校验。
fn check_line(line: &ResolvedLine, policy: &FitPolicy) -> Vec<FitOutcome> {
    let by_side = line.glands_by_side();
    let mut outcomes = Vec::with_capacity(Side::ALL.len() + 1);
    for side in Side::ALL {
        let requested = by_side.get(&side);
        let capacity = side_capacity(&line.enclosure, side, policy);
        if requested.is_none() && capacity.is_none() {
            continue;
        }
        let glands = requested.map(Vec::as_slice).unwrap_or_default();
        let outcome = check_side_fit(side, capacity, glands, policy);
        tracing::debug!(
            line = line.line_index,
            side = side.as_str(),
            required_mm = outcome.required_mm,
            available_mm = ?outcome.available_mm,
            fits = outcome.fits(),
            "side checked"
        );
        outcomes.push(outcome);
    }

    let rail = check_rail_fit(line.enclosure.terminal_rail.as_ref(), &line.terminals, policy);
    tracing::debug!(
        line = line.line_index,
        required_mm = rail.required_mm,
        available_mm = ?rail.available_mm,
        fits = rail.fits(),
        "rail checked"
    );
    outcomes.push(rail);
    outcomes
}
