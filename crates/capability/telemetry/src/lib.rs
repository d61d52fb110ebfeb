//! 追踪初始化、校验 ID 生成与基础计数。

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::{EnvFilter, fmt};

/// 基础指标快照。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub validations: u64,
    pub orders_fitting: u64,
    pub fit_failures: u64,
    pub catalog_misses: u64,
    pub invalid_orders: u64,
}

/// 基础指标。
pub struct TelemetryMetrics {
    validations: AtomicU64,
    orders_fitting: AtomicU64,
    fit_failures: AtomicU64,
    catalog_misses: AtomicU64,
    invalid_orders: AtomicU64,
}

impl TelemetryMetrics {
    pub fn new() -> Self {
        Self {
            validations: AtomicU64::new(0),
            orders_fitting: AtomicU64::new(0),
            fit_failures: AtomicU64::new(0),
            catalog_misses: AtomicU64::new(0),
            invalid_orders: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            validations: self.validations.load(Ordering::Relaxed),
            orders_fitting: self.orders_fitting.load(Ordering::Relaxed),
            fit_failures: self.fit_failures.load(Ordering::Relaxed),
            catalog_misses: self.catalog_misses.load(Ordering::Relaxed),
            invalid_orders: self.invalid_orders.load(Ordering::Relaxed),
        }
    }
}

impl Default for TelemetryMetrics {
    fn default() -> Self {
        Self::new()
    }
}

static METRICS: OnceLock<TelemetryMetrics> = OnceLock::new();

/// 获取全局指标实例。
pub fn metrics() -> &'static TelemetryMetrics {
    METRICS.get_or_init(TelemetryMetrics::new)
}

/// 初始化 tracing（默认 info）。
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}

/// 生成新的 validation_id。
pub fn new_validation_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// 记录完成的订单校验次数（含装配失败）。
pub fn record_validation(fits: bool) {
    let metrics = metrics();
    metrics.validations.fetch_add(1, Ordering::Relaxed);
    if fits {
        metrics.orders_fitting.fetch_add(1, Ordering::Relaxed);
    }
}

/// 记录装配失败条数。
pub fn record_fit_failures(count: usize) {
    metrics()
        .fit_failures
        .fetch_add(count as u64, Ordering::Relaxed);
}

/// 记录目录缺失次数。
pub fn record_catalog_miss() {
    metrics().catalog_misses.fetch_add(1, Ordering::Relaxed);
}

/// 记录结构非法订单次数。
pub fn record_invalid_order() {
    metrics().invalid_orders.fetch_add(1, Ordering::Relaxed);
}
