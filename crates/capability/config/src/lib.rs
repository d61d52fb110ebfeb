//! 报价引擎运行配置加载。

use domain::MarginMode;
use encl_fit::FitPolicy;
use std::env;

/// 配置加载错误。
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required env: {0}")]
    Missing(String),
    #[error("invalid value for {0}: {1}")]
    Invalid(String, String),
}

pub const GLAND_CLEARANCE_KEY: &str = "ENCL_GLAND_CLEARANCE_MM";
pub const FIT_EPSILON_KEY: &str = "ENCL_FIT_EPSILON_MM";
pub const MARGIN_MODE_KEY: &str = "ENCL_MARGIN_MODE";
pub const CATALOG_DIR_KEY: &str = "ENCL_CATALOG_DIR";

/// 报价与装配校验配置。
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteConfig {
    pub gland_clearance_mm: f64,
    pub fit_epsilon_mm: f64,
    pub margin_mode: MarginMode,
    pub catalog_dir: Option<String>,
}

/// 默认值与 `FitPolicy::default()` 一致。
impl Default for QuoteConfig {
    fn default() -> Self {
        let policy = FitPolicy::default();
        Self {
            gland_clearance_mm: policy.gland_clearance_mm,
            fit_epsilon_mm: policy.epsilon_mm,
            margin_mode: policy.margin_mode,
            catalog_dir: None,
        }
    }
}

impl QuoteConfig {
    /// 加载本地 .env（如存在）后读取环境变量。
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// 从环境变量读取配置。
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|key| env::var(key).ok())
    }

    /// 从任意键值来源读取配置（测试可传入 map）。
    pub fn from_source<F>(source: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let gland_clearance_mm =
            read_non_negative_f64(&source, GLAND_CLEARANCE_KEY, defaults.gland_clearance_mm)?;
        let fit_epsilon_mm =
            read_non_negative_f64(&source, FIT_EPSILON_KEY, defaults.fit_epsilon_mm)?;
        let margin_mode = match read_optional(&source, MARGIN_MODE_KEY) {
            Some(value) => parse_margin_mode(&value)
                .ok_or_else(|| ConfigError::Invalid(MARGIN_MODE_KEY.to_string(), value))?,
            None => defaults.margin_mode,
        };
        let catalog_dir = read_optional(&source, CATALOG_DIR_KEY);

        Ok(Self {
            gland_clearance_mm,
            fit_epsilon_mm,
            margin_mode,
            catalog_dir,
        })
    }

    /// 目录路径是必填项时使用。
    pub fn require_catalog_dir(&self) -> Result<&str, ConfigError> {
        self.catalog_dir
            .as_deref()
            .ok_or_else(|| ConfigError::Missing(CATALOG_DIR_KEY.to_string()))
    }
}

fn parse_margin_mode(value: &str) -> Option<MarginMode> {
    match value.trim().to_ascii_lowercase().as_str() {
        "symmetric" => Some(MarginMode::Symmetric),
        "near-edge" | "near_edge" | "near-edge-only" => Some(MarginMode::NearEdgeOnly),
        _ => None,
    }
}

fn read_optional<F>(source: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    match source(key) {
        Some(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}

/// 读取非负有限 f64，缺省时返回默认值。
fn read_non_negative_f64<F>(source: &F, key: &str, default: f64) -> Result<f64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = match read_optional(source, key) {
        Some(value) => value,
        None => return Ok(default),
    };
    match value.trim().parse::<f64>() {
        Ok(parsed) if parsed.is_finite() && parsed >= 0.0 => Ok(parsed),
        _ => Err(ConfigError::Invalid(key.to_string(), value)),
    }
}
