//! 目录错误类型
//!
//! - `CatalogLookupError`：订单引用的目录记录不存在，或目录锁失效
//! - `CatalogError`：目录构建与 JSON 文件加载错误

use std::fmt;

/// 目录记录种类。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Enclosure,
    Gland,
    Terminal,
}

impl CatalogKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogKind::Enclosure => "enclosure",
            CatalogKind::Gland => "gland",
            CatalogKind::Terminal => "terminal",
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 目录查询错误：引用的记录不存在，或目录当前不可读。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogLookupError {
    #[error("{kind} not found: {key}")]
    NotFound { kind: CatalogKind, key: String },
    #[error("catalog unavailable: lock poisoned")]
    Unavailable,
}

impl CatalogLookupError {
    pub fn enclosure(code: &str) -> Self {
        Self::NotFound {
            kind: CatalogKind::Enclosure,
            key: code.to_string(),
        }
    }

    pub fn gland(size: &str, material: domain::Material) -> Self {
        Self::NotFound {
            kind: CatalogKind::Gland,
            key: format!("{size}/{material}"),
        }
    }

    pub fn terminal(cross_section: &str, color: &str) -> Self {
        Self::NotFound {
            kind: CatalogKind::Terminal,
            key: format!("{cross_section}/{color}"),
        }
    }

    /// 是否为记录缺失（而非目录不可用）。
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// 目录构建与加载错误。
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("io error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid json structure: missing key '{0}'")]
    MissingKey(&'static str),
    #[error("invalid {kind} record {key}: {message}")]
    InvalidRecord {
        kind: CatalogKind,
        key: String,
        message: String,
    },
    #[error("lock failed")]
    Lock,
}

impl CatalogError {
    pub fn invalid(kind: CatalogKind, key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidRecord {
            kind,
            key: key.into(),
            message: message.into(),
        }
    }
}
