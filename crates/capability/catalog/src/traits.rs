//! 目录查询接口
//!
//! 设计原则：
//! - 同步、无副作用的只读查询
//! - 缺失统一返回 `CatalogLookupError`
//! - 以 trait 对象注入，测试使用内存实现
//! - 一次校验先取 `snapshot()`，之后所有查询都落在同一份数据上

use crate::error::CatalogLookupError;
use crate::snapshot::CatalogSnapshot;
use domain::{Enclosure, Gland, Material, Terminal};

/// 目录查询接口
pub trait CatalogLookup: Send + Sync {
    /// 按机箱代码查找
    fn enclosure(&self, code: &str) -> Result<Enclosure, CatalogLookupError>;

    /// 按 (规格, 材质) 查找格兰头
    fn gland(&self, size: &str, material: Material) -> Result<Gland, CatalogLookupError>;

    /// 按 (线径, 颜色) 查找端子
    fn terminal(&self, cross_section: &str, color: &str) -> Result<Terminal, CatalogLookupError>;

    /// 当前内容的一致快照；并发写入不影响已取出的快照
    fn snapshot(&self) -> Result<CatalogSnapshot, CatalogLookupError>;
}

impl<T: CatalogLookup + ?Sized> CatalogLookup for std::sync::Arc<T> {
    fn enclosure(&self, code: &str) -> Result<Enclosure, CatalogLookupError> {
        (**self).enclosure(code)
    }

    fn gland(&self, size: &str, material: Material) -> Result<Gland, CatalogLookupError> {
        (**self).gland(size, material)
    }

    fn terminal(&self, cross_section: &str, color: &str) -> Result<Terminal, CatalogLookupError> {
        (**self).terminal(cross_section, color)
    }

    fn snapshot(&self) -> Result<CatalogSnapshot, CatalogLookupError> {
        (**self).snapshot()
    }
}
