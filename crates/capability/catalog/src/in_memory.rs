//! 可刷新的内存目录
//!
//! 使用 RwLock + HashMap 提供线程安全的目录存储：
//! - upsert 按唯一键覆盖（与目录导入的 update_or_create 语义一致）
//! - snapshot 导出一致的只读快照供单次校验使用

use crate::error::{CatalogError, CatalogLookupError};
use crate::snapshot::{CatalogSnapshot, GlandKey, TerminalKey};
use crate::traits::CatalogLookup;
use crate::validation::{ensure_enclosure, ensure_gland, ensure_terminal};
use domain::{Enclosure, Gland, Material, Terminal};
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard};

#[derive(Debug, Default)]
struct CatalogTables {
    enclosures: HashMap<String, Enclosure>,
    glands: HashMap<GlandKey, Gland>,
    terminals: HashMap<TerminalKey, Terminal>,
}

/// 内存目录
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    tables: RwLock<CatalogTables>,
}

impl InMemoryCatalog {
    /// 创建空目录
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入或覆盖机箱
    pub fn upsert_enclosure(&self, enclosure: Enclosure) -> Result<(), CatalogError> {
        ensure_enclosure(&enclosure)?;
        let mut tables = self.tables.write().map_err(|_| CatalogError::Lock)?;
        tables.enclosures.insert(enclosure.code.clone(), enclosure);
        Ok(())
    }

    /// 写入或覆盖格兰头
    pub fn upsert_gland(&self, gland: Gland) -> Result<(), CatalogError> {
        ensure_gland(&gland)?;
        let mut tables = self.tables.write().map_err(|_| CatalogError::Lock)?;
        tables.glands.insert((gland.size.clone(), gland.material), gland);
        Ok(())
    }

    /// 写入或覆盖端子
    pub fn upsert_terminal(&self, terminal: Terminal) -> Result<(), CatalogError> {
        ensure_terminal(&terminal)?;
        let mut tables = self.tables.write().map_err(|_| CatalogError::Lock)?;
        tables.terminals.insert(
            (terminal.wire_cross_section.clone(), terminal.color.clone()),
            terminal,
        );
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, CatalogTables>, CatalogLookupError> {
        self.tables.read().map_err(|_| CatalogLookupError::Unavailable)
    }

    /// 用快照内容整体替换目录
    pub fn replace_with(&self, snapshot: &CatalogSnapshot) -> Result<(), CatalogError> {
        let (enclosures, glands, terminals) = snapshot.to_maps();
        let mut tables = self.tables.write().map_err(|_| CatalogError::Lock)?;
        *tables = CatalogTables {
            enclosures,
            glands,
            terminals,
        };
        Ok(())
    }
}

impl CatalogLookup for InMemoryCatalog {
    fn enclosure(&self, code: &str) -> Result<Enclosure, CatalogLookupError> {
        let tables = self.read()?;
        tables
            .enclosures
            .get(code)
            .cloned()
            .ok_or_else(|| CatalogLookupError::enclosure(code))
    }

    fn gland(&self, size: &str, material: Material) -> Result<Gland, CatalogLookupError> {
        let tables = self.read()?;
        tables
            .glands
            .get(&(size.to_string(), material))
            .cloned()
            .ok_or_else(|| CatalogLookupError::gland(size, material))
    }

    fn terminal(&self, cross_section: &str, color: &str) -> Result<Terminal, CatalogLookupError> {
        let tables = self.read()?;
        tables
            .terminals
            .get(&(cross_section.to_string(), color.to_string()))
            .cloned()
            .ok_or_else(|| CatalogLookupError::terminal(cross_section, color))
    }

    /// 在同一次读锁内复制三张表
    fn snapshot(&self) -> Result<CatalogSnapshot, CatalogLookupError> {
        let tables = self.read()?;
        Ok(CatalogSnapshot::from_maps(
            tables.enclosures.clone(),
            tables.glands.clone(),
            tables.terminals.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::Dimensions;
    use rust_decimal::Decimal;
    use std::sync::Arc;

    #[test]
    fn poisoned_lock_is_not_reported_as_missing() {
        let catalog = Arc::new(InMemoryCatalog::new());
        catalog
            .upsert_enclosure(Enclosure::new(
                "E1",
                "Enclosure 1",
                Dimensions::new(120.0, 200.0, 90.0),
                Decimal::new(9900, 2),
            ))
            .expect("enclosure");

        let writer = Arc::clone(&catalog);
        let joined = std::thread::spawn(move || {
            let _guard = writer.tables.write().expect("write lock");
            panic!("writer failed mid-update");
        })
        .join();
        assert!(joined.is_err());

        let err = catalog.enclosure("E1").expect_err("poisoned");
        assert_eq!(err, CatalogLookupError::Unavailable);
        assert!(!err.is_not_found());
        assert_eq!(catalog.snapshot().expect_err("poisoned"), CatalogLookupError::Unavailable);
        assert!(matches!(
            catalog.upsert_terminal(Terminal {
                wire_cross_section: "2.5".to_string(),
                width_mm: 5.2,
                color: "grey".to_string(),
                voltage: 800.0,
                current: 24.0,
                price: Decimal::new(85, 2),
                catalog_number: "TB-2.5-GY".to_string(),
            }),
            Err(CatalogError::Lock)
        ));
    }
}
