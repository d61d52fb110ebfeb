//! 不可变目录快照
//!
//! 一次订单校验只读取同一份快照，刷新目录不会影响进行中的校验。
//! 内部使用 `Arc<HashMap>`，克隆开销固定。

use crate::error::{CatalogError, CatalogLookupError};
use crate::traits::CatalogLookup;
use crate::validation::{ensure_enclosure, ensure_gland, ensure_terminal};
use domain::{Enclosure, Gland, Material, Terminal};
use std::collections::HashMap;
use std::sync::Arc;

pub(crate) type GlandKey = (String, Material);
pub(crate) type TerminalKey = (String, String);

/// 目录快照
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    enclosures: Arc<HashMap<String, Enclosure>>,
    glands: Arc<HashMap<GlandKey, Gland>>,
    terminals: Arc<HashMap<TerminalKey, Terminal>>,
}

impl CatalogSnapshot {
    pub fn builder() -> CatalogSnapshotBuilder {
        CatalogSnapshotBuilder::default()
    }

    pub(crate) fn from_maps(
        enclosures: HashMap<String, Enclosure>,
        glands: HashMap<GlandKey, Gland>,
        terminals: HashMap<TerminalKey, Terminal>,
    ) -> Self {
        Self {
            enclosures: Arc::new(enclosures),
            glands: Arc::new(glands),
            terminals: Arc::new(terminals),
        }
    }

    pub(crate) fn to_maps(
        &self,
    ) -> (
        HashMap<String, Enclosure>,
        HashMap<GlandKey, Gland>,
        HashMap<TerminalKey, Terminal>,
    ) {
        (
            self.enclosures.as_ref().clone(),
            self.glands.as_ref().clone(),
            self.terminals.as_ref().clone(),
        )
    }

    pub fn enclosure_count(&self) -> usize {
        self.enclosures.len()
    }

    pub fn gland_count(&self) -> usize {
        self.glands.len()
    }

    pub fn terminal_count(&self) -> usize {
        self.terminals.len()
    }
}

impl CatalogLookup for CatalogSnapshot {
    fn enclosure(&self, code: &str) -> Result<Enclosure, CatalogLookupError> {
        self.enclosures
            .get(code)
            .cloned()
            .ok_or_else(|| CatalogLookupError::enclosure(code))
    }

    fn gland(&self, size: &str, material: Material) -> Result<Gland, CatalogLookupError> {
        self.glands
            .get(&(size.to_string(), material))
            .cloned()
            .ok_or_else(|| CatalogLookupError::gland(size, material))
    }

    fn terminal(&self, cross_section: &str, color: &str) -> Result<Terminal, CatalogLookupError> {
        self.terminals
            .get(&(cross_section.to_string(), color.to_string()))
            .cloned()
            .ok_or_else(|| CatalogLookupError::terminal(cross_section, color))
    }

    fn snapshot(&self) -> Result<CatalogSnapshot, CatalogLookupError> {
        Ok(self.clone())
    }
}

/// 快照构建器：写入前校验记录，同键后写覆盖先写。
#[derive(Debug, Default)]
pub struct CatalogSnapshotBuilder {
    enclosures: HashMap<String, Enclosure>,
    glands: HashMap<GlandKey, Gland>,
    terminals: HashMap<TerminalKey, Terminal>,
}

impl CatalogSnapshotBuilder {
    pub fn enclosure(mut self, enclosure: Enclosure) -> Result<Self, CatalogError> {
        ensure_enclosure(&enclosure)?;
        self.enclosures.insert(enclosure.code.clone(), enclosure);
        Ok(self)
    }

    pub fn gland(mut self, gland: Gland) -> Result<Self, CatalogError> {
        ensure_gland(&gland)?;
        self.glands.insert((gland.size.clone(), gland.material), gland);
        Ok(self)
    }

    pub fn terminal(mut self, terminal: Terminal) -> Result<Self, CatalogError> {
        ensure_terminal(&terminal)?;
        self.terminals.insert(
            (terminal.wire_cross_section.clone(), terminal.color.clone()),
            terminal,
        );
        Ok(self)
    }

    pub fn build(self) -> CatalogSnapshot {
        CatalogSnapshot::from_maps(self.enclosures, self.glands, self.terminals)
    }
}
