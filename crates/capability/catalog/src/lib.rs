//! # 产品目录模块
//!
//! 为报价与装配校验提供只读的目录查询契约，以及不依赖数据库的实现。
//!
//! ## 架构设计
//!
//! 1. **接口抽象层** (`traits.rs`)：`CatalogLookup` 三个同步只读查询
//! 2. **错误处理层** (`error.rs`)：查询缺失错误与目录加载错误
//! 3. **验证辅助层** (`validation.rs`)：目录记录合法性校验
//! 4. **实现层**：
//!    - `snapshot.rs`：不可变目录快照（一次校验使用同一份快照）
//!    - `in_memory.rs`：可刷新的内存目录，可导出快照
//!    - `fixtures.rs`：从 JSON 目录文件构建快照
//! 5. **订单关联** (`resolve.rs`)：一次性把订单引用关联为目录记录
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use encl_catalog::{load_catalog_dir, resolve_order};
//!
//! let snapshot = load_catalog_dir("fixtures")?;
//! let resolved = resolve_order(&snapshot, &order)?;
//! ```
//!
//! ## 设计约束
//!
//! - 查询无副作用、不阻塞，不假设任何具体存储
//! - 目录键：机箱按 code，格兰头按 (size, material)，端子按 (wire_cross_section, color)
//! - 价格最多两位小数且非负

pub mod error;
pub mod fixtures;
pub mod in_memory;
pub mod resolve;
pub mod snapshot;
pub mod traits;
pub mod validation;

pub use error::*;
pub use fixtures::{
    load_catalog_dir, parse_enclosures, parse_glands, parse_terminals, snapshot_from_json,
};
pub use in_memory::InMemoryCatalog;
pub use resolve::resolve_order;
pub use snapshot::{CatalogSnapshot, CatalogSnapshotBuilder};
pub use traits::*;
pub use validation::*;
