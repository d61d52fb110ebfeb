//! 订单关联
//!
//! 一次遍历完成所有目录查询：机箱、按分组顺序的格兰头、端子。
//! 首个缺失即返回错误，不产生部分结果。

use crate::error::CatalogLookupError;
use crate::traits::CatalogLookup;
use domain::{Order, ResolvedGland, ResolvedLine, ResolvedOrder, ResolvedTerminal};

/// 将订单引用关联为目录记录
pub fn resolve_order(
    catalog: &dyn CatalogLookup,
    order: &Order,
) -> Result<ResolvedOrder, CatalogLookupError> {
    let mut lines = Vec::with_capacity(order.lines.len());
    for (line_index, line) in order.lines.iter().enumerate() {
        let enclosure = catalog.enclosure(&line.enclosure_code)?;

        let glands = line
            .configuration
            .gland_items()
            .map(|(side, item)| {
                catalog
                    .gland(&item.size, item.material)
                    .map(|gland| ResolvedGland {
                        side,
                        request: item.clone(),
                        gland,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let terminals = line
            .configuration
            .terminals
            .iter()
            .map(|item| {
                catalog
                    .terminal(&item.cross_section, &item.color)
                    .map(|terminal| ResolvedTerminal {
                        request: item.clone(),
                        terminal,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        lines.push(ResolvedLine {
            line_index,
            quantity: line.quantity,
            enclosure,
            glands,
            terminals,
        });
    }
    Ok(ResolvedOrder { lines })
}
