//! 路径遍历
//!
//! 从起点做深度优先遍历，得到线性的访问顺序。使用显式栈，
//! 结果与递归形式的先序遍历一致。

use crate::adjacency::Adjacency;
use crate::error::ConvertError;
use crate::key::PointKey;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 邻居访问顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NeighborOrder {
    /// 按线段枚举顺序（取决于宿主，不保证稳定）
    Insertion,
    /// 按点键排序（先 x 后 y，数值比较）
    #[default]
    SortedByKey,
}

/// 深度优先遍历
///
/// 只返回从起点可达的节点，是否覆盖全部点由调用方检查。
pub fn depth_first_order(
    adjacency: &Adjacency,
    start: PointKey,
    order: NeighborOrder,
) -> Result<Vec<PointKey>, ConvertError> {
    if !adjacency.contains(&start) {
        return Err(ConvertError::StartPointNotFound(start));
    }

    let mut visited = HashSet::with_capacity(adjacency.len());
    let mut ordered = Vec::with_capacity(adjacency.len());
    let mut stack = vec![start];

    while let Some(node) = stack.pop() {
        if !visited.insert(node) {
            continue;
        }
        ordered.push(node);

        let mut next: Vec<PointKey> = adjacency
            .neighbors(&node)
            .iter()
            .filter(|n| !visited.contains(*n))
            .copied()
            .collect();
        if order == NeighborOrder::SortedByKey {
            next.sort();
        }

        // 逆序压栈，第一个邻居最先出栈
        stack.extend(next.into_iter().rev());
    }

    tracing::debug!(
        "Traversal from {} visited {} of {} nodes",
        start,
        ordered.len(),
        adjacency.len()
    );

    Ok(ordered)
}

/// 检查遍历是否恰好覆盖全部点
pub fn ensure_complete(ordered: &[PointKey], total: usize) -> Result<(), ConvertError> {
    if ordered.len() != total {
        tracing::warn!("Path traversal reached {} of {} points", ordered.len(), total);
        return Err(ConvertError::IncompletePath {
            visited: ordered.len(),
            total,
        });
    }
    Ok(())
}
