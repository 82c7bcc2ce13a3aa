//! 邻接表构建
//!
//! 点键 -> 直接相连的点键列表。构建后不再修改。
//! 邻居列表中的重复项无害，顺序由线段枚举顺序决定。

use crate::geometry::{Sketch, SketchPoint};
use crate::key::PointKey;
use crate::math::Point2;
use std::collections::HashMap;

/// 草图的邻接结构
#[derive(Debug, Clone)]
pub struct Adjacency {
    /// 点键 -> 邻居列表（按线段枚举顺序）
    neighbors: HashMap<PointKey, Vec<PointKey>>,

    /// 点键 -> 草图点（键冲突时后者覆盖前者）
    points: HashMap<PointKey, SketchPoint>,

    /// 源草图中点的数量（含坐标重合的点）
    source_points: usize,

    precision: u32,
}

impl Adjacency {
    /// 从草图构建邻接表
    ///
    /// 端点不在点集中的线段被忽略（草图中可能含有游离的构造线）。
    pub fn build(sketch: &Sketch, precision: u32) -> Self {
        let mut neighbors: HashMap<PointKey, Vec<PointKey>> = HashMap::new();
        let mut points = HashMap::new();

        for point in &sketch.points {
            let key = PointKey::with_precision(&point.position, precision);
            points.insert(key, *point);
            neighbors.entry(key).or_default();
        }

        let mut dropped = 0;
        for line in &sketch.lines {
            let start = PointKey::with_precision(&line.start, precision);
            let end = PointKey::with_precision(&line.end, precision);

            if !(neighbors.contains_key(&start) && neighbors.contains_key(&end)) {
                tracing::debug!("Dropping segment {} -> {}: endpoint not in point set", start, end);
                dropped += 1;
                continue;
            }

            if let Some(list) = neighbors.get_mut(&start) {
                list.push(end);
            }
            if let Some(list) = neighbors.get_mut(&end) {
                list.push(start);
            }
        }

        tracing::debug!(
            "Built adjacency for '{}': {} nodes, {} segments, {} dropped",
            sketch.name,
            neighbors.len(),
            sketch.lines.len() - dropped,
            dropped
        );

        Self {
            neighbors,
            points,
            source_points: sketch.points.len(),
            precision,
        }
    }

    /// 为坐标生成与本邻接表一致精度的键
    pub fn key_for(&self, point: &Point2) -> PointKey {
        PointKey::with_precision(point, self.precision)
    }

    pub fn contains(&self, key: &PointKey) -> bool {
        self.neighbors.contains_key(key)
    }

    /// 邻居列表，未知键返回空
    pub fn neighbors(&self, key: &PointKey) -> &[PointKey] {
        self.neighbors.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn degree(&self, key: &PointKey) -> usize {
        self.neighbors(key).len()
    }

    pub fn point(&self, key: &PointKey) -> Option<&SketchPoint> {
        self.points.get(key)
    }

    /// 不同节点的数量
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// 源草图点数，遍历结果需与之相等
    pub fn source_point_count(&self) -> usize {
        self.source_points
    }

    pub fn keys(&self) -> impl Iterator<Item = &PointKey> {
        self.neighbors.keys()
    }

    /// 度为 1 的节点（路径端点），按键排序
    ///
    /// 用于向用户建议起点。
    pub fn endpoints(&self) -> Vec<PointKey> {
        let mut ends: Vec<PointKey> = self
            .neighbors
            .iter()
            .filter(|(_, list)| list.len() == 1)
            .map(|(key, _)| *key)
            .collect();
        ends.sort();
        ends
    }
}
