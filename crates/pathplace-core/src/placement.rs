//! 贴片行生成
//!
//! 输出格式兼容 Altium Designer 的 Pick and Place 导入：
//! `Designator, Comment, Layer, X Location, Y Location, Rotation`

use crate::adjacency::Adjacency;
use crate::config::ConvertConfig;
use crate::error::ConvertError;
use crate::geometry::Sketch;
use crate::key::PointKey;
use crate::math::Point2;
use crate::traversal::{depth_first_order, ensure_complete};

/// 贴片表头
pub const PLACEMENT_HEADER: [&str; 6] = [
    "Designator",
    "Comment",
    "Layer",
    "X Location",
    "Y Location",
    "Rotation",
];

/// 一行贴片数据，各字段均已格式化
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementRow {
    pub designator: String,
    pub comment: String,
    pub layer: String,
    pub x: String,
    pub y: String,
    pub rotation: String,
}

impl PlacementRow {
    /// 按表头顺序返回字段
    pub fn fields(&self) -> [&str; 6] {
        [
            self.designator.as_str(),
            self.comment.as_str(),
            self.layer.as_str(),
            self.x.as_str(),
            self.y.as_str(),
            self.rotation.as_str(),
        ]
    }
}

/// 位号前缀：空白输入使用默认值，否则原样使用
pub fn resolve_prefix(input: &str, default: &str) -> String {
    if input.trim().is_empty() {
        default.to_string()
    } else {
        input.to_string()
    }
}

/// 按遍历顺序生成贴片行，位号从 1 开始
pub fn format_rows(
    ordered: &[PointKey],
    adjacency: &Adjacency,
    prefix: &str,
    config: &ConvertConfig,
) -> Vec<PlacementRow> {
    let decimals = config.coordinate_decimals;

    ordered
        .iter()
        .enumerate()
        .filter_map(|(i, key)| adjacency.point(key).map(|p| (i, p)))
        .map(|(i, point)| PlacementRow {
            designator: format!("{}{}", prefix, i + 1),
            comment: String::new(),
            layer: config.layer.clone(),
            x: format!("{:.*}", decimals, point.position.x * config.unit_scale),
            y: format!("{:.*}", decimals, point.position.y * config.unit_scale),
            rotation: config.rotation.clone(),
        })
        .collect()
}

/// 完整的转换核心：建图、遍历、覆盖检查、生成贴片行
pub fn plan_placement(
    sketch: &Sketch,
    start: &Point2,
    prefix: &str,
    config: &ConvertConfig,
) -> Result<Vec<PlacementRow>, ConvertError> {
    if !sketch.is_path_candidate() {
        return Err(ConvertError::NotAPath {
            points: sketch.point_count(),
            lines: sketch.line_count(),
        });
    }

    let adjacency = Adjacency::build(sketch, config.key_precision);
    plan_from_adjacency(&adjacency, start, prefix, config)
}

/// 在已构建的邻接表上完成遍历与格式化
pub fn plan_from_adjacency(
    adjacency: &Adjacency,
    start: &Point2,
    prefix: &str,
    config: &ConvertConfig,
) -> Result<Vec<PlacementRow>, ConvertError> {
    let start_key = adjacency.key_for(start);
    let ordered = depth_first_order(adjacency, start_key, config.neighbor_order)?;
    ensure_complete(&ordered, adjacency.source_point_count())?;

    Ok(format_rows(&ordered, adjacency, prefix, config))
}
