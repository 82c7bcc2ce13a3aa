//! 草图几何
//!
//! 宿主草图的最小抽象：
//! - 点 (SketchPoint)
//! - 线段 (SketchLine)，以两端坐标引用端点
//! - 草图 (Sketch)，点集合 + 线段集合

use crate::math::Point2;
use serde::{Deserialize, Serialize};

/// 草图至少需要的点数
pub const MIN_POINTS: usize = 2;

/// 草图至少需要的线段数
pub const MIN_LINES: usize = 1;

/// 草图点
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SketchPoint {
    pub position: Point2,
}

impl SketchPoint {
    pub fn from_point2(position: Point2) -> Self {
        Self { position }
    }
}

/// 草图线段
///
/// 端点通过坐标引用，线段本身无方向。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SketchLine {
    pub start: Point2,
    pub end: Point2,
}

impl SketchLine {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }
}

/// 草图
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sketch {
    /// 草图名称（DXF 导入时为图层名）
    #[serde(default)]
    pub name: String,
    pub points: Vec<SketchPoint>,
    pub lines: Vec<SketchLine>,
}

impl Sketch {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: Vec::new(),
            lines: Vec::new(),
        }
    }

    /// 由顶点序列创建一条开放路径：每个顶点一个点，相邻顶点之间一条线段
    pub fn from_polyline(name: impl Into<String>, vertices: &[Point2]) -> Self {
        let mut sketch = Self::new(name);
        for v in vertices {
            sketch.add_point(*v);
        }
        for pair in vertices.windows(2) {
            sketch.add_line(pair[0], pair[1]);
        }
        sketch
    }

    pub fn add_point(&mut self, position: Point2) {
        self.points.push(SketchPoint::from_point2(position));
    }

    pub fn add_line(&mut self, start: Point2, end: Point2) {
        self.lines.push(SketchLine::new(start, end));
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// 是否满足转换的前置条件（至少 2 个点、1 条线段）
    pub fn is_path_candidate(&self) -> bool {
        self.point_count() >= MIN_POINTS && self.line_count() >= MIN_LINES
    }
}
