//! DXF草图导入
//!
//! 每个图层视为一个草图：
//! - `POINT` -> 草图点
//! - `LINE` -> 线段
//! - `LWPOLYLINE` / `POLYLINE` -> 相邻顶点之间的线段（闭合时含首尾线段）
//!
//! CAD 草图中每条线段的端点本身就是草图点，因此线段端点也会加入点集。
//! 坐标重合（取整键相同）的点只保留第一个。

use crate::error::FileError;
use pathplace_core::geometry::Sketch;
use pathplace_core::key::PointKey;
use pathplace_core::math::Point2;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// 从DXF文件导入所有草图，按图层名排序
pub fn import_sketches(path: &Path, precision: u32) -> Result<Vec<Sketch>, FileError> {
    let drawing = dxf::Drawing::load_file(path).map_err(|e| FileError::Dxf(e.to_string()))?;
    let sketches = import_sketches_from(&drawing, precision);

    tracing::info!(
        "Imported {} sketches from {}",
        sketches.len(),
        path.display()
    );

    Ok(sketches)
}

/// 从已加载的DXF图纸导入草图
pub fn import_sketches_from(drawing: &dxf::Drawing, precision: u32) -> Vec<Sketch> {
    let mut layers: BTreeMap<String, SketchBuilder> = BTreeMap::new();

    for entity in drawing.entities() {
        let layer = entity.common.layer.clone();

        match &entity.specific {
            dxf::entities::EntityType::ModelPoint(point) => {
                builder(&mut layers, &layer, precision)
                    .add_point(Point2::new(point.location.x, point.location.y));
            }

            dxf::entities::EntityType::Line(line) => {
                builder(&mut layers, &layer, precision).add_segment(
                    Point2::new(line.p1.x, line.p1.y),
                    Point2::new(line.p2.x, line.p2.y),
                );
            }

            dxf::entities::EntityType::LwPolyline(lwpoly) => {
                let vertices: Vec<Point2> = lwpoly
                    .vertices
                    .iter()
                    .map(|v| Point2::new(v.x, v.y))
                    .collect();
                builder(&mut layers, &layer, precision).add_chain(&vertices, lwpoly.is_closed());
            }

            dxf::entities::EntityType::Polyline(poly) => {
                let vertices: Vec<Point2> = poly
                    .vertices()
                    .map(|v| Point2::new(v.location.x, v.location.y))
                    .collect();
                builder(&mut layers, &layer, precision).add_chain(&vertices, poly.is_closed());
            }

            // 圆、圆弧、文字等与路径无关
            _ => {}
        }
    }

    layers
        .into_values()
        .map(|b| b.sketch)
        .filter(|s| !s.points.is_empty())
        .collect()
}

/// 按名称查找草图
pub fn find_sketch<'a>(sketches: &'a [Sketch], name: &str) -> Result<&'a Sketch, FileError> {
    sketches
        .iter()
        .find(|s| s.name == name)
        .ok_or_else(|| FileError::SketchNotFound(name.to_string()))
}

fn builder<'a>(
    layers: &'a mut BTreeMap<String, SketchBuilder>,
    layer: &str,
    precision: u32,
) -> &'a mut SketchBuilder {
    layers
        .entry(layer.to_string())
        .or_insert_with(|| SketchBuilder::new(layer, precision))
}

/// 单个图层的草图构建器
struct SketchBuilder {
    sketch: Sketch,
    seen: HashSet<PointKey>,
    precision: u32,
}

impl SketchBuilder {
    fn new(name: &str, precision: u32) -> Self {
        Self {
            sketch: Sketch::new(name),
            seen: HashSet::new(),
            precision,
        }
    }

    fn add_point(&mut self, position: Point2) {
        if self.seen.insert(PointKey::with_precision(&position, self.precision)) {
            self.sketch.add_point(position);
        }
    }

    fn add_segment(&mut self, start: Point2, end: Point2) {
        self.add_point(start);
        self.add_point(end);
        self.sketch.add_line(start, end);
    }

    fn add_chain(&mut self, vertices: &[Point2], closed: bool) {
        for pair in vertices.windows(2) {
            self.add_segment(pair[0], pair[1]);
        }
        if closed && vertices.len() > 2 {
            self.add_segment(vertices[vertices.len() - 1], vertices[0]);
        }
    }
}
