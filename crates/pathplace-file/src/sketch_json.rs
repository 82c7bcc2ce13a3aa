//! JSON草图格式
//!
//! 用于在宿主之间交换草图几何。与 DXF 导入不同，线段端点不会自动加入点集，
//! 因此可以表达带有游离构造线的草图。
//!
//! ```json
//! {
//!   "name": "leds",
//!   "points": [{ "position": [0.0, 0.0] }, { "position": [1.0, 0.0] }],
//!   "lines": [{ "start": [0.0, 0.0], "end": [1.0, 0.0] }]
//! }
//! ```

use crate::error::FileError;
use pathplace_core::geometry::Sketch;
use pathplace_core::math::Point2;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// 从JSON文件加载草图
pub fn load_sketch(path: &Path) -> Result<Sketch, FileError> {
    let reader = BufReader::new(File::open(path)?);
    let mut sketch: Sketch = serde_json::from_reader(reader)?;

    if sketch.name.is_empty() {
        if let Some(stem) = path.file_stem() {
            sketch.name = stem.to_string_lossy().into_owned();
        }
    }
    validate(&sketch)?;

    tracing::info!(
        "Loaded sketch '{}' ({} points, {} lines) from {}",
        sketch.name,
        sketch.point_count(),
        sketch.line_count(),
        path.display()
    );

    Ok(sketch)
}

/// 保存草图到JSON文件
pub fn save_sketch(sketch: &Sketch, path: &Path) -> Result<(), FileError> {
    validate(sketch)?;

    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, sketch)?;
    writer.flush()?;

    Ok(())
}

/// 坐标必须是有限值
fn validate(sketch: &Sketch) -> Result<(), FileError> {
    let finite = |p: &Point2| p.x.is_finite() && p.y.is_finite();

    if let Some(i) = sketch.points.iter().position(|p| !finite(&p.position)) {
        return Err(FileError::InvalidFormat(format!(
            "Point {} of sketch '{}' has a non-finite coordinate",
            i, sketch.name
        )));
    }
    if let Some(i) = sketch
        .lines
        .iter()
        .position(|l| !finite(&l.start) || !finite(&l.end))
    {
        return Err(FileError::InvalidFormat(format!(
            "Line {} of sketch '{}' has a non-finite coordinate",
            i, sketch.name
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_roundtrip() {
        let file_path = std::env::temp_dir().join("pathplace_test_sketch.json");

        let mut sketch = Sketch::from_polyline(
            "leds",
            &[Point2::new(0.0, 0.0), Point2::new(1.5, -2.25)],
        );
        sketch.add_line(Point2::new(1.5, -2.25), Point2::new(9.0, 9.0));

        save_sketch(&sketch, &file_path).expect("Failed to save");
        let loaded = load_sketch(&file_path).expect("Failed to load");

        assert_eq!(loaded, sketch);

        // 清理
        std::fs::remove_file(&file_path).ok();
    }

    #[test]
    fn test_name_defaults_to_file_stem() {
        let file_path = std::env::temp_dir().join("pathplace_unnamed.json");
        std::fs::write(
            &file_path,
            r#"{ "points": [{ "position": [0.0, 0.0] }], "lines": [] }"#,
        )
        .expect("Failed to write");

        let loaded = load_sketch(&file_path).expect("Failed to load");
        assert_eq!(loaded.name, "pathplace_unnamed");
        assert_eq!(loaded.point_count(), 1);

        std::fs::remove_file(&file_path).ok();
    }

    #[test]
    fn test_reject_non_finite() {
        let mut sketch = Sketch::new("bad");
        sketch.add_point(Point2::new(f64::NAN, 0.0));

        let file_path = std::env::temp_dir().join("pathplace_test_bad.json");
        let result = save_sketch(&sketch, &file_path);

        assert!(matches!(result, Err(FileError::InvalidFormat(_))));
        assert!(!file_path.exists());
    }

    #[test]
    fn test_malformed_json() {
        let file_path = std::env::temp_dir().join("pathplace_test_malformed.json");
        std::fs::write(&file_path, "{ \"points\": 3 }").expect("Failed to write");

        assert!(matches!(load_sketch(&file_path), Err(FileError::Json(_))));

        std::fs::remove_file(&file_path).ok();
    }
}
