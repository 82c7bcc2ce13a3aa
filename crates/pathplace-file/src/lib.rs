//! Pathplace 文件处理
//!
//! 支持：
//! - `.dxf` 草图导入（每个图层一个草图）
//! - `.json` 草图交换格式
//! - Altium 贴片 `.csv` 导出

pub mod csv_export;
pub mod dxf_import;
pub mod error;
pub mod sketch_json;

pub use csv_export::{save_placement, write_placement, CsvPlacementSink};
pub use dxf_import::{find_sketch, import_sketches, import_sketches_from};
pub use error::FileError;
pub use sketch_json::{load_sketch, save_sketch};

use pathplace_core::geometry::Sketch;
use std::path::Path;

/// 按扩展名加载草图文件
///
/// `.dxf` 返回每个图层对应的草图，其余按 JSON 草图处理。
pub fn load_sketches(path: &Path, precision: u32) -> Result<Vec<Sketch>, FileError> {
    let is_dxf = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("dxf"))
        .unwrap_or(false);

    if is_dxf {
        import_sketches(path, precision)
    } else {
        Ok(vec![load_sketch(path)?])
    }
}
