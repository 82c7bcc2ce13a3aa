//! Pathplace 核心
//!
//! 将草图中由线段串联的点转换为按位号排序的贴片坐标表。
//!
//! # 流程
//!
//! 1. 从宿主获取草图几何（点、线段）
//! 2. 以取整坐标为键构建邻接表
//! 3. 从用户指定的起点做深度优先遍历，得到线性顺序
//! 4. 校验遍历覆盖了全部点
//! 5. 生成固定格式的贴片行，交给输出端写入
//!
//! # 示例
//!
//! ```rust
//! use pathplace_core::prelude::*;
//!
//! let sketch = Sketch::from_polyline("path", &[
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(2.0, 0.0),
//! ]);
//!
//! let rows = plan_placement(&sketch, &Point2::new(0.0, 0.0), "R", &ConvertConfig::default()).unwrap();
//! assert_eq!(rows[1].designator, "R2");
//! assert_eq!(rows[2].x, "20.000");
//! ```

pub mod adjacency;
pub mod config;
pub mod error;
pub mod geometry;
pub mod host;
pub mod key;
pub mod math;
pub mod placement;
pub mod session;
pub mod traversal;

pub mod prelude {
    //! 常用类型的便捷导入
    pub use crate::adjacency::Adjacency;
    pub use crate::config::ConvertConfig;
    pub use crate::error::ConvertError;
    pub use crate::geometry::{Sketch, SketchLine, SketchPoint};
    pub use crate::host::{GeometryProvider, Notice, PlacementSink, PromptService, Severity};
    pub use crate::key::PointKey;
    pub use crate::math::Point2;
    pub use crate::placement::{plan_placement, resolve_prefix, PlacementRow, PLACEMENT_HEADER};
    pub use crate::session::{run_conversion, Outcome};
    pub use crate::traversal::{depth_first_order, ensure_complete, NeighborOrder};
}
