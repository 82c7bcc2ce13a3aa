//! 数学类型
//!
//! 草图坐标单位为厘米（宿主内部单位）。

/// 二维点
pub type Point2 = nalgebra::Point2<f64>;
