//! 点键
//!
//! 以固定小数位取整后的坐标作为节点标识，吸收源几何中的浮点噪声。
//! 两个点当且仅当取整后的键相等时视为同一节点。

use crate::math::Point2;
use std::fmt;

/// 默认取整精度（小数位数）
pub const DEFAULT_KEY_PRECISION: u32 = 5;

/// 取整后的坐标键
///
/// 坐标按 `10^precision` 缩放后取整（恰为 .5 时取偶数）为整数存储，
/// 因此 `-0.0` 与 `0.0` 得到同一个键。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointKey {
    x: i64,
    y: i64,
    precision: u32,
}

impl PointKey {
    /// 按给定精度为坐标生成键
    pub fn new(x: f64, y: f64, precision: u32) -> Self {
        let scale = 10f64.powi(precision as i32);
        Self {
            x: (x * scale).round_ties_even() as i64,
            y: (y * scale).round_ties_even() as i64,
            precision,
        }
    }

    /// 以默认精度（5 位）生成键
    pub fn from_point(point: &Point2) -> Self {
        Self::with_precision(point, DEFAULT_KEY_PRECISION)
    }

    pub fn with_precision(point: &Point2, precision: u32) -> Self {
        Self::new(point.x, point.y, precision)
    }

    /// 取整后的坐标
    pub fn rounded(&self) -> Point2 {
        let scale = 10f64.powi(self.precision as i32);
        Point2::new(self.x as f64 / scale, self.y as f64 / scale)
    }
}

impl fmt::Display for PointKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.rounded();
        let digits = self.precision as usize;
        write!(f, "{:.*}_{:.*}", digits, p.x, digits, p.y)
    }
}
