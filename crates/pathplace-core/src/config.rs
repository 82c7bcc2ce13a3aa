//! 转换配置
//!
//! 默认值即 Altium 贴片导入所需的固定格式。

use crate::key::DEFAULT_KEY_PRECISION;
use crate::traversal::NeighborOrder;
use serde::{Deserialize, Serialize};

/// 转换配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// 点键取整的小数位数
    pub key_precision: u32,

    /// 坐标缩放系数（草图单位 cm -> 输出单位 mm）
    pub unit_scale: f64,

    /// 输出坐标的小数位数
    pub coordinate_decimals: usize,

    /// 输出层名
    pub layer: String,

    /// 输出旋转角（原样写入）
    pub rotation: String,

    /// 用户未输入时的位号前缀
    pub default_prefix: String,

    /// 遍历时邻居的访问顺序
    pub neighbor_order: NeighborOrder,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            key_precision: DEFAULT_KEY_PRECISION,
            unit_scale: 10.0,
            coordinate_decimals: 3,
            layer: "TopLayer".to_string(),
            rotation: "0.0".to_string(),
            default_prefix: "U".to_string(),
            neighbor_order: NeighborOrder::default(),
        }
    }
}
