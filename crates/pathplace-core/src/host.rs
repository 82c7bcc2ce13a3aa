//! 宿主协作接口
//!
//! 宿主程序的对象模型、交互对话框和文件写入都通过这些 trait 注入，
//! 核心逻辑因此可以脱离宿主运行和测试。
//!
//! 返回 `None` 表示用户取消了该步骤。

use crate::geometry::Sketch;
use crate::math::Point2;
use crate::placement::PlacementRow;
use std::path::{Path, PathBuf};

/// 提示级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// 面向用户的提示，由宿主负责显示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub text: String,
}

impl Notice {
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(Severity::Info, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(Severity::Warning, text)
    }

    /// 保存成功的提示
    pub fn saved(path: &Path) -> Self {
        Self::info(format!("CSV file saved to:\n{}", path.display()))
    }
}

/// 几何来源：草图与起点的选择
pub trait GeometryProvider {
    type Error: std::error::Error + Send + Sync + 'static;

    /// 让用户选择一个草图
    ///
    /// `Ok(None)` 表示没有选中草图，读取失败时返回错误。
    fn select_sketch(&mut self) -> Result<Option<Sketch>, Self::Error>;

    /// 让用户选择起点（路径头）
    ///
    /// `suggestions` 为草图中度为 1 的端点，可用作默认选项。
    fn select_start_point(&mut self, sketch: &Sketch, suggestions: &[Point2]) -> Option<Point2>;
}

/// 交互提示服务
pub trait PromptService {
    /// 询问位号前缀，`default` 为对话框中的预填值
    fn prompt_prefix(&mut self, default: &str) -> Option<String>;

    /// 选择输出文件
    fn choose_output(&mut self) -> Option<PathBuf>;

    /// 显示提示
    fn notify(&mut self, notice: &Notice);
}

/// 贴片数据输出端
pub trait PlacementSink {
    type Error: std::error::Error + Send + Sync + 'static;

    /// 写入全部贴片行，成功则文件完整，失败则不留下部分内容
    fn write_rows(&mut self, path: &Path, rows: &[PlacementRow]) -> Result<(), Self::Error>;
}
