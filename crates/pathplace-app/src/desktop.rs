//! 桌面宿主
//!
//! 文件选择与提示框使用原生对话框 (rfd)，草图、起点和前缀在终端中选择。

use crate::terminal::Terminal;
use pathplace_core::geometry::Sketch;
use pathplace_core::host::{GeometryProvider, Notice, PromptService, Severity};
use pathplace_core::key::PointKey;
use pathplace_core::math::Point2;
use pathplace_file::FileError;
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::rc::Rc;

/// 几何来源与提示服务共用的终端
pub type SharedTerminal<R, W> = Rc<RefCell<Terminal<R, W>>>;

/// 从 DXF/JSON 文件选择草图和起点
pub struct DesktopGeometry<R, W> {
    terminal: SharedTerminal<R, W>,
    precision: u32,
}

impl<R: BufRead, W: Write> DesktopGeometry<R, W> {
    pub fn new(terminal: SharedTerminal<R, W>, precision: u32) -> Self {
        Self {
            terminal,
            precision,
        }
    }

    /// 在多个草图中选择一个，只有一个时直接使用
    fn choose_sketch(&self, mut sketches: Vec<Sketch>) -> Option<Sketch> {
        if sketches.len() <= 1 {
            return sketches.pop();
        }

        let items: Vec<String> = sketches
            .iter()
            .map(|s| format!("{} ({} points, {} lines)", s.name, s.point_count(), s.line_count()))
            .collect();

        let mut term = self.terminal.borrow_mut();
        term.say("Select a sketch with points and path lines:");
        let index = term.choose("Sketch", &items, 0)?;
        Some(sketches.swap_remove(index))
    }
}

impl<R: BufRead, W: Write> GeometryProvider for DesktopGeometry<R, W> {
    type Error = FileError;

    fn select_sketch(&mut self) -> Result<Option<Sketch>, Self::Error> {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Sketch Files", &["dxf", "json"])
            .add_filter("All Files", &["*"])
            .set_title("Select a sketch with points and path lines")
            .pick_file()
        else {
            return Ok(None);
        };

        let sketches = pathplace_file::load_sketches(&path, self.precision)?;
        tracing::info!("Opened file: {}", path.display());
        Ok(self.choose_sketch(sketches))
    }

    fn select_start_point(&mut self, sketch: &Sketch, suggestions: &[Point2]) -> Option<Point2> {
        let suggested: Vec<PointKey> = suggestions
            .iter()
            .map(|p| PointKey::with_precision(p, self.precision))
            .collect();

        let items: Vec<String> = sketch
            .points
            .iter()
            .map(|p| {
                let key = PointKey::with_precision(&p.position, self.precision);
                let mark = if suggested.contains(&key) { "  (end)" } else { "" };
                format!("({:.5}, {:.5}){}", p.position.x, p.position.y, mark)
            })
            .collect();

        let default = sketch
            .points
            .iter()
            .position(|p| suggested.first() == Some(&PointKey::with_precision(&p.position, self.precision)))
            .unwrap_or(0);

        let mut term = self.terminal.borrow_mut();
        term.say("Select the STARTING point (head node):");
        let index = term.choose("Start point", &items, default)?;
        Some(sketch.points[index].position)
    }
}

/// 前缀输入、保存对话框与消息框
pub struct DesktopPrompts<R, W> {
    terminal: SharedTerminal<R, W>,
    show_dialogs: bool,
}

impl<R: BufRead, W: Write> DesktopPrompts<R, W> {
    pub fn new(terminal: SharedTerminal<R, W>) -> Self {
        Self {
            terminal,
            show_dialogs: true,
        }
    }

    /// 只在终端输出提示，不弹出消息框
    pub fn terminal_only(mut self) -> Self {
        self.show_dialogs = false;
        self
    }
}

impl<R: BufRead, W: Write> PromptService for DesktopPrompts<R, W> {
    fn prompt_prefix(&mut self, default: &str) -> Option<String> {
        self.terminal
            .borrow_mut()
            .ask("Enter designator prefix (e.g., LED, R, C)", default)
    }

    fn choose_output(&mut self) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .add_filter("CSV files", &["csv"])
            .set_title("Save CSV File")
            .save_file()
    }

    fn notify(&mut self, notice: &Notice) {
        self.terminal.borrow_mut().say(&notice.text);

        if !self.show_dialogs {
            return;
        }

        let level = match notice.severity {
            Severity::Info => rfd::MessageLevel::Info,
            Severity::Warning => rfd::MessageLevel::Warning,
            Severity::Error => rfd::MessageLevel::Error,
        };

        rfd::MessageDialog::new()
            .set_level(level)
            .set_title("Pathplace")
            .set_description(notice.text.as_str())
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}
