//! Pathplace 主程序入口
//!
//! 选择草图、起点和位号前缀，将沿路径排列的点导出为 Altium 贴片 CSV。

mod desktop;
mod terminal;

use anyhow::Result;
use std::cell::RefCell;
use std::io;
use std::process::ExitCode;
use std::rc::Rc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use desktop::{DesktopGeometry, DesktopPrompts};
use pathplace_core::config::ConvertConfig;
use pathplace_core::session::{run_conversion, Outcome};
use pathplace_file::CsvPlacementSink;
use terminal::Terminal;

fn main() -> Result<ExitCode> {
    // 初始化日志
    tracing::subscriber::set_global_default(
        FmtSubscriber::builder().with_max_level(Level::INFO).finish(),
    )?;

    info!("Starting Pathplace...");

    let config = ConvertConfig::default();
    let terminal = Rc::new(RefCell::new(Terminal::new(io::stdin().lock(), io::stdout())));

    let mut geometry = DesktopGeometry::new(terminal.clone(), config.key_precision);
    let mut prompts = DesktopPrompts::new(terminal);
    let mut sink = CsvPlacementSink;

    // 失败提示已由 notify 显示，这里只设置退出码
    let code = match run_conversion(&mut geometry, &mut prompts, &mut sink, &config) {
        Outcome::Written { path, rows } => {
            info!("Exported {} rows to {}", rows, path.display());
            ExitCode::SUCCESS
        }
        Outcome::Cancelled => {
            info!("Nothing exported");
            ExitCode::SUCCESS
        }
        Outcome::Aborted(_) => ExitCode::FAILURE,
    };

    Ok(code)
}
