//! 贴片CSV导出
//!
//! Altium 的 Pick and Place 导入格式：UTF-8，`\r\n` 换行，
//! 仅在字段含逗号、引号或换行时加引号。

use crate::error::FileError;
use pathplace_core::host::PlacementSink;
use pathplace_core::placement::{PlacementRow, PLACEMENT_HEADER};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const LINE_TERMINATOR: &str = "\r\n";

/// 写入表头和全部贴片行
pub fn write_placement<W: Write>(writer: &mut W, rows: &[PlacementRow]) -> std::io::Result<()> {
    write_record(writer, &PLACEMENT_HEADER)?;
    for row in rows {
        write_record(writer, &row.fields())?;
    }
    Ok(())
}

fn write_record<W: Write>(writer: &mut W, fields: &[&str]) -> std::io::Result<()> {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            writer.write_all(b",")?;
        }
        writer.write_all(escape_field(field).as_bytes())?;
    }
    writer.write_all(LINE_TERMINATOR.as_bytes())
}

fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// 保存贴片文件
///
/// 先写入同目录下的临时文件，完成后再替换目标文件。
pub fn save_placement(path: &Path, rows: &[PlacementRow]) -> Result<(), FileError> {
    let temp_path = temp_path_for(path)?;

    let result = write_temp(&temp_path, rows)
        .and_then(|()| std::fs::rename(&temp_path, path).map_err(FileError::from));
    if result.is_err() {
        std::fs::remove_file(&temp_path).ok();
        return result;
    }

    tracing::info!("Saved {} placements to {}", rows.len(), path.display());

    Ok(())
}

fn write_temp(temp_path: &Path, rows: &[PlacementRow]) -> Result<(), FileError> {
    let file = File::create(temp_path)?;
    let mut writer = BufWriter::new(file);
    write_placement(&mut writer, rows)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;
    Ok(())
}

fn temp_path_for(path: &Path) -> Result<PathBuf, FileError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| FileError::InvalidFormat(format!("Not a file path: {}", path.display())))?;

    Ok(path.with_file_name(format!(".{}.tmp", file_name.to_string_lossy())))
}

/// 写入本地文件的贴片输出端
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvPlacementSink;

impl PlacementSink for CsvPlacementSink {
    type Error = FileError;

    fn write_rows(&mut self, path: &Path, rows: &[PlacementRow]) -> Result<(), Self::Error> {
        save_placement(path, rows)
    }
}
