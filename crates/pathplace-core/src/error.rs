//! 转换错误定义

use crate::host::{Notice, Severity};
use crate::key::PointKey;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("No valid sketch selected")]
    NoSketch,

    #[error("Sketch has {points} points and {lines} lines, at least 2 points and 1 line are required")]
    NotAPath { points: usize, lines: usize },

    #[error("Start point {0} is not a point of the sketch")]
    StartPointNotFound(PointKey),

    #[error("Path traversal reached {visited} of {total} points")]
    IncompletePath { visited: usize, total: usize },

    #[error("Failed to load sketch: {0}")]
    Geometry(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Failed to write placement file: {0}")]
    Sink(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ConvertError {
    /// 转换为面向用户的提示
    pub fn notice(&self) -> Notice {
        match self {
            ConvertError::NoSketch => Notice::warning("No valid sketch selected."),
            ConvertError::NotAPath { .. } => {
                Notice::warning("Sketch must contain multiple points and lines forming a path.")
            }
            ConvertError::IncompletePath { .. } => Notice::warning(
                "Path traversal did not reach all points. Please ensure the sketch forms a single path.",
            ),
            _ => Notice::new(Severity::Error, format!("Failed:\n{}", self.detail())),
        }
    }

    /// 完整错误链
    fn detail(&self) -> String {
        let mut text = self.to_string();
        let mut source = std::error::Error::source(self);
        // Geometry/Sink 的 Display 已包含直接来源
        if matches!(self, ConvertError::Geometry(_) | ConvertError::Sink(_)) {
            source = source.and_then(|s| s.source());
        }
        while let Some(err) = source {
            text.push_str("\ncaused by: ");
            text.push_str(&err.to_string());
            source = err.source();
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_notices() {
        let notice = ConvertError::NotAPath { points: 1, lines: 0 }.notice();
        assert_eq!(notice.severity, Severity::Warning);
        assert_eq!(
            notice.text,
            "Sketch must contain multiple points and lines forming a path."
        );

        assert_eq!(ConvertError::NoSketch.notice().text, "No valid sketch selected.");
    }

    #[test]
    fn test_incomplete_notice() {
        let notice = ConvertError::IncompletePath { visited: 2, total: 3 }.notice();
        assert!(notice.text.starts_with("Path traversal did not reach all points."));
    }

    #[test]
    fn test_unexpected_failure_carries_detail() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only volume");
        let notice = ConvertError::Sink(Box::new(io)).notice();

        assert_eq!(notice.severity, Severity::Error);
        assert!(notice.text.starts_with("Failed:\n"));
        assert!(notice.text.contains("read-only volume"));
    }

    #[test]
    fn test_load_failure_is_not_a_missing_sketch() {
        let io = std::io::Error::new(std::io::ErrorKind::InvalidData, "expected value at line 3");
        let notice = ConvertError::Geometry(Box::new(io)).notice();

        assert_eq!(notice.severity, Severity::Error);
        assert_eq!(notice.text, "Failed:\nFailed to load sketch: expected value at line 3");
    }
}
