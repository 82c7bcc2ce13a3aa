//! 转换会话
//!
//! 一次完整的用户操作：选择草图 -> 选择起点 -> 输入前缀 -> 遍历校验 ->
//! 选择输出文件 -> 写入。所有失败都会通过 `PromptService::notify` 报告一次，
//! 不做重试，也没有需要回滚的状态。

use crate::adjacency::Adjacency;
use crate::config::ConvertConfig;
use crate::error::ConvertError;
use crate::host::{GeometryProvider, Notice, PlacementSink, PromptService};
use crate::math::Point2;
use crate::placement::{plan_from_adjacency, resolve_prefix};
use std::path::PathBuf;

/// 会话结果
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// 已写入文件
    Written { path: PathBuf, rows: usize },
    /// 用户取消
    Cancelled,
    /// 因错误中止，提示已显示给用户
    Aborted(Notice),
}

/// 执行一次转换
pub fn run_conversion<G, P, S>(
    geometry: &mut G,
    prompts: &mut P,
    sink: &mut S,
    config: &ConvertConfig,
) -> Outcome
where
    G: GeometryProvider,
    P: PromptService,
    S: PlacementSink,
{
    match convert(geometry, prompts, sink, config) {
        Ok(Some((path, rows))) => {
            prompts.notify(&Notice::saved(&path));
            Outcome::Written { path, rows }
        }
        Ok(None) => {
            tracing::info!("Conversion cancelled by user");
            Outcome::Cancelled
        }
        Err(err) => {
            tracing::error!("Conversion aborted: {}", err);
            let notice = err.notice();
            prompts.notify(&notice);
            Outcome::Aborted(notice)
        }
    }
}

fn convert<G, P, S>(
    geometry: &mut G,
    prompts: &mut P,
    sink: &mut S,
    config: &ConvertConfig,
) -> Result<Option<(PathBuf, usize)>, ConvertError>
where
    G: GeometryProvider,
    P: PromptService,
    S: PlacementSink,
{
    let sketch = geometry
        .select_sketch()
        .map_err(|e| ConvertError::Geometry(Box::new(e)))?
        .ok_or(ConvertError::NoSketch)?;

    if !sketch.is_path_candidate() {
        return Err(ConvertError::NotAPath {
            points: sketch.point_count(),
            lines: sketch.line_count(),
        });
    }

    let adjacency = Adjacency::build(&sketch, config.key_precision);
    let suggestions: Vec<Point2> = adjacency
        .endpoints()
        .iter()
        .filter_map(|key| adjacency.point(key))
        .map(|p| p.position)
        .collect();

    let Some(start) = geometry.select_start_point(&sketch, &suggestions) else {
        return Ok(None);
    };

    let Some(input) = prompts.prompt_prefix(&config.default_prefix) else {
        return Ok(None);
    };
    let prefix = resolve_prefix(&input, &config.default_prefix);

    // 全部校验通过后才询问输出路径，失败时不会产生文件
    let rows = plan_from_adjacency(&adjacency, &start, &prefix, config)?;

    let Some(path) = prompts.choose_output() else {
        return Ok(None);
    };

    sink.write_rows(&path, &rows)
        .map_err(|e| ConvertError::Sink(Box::new(e)))?;

    tracing::info!(
        "Wrote {} placements from sketch '{}' to {}",
        rows.len(),
        sketch.name,
        path.display()
    );

    Ok(Some((path, rows.len())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Sketch;
    use crate::host::Severity;
    use crate::placement::PlacementRow;
    use std::path::Path;

    struct FakeGeometry {
        sketch: Option<Sketch>,
        load_error: Option<&'static str>,
        start: Option<Point2>,
        seen_suggestions: Vec<Point2>,
    }

    impl GeometryProvider for FakeGeometry {
        type Error = std::io::Error;

        fn select_sketch(&mut self) -> Result<Option<Sketch>, Self::Error> {
            if let Some(detail) = self.load_error {
                return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, detail));
            }
            Ok(self.sketch.clone())
        }

        fn select_start_point(&mut self, _sketch: &Sketch, suggestions: &[Point2]) -> Option<Point2> {
            self.seen_suggestions = suggestions.to_vec();
            self.start
        }
    }

    #[derive(Default)]
    struct FakePrompts {
        prefix: Option<String>,
        output: Option<PathBuf>,
        notices: Vec<Notice>,
        asked_output: bool,
    }

    impl PromptService for FakePrompts {
        fn prompt_prefix(&mut self, _default: &str) -> Option<String> {
            self.prefix.clone()
        }

        fn choose_output(&mut self) -> Option<PathBuf> {
            self.asked_output = true;
            self.output.clone()
        }

        fn notify(&mut self, notice: &Notice) {
            self.notices.push(notice.clone());
        }
    }

    #[derive(Default)]
    struct MemorySink {
        written: Vec<(PathBuf, Vec<PlacementRow>)>,
        fail: bool,
    }

    impl PlacementSink for MemorySink {
        type Error = std::io::Error;

        fn write_rows(&mut self, path: &Path, rows: &[PlacementRow]) -> Result<(), Self::Error> {
            if self.fail {
                return Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
            }
            self.written.push((path.to_path_buf(), rows.to_vec()));
            Ok(())
        }
    }

    fn row_sketch() -> Sketch {
        Sketch::from_polyline(
            "row",
            &[
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(2.0, 0.0),
            ],
        )
    }

    fn geometry(sketch: Sketch) -> FakeGeometry {
        FakeGeometry {
            sketch: Some(sketch),
            load_error: None,
            start: Some(Point2::new(0.0, 0.0)),
            seen_suggestions: Vec::new(),
        }
    }

    fn prompts(prefix: &str) -> FakePrompts {
        FakePrompts {
            prefix: Some(prefix.to_string()),
            output: Some(PathBuf::from("out.csv")),
            ..FakePrompts::default()
        }
    }

    #[test]
    fn test_successful_conversion() {
        let mut geo = geometry(row_sketch());
        let mut ui = prompts("R");
        let mut sink = MemorySink::default();

        let outcome = run_conversion(&mut geo, &mut ui, &mut sink, &ConvertConfig::default());

        assert_eq!(
            outcome,
            Outcome::Written {
                path: PathBuf::from("out.csv"),
                rows: 3
            }
        );
        assert_eq!(sink.written.len(), 1);
        assert_eq!(sink.written[0].1[2].designator, "R3");
        assert_eq!(ui.notices.len(), 1);
        assert_eq!(ui.notices[0].severity, Severity::Info);
        assert!(ui.notices[0].text.starts_with("CSV file saved to:\n"));
        assert_eq!(
            geo.seen_suggestions,
            vec![Point2::new(0.0, 0.0), Point2::new(2.0, 0.0)]
        );
    }

    #[test]
    fn test_blank_prefix_uses_default() {
        let mut geo = geometry(row_sketch());
        let mut ui = prompts("  ");
        let mut sink = MemorySink::default();

        run_conversion(&mut geo, &mut ui, &mut sink, &ConvertConfig::default());

        assert_eq!(sink.written[0].1[0].designator, "U1");
    }

    #[test]
    fn test_no_sketch() {
        let mut geo = geometry(row_sketch());
        geo.sketch = None;
        let mut ui = prompts("R");
        let mut sink = MemorySink::default();

        let outcome = run_conversion(&mut geo, &mut ui, &mut sink, &ConvertConfig::default());

        assert_eq!(
            outcome,
            Outcome::Aborted(Notice::warning("No valid sketch selected."))
        );
        assert_eq!(ui.notices.len(), 1);
    }

    #[test]
    fn test_sketch_load_failure_reported_with_detail() {
        let mut geo = geometry(row_sketch());
        geo.load_error = Some("invalid type: integer `3`, expected a sequence at line 1 column 14");
        let mut ui = prompts("R");
        let mut sink = MemorySink::default();

        let outcome = run_conversion(&mut geo, &mut ui, &mut sink, &ConvertConfig::default());

        let Outcome::Aborted(notice) = outcome else {
            panic!("expected abort, got {:?}", outcome);
        };
        assert_eq!(notice.severity, Severity::Error);
        assert!(notice.text.starts_with("Failed:\n"));
        assert!(notice.text.contains("expected a sequence at line 1 column 14"));
        assert_ne!(notice.text, "No valid sketch selected.");
        assert_eq!(ui.notices, vec![notice]);
        assert!(sink.written.is_empty());
    }

    #[test]
    fn test_too_few_lines() {
        let mut sketch = row_sketch();
        sketch.lines.clear();
        let mut geo = geometry(sketch);
        let mut ui = prompts("R");
        let mut sink = MemorySink::default();

        let outcome = run_conversion(&mut geo, &mut ui, &mut sink, &ConvertConfig::default());

        assert!(matches!(outcome, Outcome::Aborted(_)));
        assert_eq!(
            ui.notices[0].text,
            "Sketch must contain multiple points and lines forming a path."
        );
        assert!(sink.written.is_empty());
    }

    #[test]
    fn test_incomplete_path_writes_nothing() {
        let mut sketch = row_sketch();
        sketch.lines.pop();
        let mut geo = geometry(sketch);
        let mut ui = prompts("R");
        let mut sink = MemorySink::default();

        let outcome = run_conversion(&mut geo, &mut ui, &mut sink, &ConvertConfig::default());

        assert!(matches!(outcome, Outcome::Aborted(_)));
        assert!(sink.written.is_empty());
        assert!(!ui.asked_output);
        assert!(ui.notices[0].text.starts_with("Path traversal did not reach all points."));
    }

    #[test]
    fn test_cancelled_save_dialog() {
        let mut geo = geometry(row_sketch());
        let mut ui = prompts("R");
        ui.output = None;
        let mut sink = MemorySink::default();

        let outcome = run_conversion(&mut geo, &mut ui, &mut sink, &ConvertConfig::default());

        assert_eq!(outcome, Outcome::Cancelled);
        assert!(sink.written.is_empty());
        assert!(ui.notices.is_empty());
    }

    #[test]
    fn test_cancelled_start_point() {
        let mut geo = geometry(row_sketch());
        geo.start = None;
        let mut ui = prompts("R");
        let mut sink = MemorySink::default();

        let outcome = run_conversion(&mut geo, &mut ui, &mut sink, &ConvertConfig::default());

        assert_eq!(outcome, Outcome::Cancelled);
    }

    #[test]
    fn test_sink_failure_reported() {
        let mut geo = geometry(row_sketch());
        let mut ui = prompts("R");
        let mut sink = MemorySink {
            fail: true,
            ..MemorySink::default()
        };

        let outcome = run_conversion(&mut geo, &mut ui, &mut sink, &ConvertConfig::default());

        let Outcome::Aborted(notice) = outcome else {
            panic!("expected abort, got {:?}", outcome);
        };
        assert_eq!(notice.severity, Severity::Error);
        assert!(notice.text.starts_with("Failed:\n"));
        assert!(notice.text.contains("disk full"));
    }

    #[test]
    fn test_start_outside_sketch() {
        let mut geo = geometry(row_sketch());
        geo.start = Some(Point2::new(5.0, 5.0));
        let mut ui = prompts("R");
        let mut sink = MemorySink::default();

        let outcome = run_conversion(&mut geo, &mut ui, &mut sink, &ConvertConfig::default());

        assert!(matches!(outcome, Outcome::Aborted(ref n) if n.severity == Severity::Error));
        assert!(sink.written.is_empty());
    }
}
