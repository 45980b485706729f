use crate::core::solver::{solve_spec, SolveOutcome};
use crate::domain::model::TriangleSpec;
use crate::domain::ports::{Render, Storage};
use crate::render::{render_failure, Report, SvgDiagram};
use crate::utils::error::Result;

/// A named triangle to solve.
#[derive(Debug, Clone)]
pub struct SolveRequest {
    pub name: String,
    pub spec: TriangleSpec,
}

impl SolveRequest {
    pub fn new(name: impl Into<String>, spec: TriangleSpec) -> Self {
        Self {
            name: name.into(),
            spec,
        }
    }
}

/// What happened to one request: the outcome, its display text and where its diagram went.
#[derive(Debug, Clone)]
pub struct RequestResult {
    pub name: String,
    pub outcome: SolveOutcome,
    pub rendered: String,
    pub svg_path: Option<String>,
}

impl RequestResult {
    pub fn is_solved(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Where diagrams are written. With a fixed `file_name` every request overwrites the same
/// file, so that form is meant for single requests; otherwise each goes to `<name>.svg`.
pub struct SvgSink<S: Storage> {
    pub storage: S,
    pub file_name: Option<String>,
}

pub struct SolveEngine<S: Storage> {
    report: Report,
    diagram: SvgDiagram,
    svg: Option<SvgSink<S>>,
}

impl<S: Storage> SolveEngine<S> {
    pub fn new(report: Report) -> Self {
        Self {
            report,
            diagram: SvgDiagram::default(),
            svg: None,
        }
    }

    pub fn with_svg(mut self, sink: SvgSink<S>) -> Self {
        self.svg = Some(sink);
        self
    }

    /// Solves and renders one request. Solve failures are part of the result; only
    /// rendering and storage failures are returned as errors.
    pub fn run_one(&self, request: &SolveRequest) -> Result<RequestResult> {
        let outcome = solve_spec(&request.spec);

        let (rendered, svg_path) = match &outcome {
            Ok(solved) => {
                tracing::info!(
                    name = %request.name,
                    case = %solved.case,
                    "solved triangle"
                );
                let rendered = self.report.render(solved)?;
                let svg_path = match &self.svg {
                    Some(sink) => {
                        let svg = self.diagram.render(solved)?;
                        let file_name = sink
                            .file_name
                            .clone()
                            .unwrap_or_else(|| format!("{}.svg", request.name));
                        let path = sink.storage.write_file(&file_name, svg.as_bytes())?;
                        tracing::info!(path = %path, "diagram written");
                        Some(path)
                    }
                    None => None,
                };
                (rendered, svg_path)
            }
            Err(e) => {
                tracing::warn!(name = %request.name, kind = e.kind(), "{}", e);
                (render_failure(e), None)
            }
        };

        Ok(RequestResult {
            name: request.name.clone(),
            outcome,
            rendered,
            svg_path,
        })
    }

    pub fn run(&self, requests: &[SolveRequest]) -> Result<Vec<RequestResult>> {
        tracing::debug!(count = requests.len(), "solving batch");
        requests.iter().map(|r| self.run_one(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LocalStorage;
    use tempfile::TempDir;

    #[test]
    fn test_failure_is_reported_not_raised() {
        let engine: SolveEngine<LocalStorage> = SolveEngine::new(Report::default());
        let request = SolveRequest::new(
            "flat",
            TriangleSpec::new(Some(1.0), Some(1.0), Some(3.0), None, None, None),
        );
        let result = engine.run_one(&request).unwrap();
        assert!(!result.is_solved());
        assert!(result.rendered.starts_with("❌ Invalid triangle"));
        assert!(result.svg_path.is_none());
    }

    #[test]
    fn test_svg_written_only_for_solved_requests() {
        let temp_dir = TempDir::new().unwrap();
        let engine = SolveEngine::new(Report::default()).with_svg(SvgSink {
            storage: LocalStorage::new(temp_dir.path()),
            file_name: None,
        });
        let requests = [
            SolveRequest::new(
                "right",
                TriangleSpec::new(Some(3.0), Some(4.0), Some(5.0), None, None, None),
            ),
            SolveRequest::new(
                "ssa",
                TriangleSpec::new(Some(3.0), Some(4.0), None, Some(30.0), None, None),
            ),
        ];

        let results = engine.run(&requests).unwrap();
        assert!(results[0].is_solved());
        assert!(!results[1].is_solved());
        assert!(temp_dir.path().join("right.svg").exists());
        assert!(!temp_dir.path().join("ssa.svg").exists());
    }
}
