use crate::domain::model::{Element, SolvedTriangle, Vertex};
use crate::domain::ports::Render;
use crate::utils::error::{Result, TriError};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Markdown,
    Plain,
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 3] = ["markdown", "plain", "json"];
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Markdown => "markdown",
            OutputFormat::Plain => "plain",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = TriError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "markdown" => Ok(OutputFormat::Markdown),
            "plain" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            other => Err(TriError::InvalidConfigValue {
                field: "output.format".to_string(),
                value: other.to_string(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    OutputFormat::NAMES.join(", ")
                ),
            }),
        }
    }
}

/// Text summary of a solved triangle followed by its derivation.
#[derive(Debug, Clone)]
pub struct Report {
    pub format: OutputFormat,
    pub precision: usize,
}

impl Default for Report {
    fn default() -> Self {
        Self {
            format: OutputFormat::Markdown,
            precision: 4,
        }
    }
}

impl Report {
    pub fn new(format: OutputFormat, precision: usize) -> Self {
        Self { format, precision }
    }

    fn value_lines(&self, solved: &SolvedTriangle) -> Vec<String> {
        let sides = Vertex::ALL.map(Element::Side);
        let angles = Vertex::ALL.map(Element::Angle);
        sides
            .into_iter()
            .chain(angles)
            .map(|element| match element {
                Element::Side(v) => format!(
                    "{} = {:.*}",
                    element.label(),
                    self.precision,
                    solved.side(v)
                ),
                Element::Angle(v) => format!(
                    "{} = {:.*}°",
                    element.label(),
                    self.precision,
                    solved.angle(v)
                ),
            })
            .collect()
    }

    fn render_text(&self, solved: &SolvedTriangle, markdown: bool) -> String {
        let mut lines = Vec::with_capacity(12);
        let header = format!("Solution ({} Case):", solved.case.heading());
        lines.push(if markdown {
            format!("**{}**", header)
        } else {
            header
        });
        for line in self.value_lines(solved) {
            lines.push(format!("- {}", line));
        }

        lines.push(String::new());
        lines.push(if markdown {
            "**Derivation:**".to_string()
        } else {
            "Derivation:".to_string()
        });
        for (i, step) in solved.trace.iter().enumerate() {
            let formula = if markdown {
                format!("`{}`", step.formula)
            } else {
                step.formula.clone()
            };
            lines.push(format!(
                "{}. {} ({}): {} → {} = {}",
                i + 1,
                step.target.label(),
                step.law,
                formula,
                step.substituted(self.precision),
                step.formatted_value(self.precision)
            ));
        }
        lines.join("\n")
    }
}

impl Render for Report {
    fn render(&self, solved: &SolvedTriangle) -> Result<String> {
        match self.format {
            OutputFormat::Markdown => Ok(self.render_text(solved, true)),
            OutputFormat::Plain => Ok(self.render_text(solved, false)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(solved)?),
        }
    }
}

/// Display line for a request that could not be solved.
pub fn render_failure(error: &impl fmt::Display) -> String {
    format!("❌ {}", error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::solver::solve;

    #[test]
    fn test_markdown_report() {
        let solved = solve(Some(3.0), Some(4.0), Some(5.0), None, None, None).unwrap();
        let text = Report::default().render(&solved).unwrap();

        assert!(text.starts_with("**Solution (SSS Case):**"));
        assert!(text.contains("- Side a = 3.0000"));
        assert!(text.contains("- Side b = 4.0000"));
        assert!(text.contains("- Side c = 5.0000"));
        assert!(text.contains("- Angle A = 36.8699°"));
        assert!(text.contains("- Angle B = 53.1301°"));
        assert!(text.contains("- Angle C = 90.0000°"));
        assert!(text.contains("**Derivation:**"));
        assert!(text.contains("3. Angle C (Angle sum): `C = 180° − A − B`"));
    }

    #[test]
    fn test_plain_report_uses_asa_heading() {
        let solved = solve(None, None, Some(10.0), Some(30.0), Some(60.0), None).unwrap();
        let text = Report::new(OutputFormat::Plain, 2).render(&solved).unwrap();
        assert!(text.starts_with("Solution (ASA/AAS Case):"));
        assert!(text.contains("- Side a = 5.00"));
        assert!(text.contains("- Side b = 8.66"));
        assert!(!text.contains('`'));
    }

    #[test]
    fn test_json_report() {
        let solved = solve(Some(5.0), Some(7.0), None, None, None, Some(60.0)).unwrap();
        let text = Report::new(OutputFormat::Json, 4).render(&solved).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["case"], "SAS");
        assert_eq!(value["trace"].as_array().unwrap().len(), 3);
        assert_eq!(value["trace"][0]["law"], "law_of_cosines");
    }

    #[test]
    fn test_failure_line() {
        let err = crate::utils::error::SolveError::invalid("a + b <= c");
        assert_eq!(render_failure(&err), "❌ Invalid triangle: a + b <= c");
    }
}
