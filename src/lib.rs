pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::{SolveEngine, SolveRequest};
pub use config::{LocalStorage, Preset, TomlConfig};
pub use crate::core::solver::{solve, solve_spec, SolveOutcome};
pub use domain::model::{CaseKind, SolvedTriangle, Step, TriangleSpec, Vertex};
pub use domain::ports::Render;
pub use render::{OutputFormat, Report, SvgDiagram};
pub use utils::error::{Result, SolveError, TriError};
