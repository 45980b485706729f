pub mod classify;
pub mod solver;
pub mod trace;
pub mod trig;
pub mod validate;

pub use crate::domain::model::{CaseKind, SolvedTriangle, Step, TriangleSpec, Vertex};
pub use crate::domain::ports::Render;
pub use crate::utils::error::{Result, SolveError};
