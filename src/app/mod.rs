pub mod engine;

pub use engine::{RequestResult, SolveEngine, SolveRequest, SvgSink};
