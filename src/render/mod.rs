// Output consumers of a solved triangle. None of these modules does any trigonometric solving.

pub mod layout;
pub mod report;
pub mod svg;

pub use layout::Layout;
pub use report::{render_failure, OutputFormat, Report};
pub use svg::SvgDiagram;
