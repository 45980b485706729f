use crate::domain::model::SolvedTriangle;
use crate::utils::error::Result;

/// A downstream consumer that turns a solved triangle into displayable text.
pub trait Render {
    fn render(&self, solved: &SolvedTriangle) -> Result<String>;
}

pub trait Storage: Send + Sync {
    /// Writes `data` under the storage root and returns the full path written.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String>;
}
