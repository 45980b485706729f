use crate::domain::model::TriangleSpec;
use crate::render::OutputFormat;
use crate::utils::error::{Result, TriError};
use crate::utils::validation::{
    validate_file_stem, validate_non_empty_string, validate_one_of, validate_path, validate_range,
    Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_PRECISION: usize = 4;
pub const MAX_PRECISION: usize = 10;

/// Configuration file: output settings plus an optional batch of triangles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default, rename = "triangle")]
    pub triangles: Vec<TriangleEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_precision")]
    pub precision: usize,
    pub svg_dir: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            precision: DEFAULT_PRECISION,
            svg_dir: None,
        }
    }
}

fn default_format() -> String {
    OutputFormat::Markdown.to_string()
}

fn default_precision() -> usize {
    DEFAULT_PRECISION
}

/// One named triangle of a batch. Values use the short keys `a`, `b`, `c`, `A`, `B`, `C`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriangleEntry {
    pub name: String,
    #[serde(flatten)]
    pub spec: TriangleSpec,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            triangles = config.triangles.len(),
            "loaded configuration file"
        );
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed)?)
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TriError::Config {
            message: format!("environment substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn output_format(&self) -> Result<OutputFormat> {
        self.output.format.parse()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_one_of("output.format", &self.output.format, &OutputFormat::NAMES)?;
        validate_range("output.precision", self.output.precision, 0, MAX_PRECISION)?;
        if let Some(dir) = &self.output.svg_dir {
            validate_path("output.svg_dir", dir)?;
        }

        for (i, entry) in self.triangles.iter().enumerate() {
            let field = format!("triangle[{}].name", i);
            validate_non_empty_string(&field, &entry.name)?;
            validate_file_stem(&field, &entry.name)?;
            if self.triangles[..i].iter().any(|other| other.name == entry.name) {
                return Err(TriError::InvalidConfigValue {
                    field,
                    value: entry.name.clone(),
                    reason: "Triangle names must be unique".to_string(),
                });
            }
        }
        Ok(())
    }
}
