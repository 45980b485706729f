use crate::config::presets::Preset;
use crate::config::toml_config::MAX_PRECISION;
use crate::domain::model::TriangleSpec;
use crate::render::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_range, Validate};
use clap::Parser;

const MANUAL_FIELDS: [&str; 6] = ["side_a", "side_b", "side_c", "angle_a", "angle_b", "angle_c"];

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "trisolve")]
#[command(about = "Solve a triangle from three known sides and angles (Law of Cosines / Law of Sines)")]
#[command(
    after_help = "Side a is opposite angle A, side b opposite B, side c opposite C. Leave unknown values out.\n\
Supported cases: SSS (three sides), SAS (two sides and the included angle), ASA/AAS (one side and two angles)."
)]
pub struct CliConfig {
    /// Side a
    #[arg(short = 'a', long, allow_hyphen_values = true)]
    pub side_a: Option<String>,

    /// Side b
    #[arg(short = 'b', long, allow_hyphen_values = true)]
    pub side_b: Option<String>,

    /// Side c
    #[arg(short = 'c', long, allow_hyphen_values = true)]
    pub side_c: Option<String>,

    /// Angle A in degrees
    #[arg(short = 'A', long, allow_hyphen_values = true)]
    pub angle_a: Option<String>,

    /// Angle B in degrees
    #[arg(short = 'B', long, allow_hyphen_values = true)]
    pub angle_b: Option<String>,

    /// Angle C in degrees
    #[arg(short = 'C', long, allow_hyphen_values = true)]
    pub angle_c: Option<String>,

    /// Solve one of the built-in example triangles
    #[arg(long, value_enum, conflicts_with_all = MANUAL_FIELDS)]
    pub preset: Option<Preset>,

    /// Output format (overrides the config file)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Decimal places in the report (overrides the config file)
    #[arg(long)]
    pub precision: Option<usize>,

    /// Write the scaled diagram of a single solved triangle to this SVG file
    #[arg(long)]
    pub svg: Option<String>,

    /// TOML file with [output] settings and [[triangle]] entries
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    pub fn has_manual_input(&self) -> bool {
        self.raw_fields().iter().any(|f| !f.trim().is_empty())
    }

    /// The six value flags in `a, b, c, A, B, C` order; missing flags read as blank.
    pub fn raw_fields(&self) -> [&str; 6] {
        [
            &self.side_a,
            &self.side_b,
            &self.side_c,
            &self.angle_a,
            &self.angle_b,
            &self.angle_c,
        ]
        .map(|f| f.as_deref().unwrap_or(""))
    }

    /// The triangle given on the command line, if any.
    pub fn triangle(&self) -> Result<Option<(String, TriangleSpec)>> {
        if let Some(preset) = self.preset {
            return Ok(Some((preset.name().to_string(), preset.spec())));
        }
        if self.has_manual_input() {
            return Ok(Some((
                "input".to_string(),
                TriangleSpec::from_raw(self.raw_fields())?,
            )));
        }
        Ok(None)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(precision) = self.precision {
            validate_range("precision", precision, 0, MAX_PRECISION)?;
        }
        if let Some(svg) = &self.svg {
            validate_path("svg", svg)?;
        }
        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }
        Ok(())
    }
}
