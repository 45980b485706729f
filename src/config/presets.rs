use crate::domain::model::TriangleSpec;
use serde::{Deserialize, Serialize};

/// Built-in example triangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// SSS right triangle 3-4-5
    Right,
    /// SAS: a = 5, b = 7, C = 60°
    Sas,
    /// ASA: c = 10, A = 30°, B = 60°
    Asa,
    /// SSS scalene triangle 8-10-12
    Scalene,
}

impl Preset {
    pub const ALL: [Preset; 4] = [Preset::Right, Preset::Sas, Preset::Asa, Preset::Scalene];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Right => "right",
            Preset::Sas => "sas",
            Preset::Asa => "asa",
            Preset::Scalene => "scalene",
        }
    }

    pub fn spec(self) -> TriangleSpec {
        match self {
            Preset::Right => TriangleSpec::new(Some(3.0), Some(4.0), Some(5.0), None, None, None),
            Preset::Sas => TriangleSpec::new(Some(5.0), Some(7.0), None, None, None, Some(60.0)),
            Preset::Asa => TriangleSpec::new(None, None, Some(10.0), Some(30.0), Some(60.0), None),
            Preset::Scalene => {
                TriangleSpec::new(Some(8.0), Some(10.0), Some(12.0), None, None, None)
            }
        }
    }
}
