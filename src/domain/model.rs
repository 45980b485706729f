use crate::utils::error::Result;
use crate::utils::validation::parse_optional_number;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A triangle vertex. Side `x` is always opposite angle `X`, so a vertex names both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vertex {
    A,
    B,
    C,
}

impl Vertex {
    pub const ALL: [Vertex; 3] = [Vertex::A, Vertex::B, Vertex::C];

    pub fn index(self) -> usize {
        match self {
            Vertex::A => 0,
            Vertex::B => 1,
            Vertex::C => 2,
        }
    }

    /// The two other vertices, in A, B, C order.
    pub fn others(self) -> (Vertex, Vertex) {
        match self {
            Vertex::A => (Vertex::B, Vertex::C),
            Vertex::B => (Vertex::A, Vertex::C),
            Vertex::C => (Vertex::A, Vertex::B),
        }
    }

    /// The vertex that is neither `self` nor `other`.
    pub fn third(self, other: Vertex) -> Vertex {
        match (self, other) {
            (Vertex::A, Vertex::B) | (Vertex::B, Vertex::A) => Vertex::C,
            (Vertex::A, Vertex::C) | (Vertex::C, Vertex::A) => Vertex::B,
            _ => Vertex::A,
        }
    }

    pub fn side_name(self) -> &'static str {
        match self {
            Vertex::A => "a",
            Vertex::B => "b",
            Vertex::C => "c",
        }
    }

    pub fn angle_name(self) -> &'static str {
        match self {
            Vertex::A => "A",
            Vertex::B => "B",
            Vertex::C => "C",
        }
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.angle_name())
    }
}

/// Which of the six elements a value describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "vertex", rename_all = "snake_case")]
pub enum Element {
    Side(Vertex),
    Angle(Vertex),
}

impl Element {
    pub fn is_angle(self) -> bool {
        matches!(self, Element::Angle(_))
    }

    pub fn label(self) -> String {
        match self {
            Element::Side(v) => format!("Side {}", v.side_name()),
            Element::Angle(v) => format!("Angle {}", v.angle_name()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Law {
    LawOfCosines,
    LawOfSines,
    AngleSum,
}

impl fmt::Display for Law {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Law::LawOfCosines => "Law of Cosines",
            Law::LawOfSines => "Law of Sines",
            Law::AngleSum => "Angle sum",
        };
        f.write_str(name)
    }
}

/// One derivation step: the formula, the values it was evaluated with and its result.
///
/// `pattern` is `formula` with every operand replaced by a `{}` placeholder, filled from
/// `operands` in order when the step is rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub target: Element,
    pub law: Law,
    pub formula: String,
    pub pattern: String,
    pub operands: Vec<f64>,
    pub value: f64,
}

impl Step {
    /// The formula with its operands substituted, each printed with `precision` decimals.
    pub fn substituted(&self, precision: usize) -> String {
        let mut out = String::with_capacity(self.pattern.len() + self.operands.len() * 8);
        let mut operands = self.operands.iter();
        let mut pieces = self.pattern.split("{}").peekable();
        while let Some(piece) = pieces.next() {
            out.push_str(piece);
            if pieces.peek().is_some() {
                match operands.next() {
                    Some(v) => out.push_str(&format!("{:.*}", precision, v)),
                    None => out.push('?'),
                }
            }
        }
        out
    }

    pub fn formatted_value(&self, precision: usize) -> String {
        if self.target.is_angle() {
            format!("{:.*}°", precision, self.value)
        } else {
            format!("{:.*}", precision, self.value)
        }
    }
}

/// Which solving case handled a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CaseKind {
    Sss,
    Sas,
    Asa,
    Aas,
}

impl CaseKind {
    /// Label used in report headers; ASA and AAS share one handler and one heading.
    pub fn heading(self) -> &'static str {
        match self {
            CaseKind::Sss => "SSS",
            CaseKind::Sas => "SAS",
            CaseKind::Asa | CaseKind::Aas => "ASA/AAS",
        }
    }
}

impl fmt::Display for CaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CaseKind::Sss => "SSS",
            CaseKind::Sas => "SAS",
            CaseKind::Asa => "ASA",
            CaseKind::Aas => "AAS",
        };
        f.write_str(name)
    }
}

/// Partial description of a triangle: any of the three sides and three angles (degrees).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TriangleSpec {
    #[serde(rename = "a", default)]
    pub side_a: Option<f64>,
    #[serde(rename = "b", default)]
    pub side_b: Option<f64>,
    #[serde(rename = "c", default)]
    pub side_c: Option<f64>,
    #[serde(rename = "A", default)]
    pub angle_a: Option<f64>,
    #[serde(rename = "B", default)]
    pub angle_b: Option<f64>,
    #[serde(rename = "C", default)]
    pub angle_c: Option<f64>,
}

impl TriangleSpec {
    pub fn new(
        side_a: Option<f64>,
        side_b: Option<f64>,
        side_c: Option<f64>,
        angle_a: Option<f64>,
        angle_b: Option<f64>,
        angle_c: Option<f64>,
    ) -> Self {
        Self {
            side_a,
            side_b,
            side_c,
            angle_a,
            angle_b,
            angle_c,
        }
    }

    pub fn side(&self, v: Vertex) -> Option<f64> {
        match v {
            Vertex::A => self.side_a,
            Vertex::B => self.side_b,
            Vertex::C => self.side_c,
        }
    }

    pub fn angle(&self, v: Vertex) -> Option<f64> {
        match v {
            Vertex::A => self.angle_a,
            Vertex::B => self.angle_b,
            Vertex::C => self.angle_c,
        }
    }

    /// Builds a spec from raw text fields in `a, b, c, A, B, C` order. Blank fields are absent.
    pub fn from_raw(raw: [&str; 6]) -> Result<Self> {
        let [a, b, c, aa, bb, cc] = raw;
        Ok(Self {
            side_a: parse_optional_number("side a", a)?,
            side_b: parse_optional_number("side b", b)?,
            side_c: parse_optional_number("side c", c)?,
            angle_a: parse_optional_number("angle A", aa)?,
            angle_b: parse_optional_number("angle B", bb)?,
            angle_c: parse_optional_number("angle C", cc)?,
        })
    }
}

/// A fully resolved triangle and the steps that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolvedTriangle {
    pub case: CaseKind,
    pub sides: [f64; 3],
    pub angles: [f64; 3],
    pub trace: Vec<Step>,
}

impl SolvedTriangle {
    pub fn side(&self, v: Vertex) -> f64 {
        self.sides[v.index()]
    }

    pub fn angle(&self, v: Vertex) -> f64 {
        self.angles[v.index()]
    }

    pub fn a(&self) -> f64 {
        self.sides[0]
    }

    pub fn b(&self) -> f64 {
        self.sides[1]
    }

    pub fn c(&self) -> f64 {
        self.sides[2]
    }

    pub fn longest_side(&self) -> f64 {
        self.sides.iter().copied().fold(0.0, f64::max)
    }
}
