use crate::domain::model::{CaseKind, TriangleSpec, Vertex};
use crate::utils::error::SolveError;

/// A solvable input pattern, carrying only the values its handler needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriangleCase {
    /// Three sides, indexed by `Vertex::index`.
    Sss { sides: [f64; 3] },
    /// Two sides and the angle at `included`, the vertex between them.
    /// `adjacent` holds the two side lengths in `included.others()` order.
    Sas {
        included: Vertex,
        adjacent: (f64, f64),
        angle: f64,
    },
    /// One side and two angles; `missing` is the vertex whose angle is unknown.
    AngleSide {
        side: Vertex,
        length: f64,
        missing: Vertex,
        angles: [(Vertex, f64); 2],
    },
}

impl TriangleCase {
    pub fn kind(&self) -> CaseKind {
        match self {
            TriangleCase::Sss { .. } => CaseKind::Sss,
            TriangleCase::Sas { .. } => CaseKind::Sas,
            // The known side lies between the known angles exactly when it faces the unknown one.
            TriangleCase::AngleSide { side, missing, .. } if side == missing => CaseKind::Asa,
            TriangleCase::AngleSide { .. } => CaseKind::Aas,
        }
    }
}

fn known(value: Option<f64>) -> Option<f64> {
    value.filter(|x| *x > 0.0)
}

fn check_domain(spec: &TriangleSpec) -> Result<(), SolveError> {
    for v in Vertex::ALL {
        if let Some(side) = spec.side(v) {
            if !side.is_finite() {
                return Err(SolveError::domain(
                    format!("side {}", v.side_name()),
                    format!("{} is not a finite length", side),
                ));
            }
        }
        if let Some(angle) = spec.angle(v) {
            if !angle.is_finite() || angle >= 180.0 {
                return Err(SolveError::domain(
                    format!("angle {}", v.angle_name()),
                    format!("{}° is outside the open interval (0°, 180°)", angle),
                ));
            }
        }
    }
    Ok(())
}

/// Routes a spec to exactly one solvable case.
///
/// Values that are absent or not strictly positive count as unknown.
pub fn classify(spec: &TriangleSpec) -> Result<TriangleCase, SolveError> {
    check_domain(spec)?;

    let sides: Vec<(Vertex, f64)> = Vertex::ALL
        .iter()
        .filter_map(|&v| known(spec.side(v)).map(|x| (v, x)))
        .collect();
    let angles: Vec<(Vertex, f64)> = Vertex::ALL
        .iter()
        .filter_map(|&v| known(spec.angle(v)).map(|x| (v, x)))
        .collect();

    match (sides.as_slice(), angles.as_slice()) {
        ([(_, a), (_, b), (_, c)], []) => Ok(TriangleCase::Sss { sides: [*a, *b, *c] }),
        ([(p, p_len), (q, q_len)], [(x, angle)]) => {
            let included = p.third(*q);
            if *x != included {
                return Err(SolveError::insufficient(format!(
                    "angle {} is not between sides {} and {}; the side-side-angle case is ambiguous and not supported",
                    x.angle_name(),
                    p.side_name(),
                    q.side_name()
                )));
            }
            Ok(TriangleCase::Sas {
                included,
                adjacent: (*p_len, *q_len),
                angle: *angle,
            })
        }
        ([(side, length)], [(x, x_angle), (y, y_angle)]) => Ok(TriangleCase::AngleSide {
            side: *side,
            length: *length,
            missing: x.third(*y),
            angles: [(*x, *x_angle), (*y, *y_angle)],
        }),
        _ => Err(SolveError::insufficient(format!(
            "{} side(s) and {} angle(s) given",
            sides.len(),
            angles.len()
        ))),
    }
}
