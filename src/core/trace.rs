//! Derivation step records. Nothing here formats numbers; see `Step::substituted`.

use crate::domain::model::{Element, Law, Step, Vertex};

/// Angle at `target` from the three sides via the Law of Cosines.
pub fn cosine_angle(target: Vertex, adjacent: (Vertex, Vertex), sides: [f64; 3], value: f64) -> Step {
    let (p, q) = adjacent;
    let (t, p_n, q_n) = (target.side_name(), p.side_name(), q.side_name());
    let (pv, qv, tv) = (sides[p.index()], sides[q.index()], sides[target.index()]);
    Step {
        target: Element::Angle(target),
        law: Law::LawOfCosines,
        formula: format!(
            "cos({T}) = ({p}² + {q}² − {t}²) / (2·{p}·{q})",
            T = target.angle_name(),
            p = p_n,
            q = q_n,
            t = t
        ),
        pattern: format!(
            "{T} = acos(({{}}² + {{}}² − {{}}²) / (2·{{}}·{{}}))",
            T = target.angle_name()
        ),
        operands: vec![pv, qv, tv, pv, qv],
        value,
    }
}

/// Side opposite `target` from two sides and their included angle via the Law of Cosines.
pub fn cosine_side(target: Vertex, p_len: f64, q_len: f64, included_deg: f64, value: f64) -> Step {
    let (p, q) = target.others();
    Step {
        target: Element::Side(target),
        law: Law::LawOfCosines,
        formula: format!(
            "{t} = √({p}² + {q}² − 2·{p}·{q}·cos({T}))",
            t = target.side_name(),
            p = p.side_name(),
            q = q.side_name(),
            T = target.angle_name()
        ),
        pattern: format!(
            "{t} = √({{}}² + {{}}² − 2·{{}}·{{}}·cos({{}}°))",
            t = target.side_name()
        ),
        operands: vec![p_len, q_len, p_len, q_len, included_deg],
        value,
    }
}

/// Angle at `target` closing the triangle: 180° minus the two known angles.
pub fn angle_sum(target: Vertex, first: (Vertex, f64), second: (Vertex, f64), value: f64) -> Step {
    Step {
        target: Element::Angle(target),
        law: Law::AngleSum,
        formula: format!(
            "{T} = 180° − {X} − {Y}",
            T = target.angle_name(),
            X = first.0.angle_name(),
            Y = second.0.angle_name()
        ),
        pattern: format!("{T} = 180° − {{}}° − {{}}°", T = target.angle_name()),
        operands: vec![first.1, second.1],
        value,
    }
}

/// Side opposite `target` from a known side/angle pair via the Law of Sines.
pub fn sine_side(
    target: Vertex,
    target_angle: f64,
    known: Vertex,
    known_side: f64,
    known_angle: f64,
    value: f64,
) -> Step {
    Step {
        target: Element::Side(target),
        law: Law::LawOfSines,
        formula: format!(
            "{t} = {k}·sin({T}) / sin({K})",
            t = target.side_name(),
            k = known.side_name(),
            T = target.angle_name(),
            K = known.angle_name()
        ),
        pattern: format!("{t} = {{}}·sin({{}}°) / sin({{}}°)", t = target.side_name()),
        operands: vec![known_side, target_angle, known_angle],
        value,
    }
}
