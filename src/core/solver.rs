use crate::core::classify::{classify, TriangleCase};
use crate::core::trace;
use crate::core::trig::{law_of_cosines_angle, law_of_cosines_side, sin_deg};
use crate::core::validate::check_solution;
use crate::domain::model::{SolvedTriangle, Step, TriangleSpec, Vertex};
use crate::utils::error::SolveError;

pub type SolveOutcome = std::result::Result<SolvedTriangle, SolveError>;

/// Solves a triangle from any three of its six elements. Angles are in degrees.
pub fn solve(
    side_a: Option<f64>,
    side_b: Option<f64>,
    side_c: Option<f64>,
    angle_a: Option<f64>,
    angle_b: Option<f64>,
    angle_c: Option<f64>,
) -> SolveOutcome {
    solve_spec(&TriangleSpec::new(
        side_a, side_b, side_c, angle_a, angle_b, angle_c,
    ))
}

pub fn solve_spec(spec: &TriangleSpec) -> SolveOutcome {
    let case = classify(spec)?;
    tracing::debug!(case = %case.kind(), "classified triangle input");
    solve_case(case)
}

/// Runs the handler for an already classified case and validates its result.
pub fn solve_case(case: TriangleCase) -> SolveOutcome {
    let mut trace = Vec::with_capacity(3);
    let (sides, angles) = match case {
        TriangleCase::Sss { sides } => solve_sss(sides, &mut trace)?,
        TriangleCase::Sas {
            included,
            adjacent,
            angle,
        } => solve_sas(included, adjacent, angle, &mut trace)?,
        TriangleCase::AngleSide {
            side,
            length,
            missing,
            angles,
        } => solve_angle_side(side, length, missing, angles, &mut trace)?,
    };

    if let Err(e) = check_solution(sides, angles) {
        tracing::debug!(error = %e, ?sides, ?angles, "candidate rejected");
        return Err(e);
    }

    Ok(SolvedTriangle {
        case: case.kind(),
        sides,
        angles,
        trace,
    })
}

fn angle_at(vertex: Vertex, sides: [f64; 3], trace: &mut Vec<Step>) -> Result<f64, SolveError> {
    let (p, q) = vertex.others();
    let context = format!("cos({})", vertex.angle_name());
    let value = law_of_cosines_angle(
        sides[p.index()],
        sides[q.index()],
        sides[vertex.index()],
        &context,
    )?;
    trace.push(trace::cosine_angle(vertex, (p, q), sides, value));
    Ok(value)
}

fn close_angle(
    target: Vertex,
    first: (Vertex, f64),
    second: (Vertex, f64),
    trace: &mut Vec<Step>,
) -> f64 {
    let value = 180.0 - first.1 - second.1;
    trace.push(trace::angle_sum(target, first, second, value));
    value
}

fn solve_sss(sides: [f64; 3], trace: &mut Vec<Step>) -> Result<([f64; 3], [f64; 3]), SolveError> {
    let a = angle_at(Vertex::A, sides, trace)?;
    let b = angle_at(Vertex::B, sides, trace)?;
    let c = close_angle(Vertex::C, (Vertex::A, a), (Vertex::B, b), trace);
    Ok((sides, [a, b, c]))
}

fn solve_sas(
    included: Vertex,
    adjacent: (f64, f64),
    angle: f64,
    trace: &mut Vec<Step>,
) -> Result<([f64; 3], [f64; 3]), SolveError> {
    let (p, q) = included.others();
    let (p_len, q_len) = adjacent;

    let opposite = law_of_cosines_side(p_len, q_len, angle, included.side_name())?;
    trace.push(trace::cosine_side(included, p_len, q_len, angle, opposite));

    let mut sides = [0.0; 3];
    sides[included.index()] = opposite;
    sides[p.index()] = p_len;
    sides[q.index()] = q_len;

    let mut angles = [0.0; 3];
    angles[included.index()] = angle;
    angles[p.index()] = angle_at(p, sides, trace)?;
    angles[q.index()] = close_angle(
        q,
        (included, angle),
        (p, angles[p.index()]),
        trace,
    );
    Ok((sides, angles))
}

fn solve_angle_side(
    side: Vertex,
    length: f64,
    missing: Vertex,
    known: [(Vertex, f64); 2],
    trace: &mut Vec<Step>,
) -> Result<([f64; 3], [f64; 3]), SolveError> {
    let mut angles = [0.0; 3];
    for (v, angle) in known {
        angles[v.index()] = angle;
    }
    let closing = close_angle(missing, known[0], known[1], trace);
    if closing <= 0.0 {
        return Err(SolveError::invalid(format!(
            "angles {} and {} already sum to {}°, leaving nothing for angle {}",
            known[0].0.angle_name(),
            known[1].0.angle_name(),
            known[0].1 + known[1].1,
            missing.angle_name()
        )));
    }
    angles[missing.index()] = closing;

    let known_angle = angles[side.index()];
    let ratio = length / sin_deg(known_angle);

    let mut sides = [0.0; 3];
    sides[side.index()] = length;
    let (p, q) = side.others();
    for target in [p, q] {
        let target_angle = angles[target.index()];
        let value = ratio * sin_deg(target_angle);
        sides[target.index()] = value;
        trace.push(trace::sine_side(
            target,
            target_angle,
            side,
            length,
            known_angle,
            value,
        ));
    }
    Ok((sides, angles))
}
