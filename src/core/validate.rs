use crate::domain::model::Vertex;
use crate::utils::error::SolveError;

/// Tolerance on the angle sum of a solved triangle, in degrees.
pub const ANGLE_SUM_TOLERANCE: f64 = 1e-6;

/// Strict triangle inequality on all three side pairs.
pub fn check_triangle_inequality(sides: [f64; 3]) -> Result<(), SolveError> {
    for v in Vertex::ALL {
        let (p, q) = v.others();
        let (pv, qv, opposite) = (sides[p.index()], sides[q.index()], sides[v.index()]);
        let holds = pv + qv > opposite;
        if !holds {
            return Err(SolveError::invalid(format!(
                "sides do not satisfy triangle inequality ({} + {} = {} is not greater than {} = {})",
                p.side_name(),
                q.side_name(),
                pv + qv,
                v.side_name(),
                opposite
            )));
        }
    }
    Ok(())
}

/// Checks every invariant a solved triangle must hold.
pub fn check_solution(sides: [f64; 3], angles: [f64; 3]) -> Result<(), SolveError> {
    for v in Vertex::ALL {
        let side = sides[v.index()];
        if !side.is_finite() || side <= 0.0 {
            return Err(SolveError::invalid(format!(
                "side {} = {} is not a positive length",
                v.side_name(),
                side
            )));
        }
    }

    check_triangle_inequality(sides)?;

    for v in Vertex::ALL {
        let angle = angles[v.index()];
        let inside = angle > 0.0 && angle < 180.0;
        if !inside {
            return Err(SolveError::invalid(format!(
                "angle {} = {}° is outside (0°, 180°)",
                v.angle_name(),
                angle
            )));
        }
    }

    let sum: f64 = angles.iter().sum();
    if (sum - 180.0).abs() > ANGLE_SUM_TOLERANCE {
        return Err(SolveError::invalid(format!(
            "angles sum to {}° instead of 180°",
            sum
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_inequality() {
        assert!(check_triangle_inequality([3.0, 4.0, 5.0]).is_ok());
        let err = check_triangle_inequality([1.0, 1.0, 3.0]).unwrap_err();
        assert!(err.to_string().contains("a + b = 2 is not greater than c = 3"));
        // Degenerate straight line fails the strict check.
        assert!(check_triangle_inequality([1.0, 2.0, 3.0]).is_err());
        assert!(check_triangle_inequality([f64::NAN, 2.0, 3.0]).is_err());
    }

    #[test]
    fn test_solution_invariants() {
        assert!(check_solution([3.0, 4.0, 5.0], [36.869_897_645_844_02, 53.130_102_354_155_98, 90.0]).is_ok());
        assert!(check_solution([-3.0, 4.0, 5.0], [30.0, 60.0, 90.0]).is_err());
        assert!(check_solution([3.0, 4.0, 5.0], [0.0, 90.0, 90.0]).is_err());
        assert!(check_solution([3.0, 4.0, 5.0], [30.0, 60.0, 91.0]).is_err());
    }
}
