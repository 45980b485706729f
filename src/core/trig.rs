//! Degree-based trigonometry for the solver.
//!
//! Every public boundary of the crate speaks degrees; radians only exist inside these helpers.

use crate::utils::error::SolveError;

/// Relative slack under which a negative squared length is treated as rounding noise.
pub const SQUARE_EPSILON: f64 = 1e-9;

#[inline]
pub fn sin_deg(x: f64) -> f64 {
    x.to_radians().sin()
}

#[inline]
pub fn cos_deg(x: f64) -> f64 {
    x.to_radians().cos()
}

/// Arc cosine in degrees with the argument clamped to [-1, 1].
///
/// Clamping absorbs overshoot such as `1.0000000000000002` at straight-line triangles.
///
/// # Errors
/// `DomainError` when the argument is NaN, which only happens for inconsistent input
/// such as a zero-length side in the denominator.
pub fn acos_deg(x: f64, context: &str) -> Result<f64, SolveError> {
    if x.is_nan() {
        return Err(SolveError::domain(
            context,
            "inverse cosine argument is not a number",
        ));
    }
    Ok(x.clamp(-1.0, 1.0).acos().to_degrees())
}

/// Square root of a squared length that may dip just below zero through rounding.
///
/// # Errors
/// `DomainError` when the value is negative beyond `SQUARE_EPSILON * scale` or NaN.
pub fn sqrt_length(squared: f64, scale: f64, context: &str) -> Result<f64, SolveError> {
    if squared.is_nan() {
        return Err(SolveError::domain(context, "squared length is not a number"));
    }
    if squared < 0.0 {
        if squared < -SQUARE_EPSILON * scale.abs() {
            return Err(SolveError::domain(
                context,
                format!("squared length {} is negative", squared),
            ));
        }
        return Ok(0.0);
    }
    Ok(squared.sqrt())
}

/// Angle opposite `opposite`, given the two adjacent sides.
///
/// Lengths are divided by the longest of the three before squaring, so the result does not
/// depend on the magnitude of the triangle.
pub fn law_of_cosines_angle(
    adjacent_1: f64,
    adjacent_2: f64,
    opposite: f64,
    context: &str,
) -> Result<f64, SolveError> {
    let longest = adjacent_1.max(adjacent_2).max(opposite);
    let (p, q, r) = (adjacent_1 / longest, adjacent_2 / longest, opposite / longest);
    let cos = (p * p + q * q - r * r) / (2.0 * p * q);
    acos_deg(cos, context)
}

/// Side opposite `angle` (degrees), given the two sides that enclose it.
///
/// # Errors
/// `DomainError` when the squared length is negative beyond rounding noise or NaN.
pub fn law_of_cosines_side(
    adjacent_1: f64,
    adjacent_2: f64,
    angle: f64,
    context: &str,
) -> Result<f64, SolveError> {
    let longest = adjacent_1.max(adjacent_2);
    let (p, q) = (adjacent_1 / longest, adjacent_2 / longest);
    let scale = p * p + q * q;
    let squared = scale - 2.0 * p * q * cos_deg(angle);
    Ok(longest * sqrt_length(squared, scale, context)?)
}
