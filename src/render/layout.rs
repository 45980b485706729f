use crate::domain::model::{SolvedTriangle, Vertex};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Axis-aligned view box in figure coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Scaled placement of a solved triangle.
///
/// C sits at the origin, B on the positive x axis at distance `a`, and A at distance `b`
/// from C rotated by angle C.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub vertices: [Point; 3],
    pub label_offset: f64,
    pub bounds: Bounds,
}

impl Layout {
    pub fn new(solved: &SolvedTriangle) -> Self {
        let (a, b) = (solved.a(), solved.b());
        let angle_c = solved.angle(Vertex::C).to_radians();

        let c_point = Point::new(0.0, 0.0);
        let b_point = Point::new(a, 0.0);
        let a_point = Point::new(b * angle_c.cos(), b * angle_c.sin());

        let longest = solved.longest_side();
        let margin = longest * 0.2;
        let bounds = Bounds {
            min_x: a_point.x.min(0.0) - margin,
            min_y: -margin,
            max_x: a.max(a_point.x) + margin,
            max_y: a_point.y + margin,
        };

        Self {
            vertices: [a_point, b_point, c_point],
            label_offset: longest * 0.05,
            bounds,
        }
    }

    pub fn vertex(&self, v: Vertex) -> Point {
        self.vertices[v.index()]
    }

    /// Midpoint of the side opposite `v`, where that side's label goes.
    pub fn side_midpoint(&self, v: Vertex) -> Point {
        let (p, q) = v.others();
        self.vertex(p).midpoint(self.vertex(q))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::solver::solve;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_layout_reproduces_side_lengths() {
        let solved = solve(Some(8.0), Some(10.0), Some(12.0), None, None, None).unwrap();
        let layout = Layout::new(&solved);

        let (a, b, c) = (
            layout.vertex(Vertex::A),
            layout.vertex(Vertex::B),
            layout.vertex(Vertex::C),
        );
        assert_eq!(c, Point::new(0.0, 0.0));
        assert_abs_diff_eq!(b.x, 8.0);
        assert_abs_diff_eq!(c.distance(b), 8.0, epsilon = 1e-9);
        assert_abs_diff_eq!(c.distance(a), 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(a.distance(b), 12.0, epsilon = 1e-9);
        assert!(a.y > 0.0);
    }

    #[test]
    fn test_layout_bounds_and_midpoints() {
        let solved = solve(Some(3.0), Some(4.0), Some(5.0), None, None, None).unwrap();
        let layout = Layout::new(&solved);

        assert_abs_diff_eq!(layout.label_offset, 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(layout.bounds.min_y, -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(layout.bounds.max_y, 5.0, epsilon = 1e-9);
        let mid = layout.side_midpoint(Vertex::A);
        assert_abs_diff_eq!(mid.x, 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(mid.y, 0.0, epsilon = 1e-12);
    }
}
