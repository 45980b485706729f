use crate::domain::model::{SolvedTriangle, Vertex};
use crate::domain::ports::Render;
use crate::render::layout::{Layout, Point};
use crate::utils::error::Result;
use std::fmt::Write;

const TITLE: &str = "Triangle Visualization (To Scale)";
const TITLE_BAND: f64 = 40.0;

/// Renders a solved triangle as a standalone SVG document, drawn to scale.
#[derive(Debug, Clone)]
pub struct SvgDiagram {
    /// Width of the drawing area in pixels; the height follows the triangle's aspect ratio.
    pub width_px: f64,
}

impl Default for SvgDiagram {
    fn default() -> Self {
        Self { width_px: 800.0 }
    }
}

struct Canvas {
    scale: f64,
    min_x: f64,
    max_y: f64,
}

impl Canvas {
    fn to_px(&self, p: Point) -> (f64, f64) {
        (
            (p.x - self.min_x) * self.scale,
            (self.max_y - p.y) * self.scale + TITLE_BAND,
        )
    }
}

fn vertex_color(v: Vertex) -> &'static str {
    match v {
        Vertex::A => "red",
        Vertex::B => "green",
        Vertex::C => "blue",
    }
}

impl Render for SvgDiagram {
    fn render(&self, solved: &SolvedTriangle) -> Result<String> {
        let layout = Layout::new(solved);
        let bounds = layout.bounds;
        let canvas = Canvas {
            scale: self.width_px / bounds.width(),
            min_x: bounds.min_x,
            max_y: bounds.max_y,
        };
        let height = bounds.height() * canvas.scale + TITLE_BAND;
        let offset = layout.label_offset * canvas.scale;

        let mut svg = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.0}" height="{h:.0}" viewBox="0 0 {w:.2} {h:.2}">"#,
            w = self.width_px,
            h = height
        );
        let _ = writeln!(
            svg,
            r#"  <text x="{:.2}" y="26" text-anchor="middle" font-size="20" font-weight="bold">{}</text>"#,
            self.width_px / 2.0,
            TITLE
        );

        let points: Vec<String> = layout
            .vertices
            .iter()
            .map(|&p| {
                let (x, y) = canvas.to_px(p);
                format!("{:.2},{:.2}", x, y)
            })
            .collect();
        let _ = writeln!(
            svg,
            r#"  <polygon points="{}" fill="none" stroke="blue" stroke-width="2"/>"#,
            points.join(" ")
        );

        for v in Vertex::ALL {
            let (x, y) = canvas.to_px(layout.vertex(v));
            // C sits on the baseline, so its label goes underneath.
            let label_y = if v == Vertex::C { y + offset + 14.0 } else { y - offset };
            let _ = writeln!(
                svg,
                r#"  <circle cx="{x:.2}" cy="{y:.2}" r="6" fill="{}"/>"#,
                vertex_color(v)
            );
            let _ = writeln!(
                svg,
                r#"  <text x="{x:.2}" y="{label_y:.2}" text-anchor="middle" font-size="14" font-weight="bold">{} ({:.1}°)</text>"#,
                v.angle_name(),
                solved.angle(v)
            );
        }

        for v in Vertex::ALL {
            let (x, y) = canvas.to_px(layout.side_midpoint(v));
            let (x, y) = match v {
                Vertex::A => (x, y + offset + 12.0),
                Vertex::B => (x - offset, y),
                Vertex::C => (x, y - offset),
            };
            let anchor = if v == Vertex::B { "end" } else { "middle" };
            let _ = writeln!(
                svg,
                r#"  <text x="{x:.2}" y="{y:.2}" text-anchor="{anchor}" font-size="12" fill="red">{} = {:.2}</text>"#,
                v.side_name(),
                solved.side(v)
            );
        }

        svg.push_str("</svg>\n");
        tracing::debug!(bytes = svg.len(), "rendered svg diagram");
        Ok(svg)
    }
}
