//! Drawing surface used by the mood visualizer.
//!
//! `Surface` is the small immediate-mode API the scenes draw through: a
//! current fill and stroke plus a handful of primitives. `Canvas` is the
//! production surface; it keeps a display list of everything drawn since
//! the last `clear` and can export it as an SVG document.

use std::fmt::Write;

use crate::error::VisualizerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    fn css(&self) -> String {
        format!("rgb({},{},{})", self.0, self.1, self.2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub fill: Option<Rgb>,
    pub stroke: Option<Rgb>,
    pub stroke_weight: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: Some(Rgb(255, 255, 255)),
            stroke: Some(Rgb(0, 0, 0)),
            stroke_weight: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Background(Rgb),
    Circle {
        center: Point,
        diameter: f32,
        style: Style,
    },
    Ellipse {
        center: Point,
        width: f32,
        height: f32,
        style: Style,
    },
    Line {
        from: Point,
        to: Point,
        style: Style,
    },
    Polyline {
        points: Vec<Point>,
        style: Style,
    },
}

pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    /// Wipes everything drawn so far. Called once at the start of each redraw.
    fn clear(&mut self);

    fn background(&mut self, color: Rgb);
    fn fill(&mut self, color: Option<Rgb>);
    fn stroke(&mut self, color: Option<Rgb>, weight: f32);

    fn circle(&mut self, center: Point, diameter: f32);
    fn ellipse(&mut self, center: Point, width: f32, height: f32);
    fn line(&mut self, from: Point, to: Point);
    fn polyline(&mut self, points: &[Point]);
}

/// Fixed-size retained-mode surface.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    style: Style,
    ops: Vec<DrawOp>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Result<Self, VisualizerError> {
        if width == 0 || height == 0 {
            return Err(VisualizerError::Initialization(format!(
                "cannot allocate a {}x{} surface",
                width, height
            )));
        }
        Ok(Self {
            width,
            height,
            style: Style::default(),
            ops: Vec::new(),
        })
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn is_blank(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        );
        for op in &self.ops {
            let _ = match op {
                DrawOp::Background(color) => writeln!(
                    out,
                    r#"  <rect width="100%" height="100%" fill="{}"/>"#,
                    color.css()
                ),
                DrawOp::Circle {
                    center,
                    diameter,
                    style,
                } => writeln!(
                    out,
                    r#"  <circle cx="{:.2}" cy="{:.2}" r="{:.2}"{}/>"#,
                    center.x,
                    center.y,
                    diameter / 2.0,
                    style_attrs(style)
                ),
                DrawOp::Ellipse {
                    center,
                    width,
                    height,
                    style,
                } => writeln!(
                    out,
                    r#"  <ellipse cx="{:.2}" cy="{:.2}" rx="{:.2}" ry="{:.2}"{}/>"#,
                    center.x,
                    center.y,
                    width / 2.0,
                    height / 2.0,
                    style_attrs(style)
                ),
                DrawOp::Line { from, to, style } => writeln!(
                    out,
                    r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}"{}/>"#,
                    from.x,
                    from.y,
                    to.x,
                    to.y,
                    style_attrs(style)
                ),
                DrawOp::Polyline { points, style } => {
                    let coords = points
                        .iter()
                        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
                        .collect::<Vec<_>>()
                        .join(" ");
                    writeln!(
                        out,
                        r#"  <polyline points="{}"{}/>"#,
                        coords,
                        style_attrs(style)
                    )
                }
            };
        }
        out.push_str("</svg>\n");
        out
    }
}

fn style_attrs(style: &Style) -> String {
    let fill = style.fill.map(|c| c.css()).unwrap_or_else(|| "none".into());
    match style.stroke {
        Some(color) => format!(
            r#" fill="{}" stroke="{}" stroke-width="{:.1}""#,
            fill,
            color.css(),
            style.stroke_weight
        ),
        None => format!(r#" fill="{}" stroke="none""#, fill),
    }
}

impl Surface for Canvas {
    fn width(&self) -> f32 {
        self.width as f32
    }

    fn height(&self) -> f32 {
        self.height as f32
    }

    fn clear(&mut self) {
        self.ops.clear();
    }

    fn background(&mut self, color: Rgb) {
        // A background covers everything beneath it.
        self.ops.clear();
        self.ops.push(DrawOp::Background(color));
    }

    fn fill(&mut self, color: Option<Rgb>) {
        self.style.fill = color;
    }

    fn stroke(&mut self, color: Option<Rgb>, weight: f32) {
        self.style.stroke = color;
        self.style.stroke_weight = weight;
    }

    fn circle(&mut self, center: Point, diameter: f32) {
        self.ops.push(DrawOp::Circle {
            center,
            diameter,
            style: self.style,
        });
    }

    fn ellipse(&mut self, center: Point, width: f32, height: f32) {
        self.ops.push(DrawOp::Ellipse {
            center,
            width,
            height,
            style: self.style,
        });
    }

    fn line(&mut self, from: Point, to: Point) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            style: self.style,
        });
    }

    fn polyline(&mut self, points: &[Point]) {
        if points.is_empty() {
            return;
        }
        self.ops.push(DrawOp::Polyline {
            points: points.to_vec(),
            style: self.style,
        });
    }
}
