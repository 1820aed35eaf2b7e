//! Static scenes drawn for each mood.
//!
//! Layouts are authored against an 800x300 reference surface and scaled to
//! the real surface size. Every scene except the rain is deterministic.

use std::f32::consts::TAU;

use rand::Rng;

use crate::mood::Mood;
use crate::surface::{Point, Rgb, Surface};

pub type SceneFn = fn(&mut dyn Surface);

pub const REFERENCE_WIDTH: f32 = 800.0;
pub const REFERENCE_HEIGHT: f32 = 300.0;

pub const HAPPY_BACKGROUND: Rgb = Rgb(255, 253, 231);
pub const SAD_BACKGROUND: Rgb = Rgb(220, 230, 240);
pub const NEUTRAL_BACKGROUND: Rgb = Rgb(235, 245, 250);

const SUN: Rgb = Rgb(255, 191, 0);
const CLOUD: Rgb = Rgb(169, 169, 169);
const RAIN: Rgb = Rgb(150, 150, 190);
const WAVE: Rgb = Rgb(100, 149, 237);

pub const RAY_COUNT: usize = 12;
pub const RAIN_DROPS: usize = 30;
pub const WAVE_COUNT: usize = 5;

// (center x, center y, width, height) in reference coordinates.
const CLOUDS: [(f32, f32, f32, f32); 3] = [
    (650.0, 80.0, 100.0, 60.0),
    (700.0, 100.0, 80.0, 50.0),
    (750.0, 90.0, 90.0, 55.0),
];

// Rain drop offset from its top end, in reference coordinates.
const DROP_DX: f32 = -5.0;
const DROP_DY: f32 = 15.0;

/// Adding a mood means adding a row here.
const SCENES: [(Mood, SceneFn); 3] = [
    (Mood::Happy, draw_happy as SceneFn),
    (Mood::Sad, draw_sad as SceneFn),
    (Mood::Neutral, draw_neutral as SceneFn),
];

pub fn scene_for(mood: Mood) -> SceneFn {
    SCENES
        .iter()
        .find(|(m, _)| *m == mood)
        .map(|(_, scene)| *scene)
        .unwrap_or(draw_neutral)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    /// Containment with a small tolerance for float rounding at the edges.
    pub fn contains(&self, p: Point) -> bool {
        const EPS: f32 = 1e-3;
        p.x >= self.left - EPS
            && p.x <= self.right + EPS
            && p.y >= self.top - EPS
            && p.y <= self.bottom + EPS
    }
}

#[derive(Debug, Clone, Copy)]
struct Scale {
    x: f32,
    y: f32,
}

impl Scale {
    fn of(surface: &dyn Surface) -> Self {
        Self {
            x: surface.width() / REFERENCE_WIDTH,
            y: surface.height() / REFERENCE_HEIGHT,
        }
    }

    /// Uniform factor for radii and lengths so shapes keep their proportions.
    fn uniform(&self) -> f32 {
        self.x.min(self.y)
    }

    fn point(&self, x: f32, y: f32) -> Point {
        Point::new(x * self.x, y * self.y)
    }
}

/// Region every rain segment lies in, for a surface of the given size.
pub fn rain_region(width: f32, height: f32) -> Rect {
    let sx = width / REFERENCE_WIDTH;
    let sy = height / REFERENCE_HEIGHT;
    Rect {
        left: 600.0 * sx,
        top: 120.0 * sy,
        right: 800.0 * sx,
        bottom: 200.0 * sy,
    }
}

pub fn draw_happy(surface: &mut dyn Surface) {
    let scale = Scale::of(surface);
    let s = scale.uniform();
    let center = scale.point(700.0, 100.0);

    surface.background(HAPPY_BACKGROUND);

    surface.fill(Some(SUN));
    surface.stroke(None, 0.0);
    surface.circle(center, 80.0 * s);

    surface.stroke(Some(SUN), 3.0 * s);
    for i in 0..RAY_COUNT {
        let angle = i as f32 * TAU / RAY_COUNT as f32;
        let (sin, cos) = angle.sin_cos();
        let inner = Point::new(center.x + cos * 45.0 * s, center.y + sin * 45.0 * s);
        let outer = Point::new(center.x + cos * 60.0 * s, center.y + sin * 60.0 * s);
        surface.line(inner, outer);
    }
}

pub fn draw_sad(surface: &mut dyn Surface) {
    let scale = Scale::of(surface);
    let s = scale.uniform();

    surface.background(SAD_BACKGROUND);

    surface.stroke(None, 0.0);
    surface.fill(Some(CLOUD));
    for (x, y, w, h) in CLOUDS {
        surface.ellipse(scale.point(x, y), w * s, h * s);
    }

    let region = rain_region(surface.width(), surface.height());
    let dx = DROP_DX * s;
    let dy = DROP_DY * s;
    // Start points are drawn so the whole segment stays inside the region.
    let x_range = (region.left - dx)..=region.right;
    let y_range = region.top..=(region.bottom - dy);

    let mut rng = rand::thread_rng();
    surface.stroke(Some(RAIN), 2.0 * s);
    for _ in 0..RAIN_DROPS {
        let x = rng.gen_range(x_range.clone());
        let y = rng.gen_range(y_range.clone());
        surface.line(Point::new(x, y), Point::new(x + dx, y + dy));
    }
}

pub fn draw_neutral(surface: &mut dyn Surface) {
    let scale = Scale::of(surface);

    surface.background(NEUTRAL_BACKGROUND);

    surface.fill(None);
    surface.stroke(Some(WAVE), 2.0 * scale.uniform());
    for i in 0..WAVE_COUNT {
        let phase = i as f32;
        let baseline = 100.0 + phase * 20.0;
        let points: Vec<Point> = (600..800)
            .step_by(10)
            .map(|x| {
                let x = x as f32;
                scale.point(x, baseline + (x * 0.05 + phase).sin() * 10.0)
            })
            .collect();
        surface.polyline(&points);
    }
}
