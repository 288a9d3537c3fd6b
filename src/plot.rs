//! Backend-independent description of the walk scatter plot.

use std::f32::consts::PI;

use log::debug;

use crate::color::{Colormap, Rgb};
use crate::geometry::{Bounds, Position, Size};
use crate::path::Path;

/// Marker area of an ordinary path point.
pub const DOT_SIZE: f32 = 5.0;

/// How much larger (by area) the start and end markers are.
pub const EMPHASIS: f32 = 6.0;

#[derive(Debug, Clone, Copy)]
pub struct PlotStyle {
    pub dot_size: f32,
    pub emphasis: f32,
    pub background: Rgb,
    pub colormap: Colormap,
    pub start_color: Rgb,
    pub end_color: Rgb,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            dot_size: DOT_SIZE,
            emphasis: EMPHASIS,
            background: Rgb::WHITE,
            colormap: Colormap::default(),
            start_color: Rgb::GREEN,
            end_color: Rgb::RED,
        }
    }
}

impl PlotStyle {
    pub fn with_colormap(mut self, colormap: Colormap) -> Self {
        self.colormap = colormap;
        self
    }

    pub fn emphasized_size(&self) -> f32 {
        self.dot_size * self.emphasis
    }
}

/// A single dot. `size` is an area, not a radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub x: i64,
    pub y: i64,
    pub size: f32,
    pub color: Rgb,
}

impl Marker {
    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

#[derive(Debug, Clone)]
pub struct Scatter {
    points: Vec<Marker>,
    start: Marker,
    end: Option<Marker>,
    bounds: Bounds,
    background: Rgb,
}

impl Scatter {
    pub fn from_path(path: &Path, style: &PlotStyle) -> Self {
        let count = path.len();

        let points = path
            .iter()
            .map(|(i, p)| Marker {
                x: p.x,
                y: p.y,
                size: style.dot_size,
                color: style.colormap.for_index(i, count),
            })
            .collect();

        let start = Marker {
            x: path.start().x,
            y: path.start().y,
            size: style.emphasized_size(),
            color: style.start_color,
        };

        let end = path.last().map(|p| Marker {
            x: p.x,
            y: p.y,
            size: style.emphasized_size(),
            color: style.end_color,
        });

        let bounds = path.bounds();

        debug!("Scatter of {} points within {:?}", count, bounds);

        Self {
            points,
            start,
            end,
            bounds,
            background: style.background,
        }
    }

    pub fn points(&self) -> &[Marker] {
        &self.points
    }

    pub fn start(&self) -> &Marker {
        &self.start
    }

    pub fn end(&self) -> Option<&Marker> {
        self.end.as_ref()
    }

    /// All markers in draw order: path points, then start, then end.
    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.points
            .iter()
            .chain(std::iter::once(&self.start))
            .chain(self.end.iter())
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn background(&self) -> Rgb {
        self.background
    }
}

/// Maps walk coordinates onto a pixel frame with equal aspect and y up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    scale: f64,
    data_center: (f64, f64),
    pixel_center: (f64, f64),
}

impl Viewport {
    pub fn fit(bounds: Bounds, size: Size, margin: usize) -> Self {
        let drawable = |extent: usize| extent.saturating_sub(1 + 2 * margin).max(1) as f64;
        let span = |extent: u64| extent.max(1) as f64;

        let scale = (drawable(size.width) / span(bounds.width()))
            .min(drawable(size.height) / span(bounds.height()));

        Self {
            scale,
            data_center: (
                (bounds.min_x as f64 + bounds.max_x as f64) / 2.0,
                (bounds.min_y as f64 + bounds.max_y as f64) / 2.0,
            ),
            pixel_center: (
                size.width.saturating_sub(1) as f64 / 2.0,
                size.height.saturating_sub(1) as f64 / 2.0,
            ),
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn project(&self, x: i64, y: i64) -> (i32, i32) {
        let px = self.pixel_center.0 + (x as f64 - self.data_center.0) * self.scale;
        let py = self.pixel_center.1 - (y as f64 - self.data_center.1) * self.scale;

        (px.round() as i32, py.round() as i32)
    }
}

/// Pixel radius of a filled circle whose area is `size`.
pub fn marker_radius(size: f32) -> i32 {
    ((size / PI).sqrt().round() as i32).max(1)
}
