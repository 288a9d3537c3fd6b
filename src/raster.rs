use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_filled_circle_mut;
use log::debug;

use crate::geometry::Size;
use crate::plot::{marker_radius, Scatter, Viewport};

/// Pixels kept clear around the plotted walk.
pub const MARGIN: usize = 20;

/// Draws every marker of `scatter`, in draw order, onto a fresh frame.
pub fn rasterize(scatter: &Scatter, size: Size, margin: usize) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(
        size.width as u32,
        size.height as u32,
        Rgba(scatter.background().to_rgba()),
    );

    let viewport = Viewport::fit(scatter.bounds(), size, margin);

    debug!("Rasterizing at {}, scale {:.3}", size, viewport.scale());

    for marker in scatter.markers() {
        draw_filled_circle_mut(
            &mut canvas,
            viewport.project(marker.x, marker.y),
            marker_radius(marker.size),
            Rgba(marker.color.to_rgba()),
        );
    }

    canvas
}
