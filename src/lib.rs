pub mod color;
pub mod geometry;
pub mod path;
pub mod plot;
pub mod render;
pub mod walk;

#[cfg(feature = "image-output")]
pub mod raster;

#[cfg(feature = "cli")]
pub mod app;

#[cfg(feature = "cli")]
pub mod cli;

pub use geometry::{Bounds, Position, Size, ORIGIN};
pub use path::Path;
pub use walk::Walk;
