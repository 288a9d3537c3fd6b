use super::Renderer;
use crate::geometry::Size;
use crate::plot::Scatter;
use crate::raster::{rasterize, MARGIN};

use image::RgbaImage;
use log::info;
use std::path::PathBuf;

/// Image file renderer that saves the final plot to disk
pub struct ImageRenderer {
    output_path: PathBuf,
    frame_size: Size,
    final_image: Option<RgbaImage>,
}

impl ImageRenderer {
    pub fn new(output_path: PathBuf) -> Self {
        Self {
            output_path,
            frame_size: Size::uniform(0),
            final_image: None,
        }
    }

    pub fn final_image(&self) -> Option<&RgbaImage> {
        self.final_image.as_ref()
    }
}

impl Renderer for ImageRenderer {
    type Error = String;

    fn initialize(&mut self, frame_size: Size) -> Result<(), Self::Error> {
        let fits = |extent: usize| extent > 0 && u32::try_from(extent).is_ok();

        if !fits(frame_size.width) || !fits(frame_size.height) || frame_size.area().is_none() {
            return Err(format!("Invalid frame size {}", frame_size));
        }

        self.frame_size = frame_size;

        Ok(())
    }

    fn finalize(&mut self, scatter: &Scatter) -> Result<(), Self::Error> {
        let image = rasterize(scatter, self.frame_size, MARGIN);

        image
            .save(&self.output_path)
            .map_err(|e| format!("Failed to save image: {}", e))?;

        info!("Saved plot to {}", self.output_path.display());
        self.final_image = Some(image);

        Ok(())
    }
}
