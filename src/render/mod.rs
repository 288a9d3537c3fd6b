pub mod events;

#[cfg(feature = "visual")]
pub mod sdl_renderer;

#[cfg(feature = "image-output")]
pub mod image_renderer;

pub use events::RenderEvent;

use crate::geometry::Size;
use crate::plot::Scatter;

/// Core trait for presenting a finished walk
pub trait Renderer {
    type Error;

    /// Prepare a frame of the given size
    fn initialize(&mut self, frame_size: Size) -> Result<(), Self::Error>;

    /// Handle an event emitted while the walk is generated
    fn handle_event(&mut self, event: &RenderEvent) -> Result<(), Self::Error> {
        let _ = event;
        Ok(())
    }

    /// Check if the user wants to quit (for interactive renderers)
    fn should_quit(&mut self) -> bool {
        false
    }

    /// Draw the complete scatter plot (e.g. save to file, show in a window)
    fn finalize(&mut self, scatter: &Scatter) -> Result<(), Self::Error>;
}
