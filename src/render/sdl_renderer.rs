use super::{RenderEvent, Renderer};
use crate::geometry::Size;
use crate::plot::Scatter;
use crate::raster::{rasterize, MARGIN};

use log::{debug, info, trace};
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;
use sdl2::EventPump;
use std::time::{Duration, Instant};

/// SDL2 window that shows the finished walk and waits for the viewer
pub struct SdlRenderer {
    canvas: Canvas<Window>,
    events: EventPump,
    frame_size: Size,
    hold: Option<Duration>,
    should_quit: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct SdlConfig {
    pub window_size: Size,
    pub vsync: bool,
    pub hold: Option<Duration>,
}

fn is_quit(event: &Event) -> bool {
    matches!(
        event,
        Event::Quit { .. }
            | Event::KeyDown {
                keycode: Some(Keycode::Escape),
                ..
            }
    )
}

/// Event pump timeout for `left`, at least 1ms and saturating at `u32::MAX`.
fn timeout_millis(left: Duration) -> u32 {
    left.as_millis().clamp(1, u32::MAX as u128) as u32
}

fn is_expose(event: &Event) -> bool {
    matches!(
        event,
        Event::Window {
            win_event: WindowEvent::Exposed | WindowEvent::SizeChanged(..),
            ..
        }
    )
}

impl SdlRenderer {
    pub fn new(config: &SdlConfig) -> Result<Self, String> {
        let context = sdl2::init()?;
        let video = context.video()?;

        let window = video
            .window(
                "Random Walk",
                config.window_size.width as u32,
                config.window_size.height as u32,
            )
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        let mut builder = window.into_canvas().target_texture();

        if config.vsync {
            builder = builder.present_vsync();
        }

        let canvas = builder.build().map_err(|e| e.to_string())?;
        let events = context.event_pump()?;

        Ok(Self {
            canvas,
            events,
            frame_size: config.window_size,
            hold: config.hold,
            should_quit: false,
        })
    }

    fn handle_events(&mut self) {
        for event in self.events.poll_iter() {
            trace!("{:?}", event);

            if is_quit(&event) {
                self.should_quit = true;
            }
        }
    }

    fn upload(&self, texture: &mut Texture, scatter: &Scatter) -> Result<(), String> {
        let frame = rasterize(scatter, self.frame_size, MARGIN);
        let row = self.frame_size.width * 4;

        texture.with_lock(None, |buffer: &mut [u8], pitch: usize| {
            for (y, pixels) in frame.as_raw().chunks_exact(row).enumerate() {
                let offset = y * pitch;
                buffer[offset..offset + row].copy_from_slice(pixels);
            }
        })
    }

    fn present(&mut self, texture: &Texture) -> Result<(), String> {
        self.canvas.clear();
        self.canvas.copy(texture, None, None)?;
        self.canvas.present();

        Ok(())
    }

    /// Blocks until the window is closed or the hold time runs out.
    fn wait(&mut self, texture: &Texture) -> Result<(), String> {
        // A hold too long to represent waits like no hold at all
        let deadline = self.hold.and_then(|hold| Instant::now().checked_add(hold));

        match (deadline, self.hold) {
            (Some(_), Some(hold)) => info!("Holding the plot for {:.1} seconds", hold.as_secs_f32()),
            _ => info!("Close the window or press Escape to exit"),
        }

        while !self.should_quit {
            let event = match deadline {
                Some(deadline) => {
                    let left = deadline.saturating_duration_since(Instant::now());

                    if left.is_zero() {
                        break;
                    }

                    self.events.wait_event_timeout(timeout_millis(left))
                }
                None => Some(self.events.wait_event()),
            };

            match event {
                Some(event) if is_quit(&event) => self.should_quit = true,
                Some(event) if is_expose(&event) => self.present(texture)?,
                _ => {}
            }
        }

        Ok(())
    }
}

impl Renderer for SdlRenderer {
    type Error = String;

    fn initialize(&mut self, frame_size: Size) -> Result<(), Self::Error> {
        if frame_size != self.frame_size {
            return Err(format!(
                "Window is {} but frame is {}",
                self.frame_size, frame_size
            ));
        }

        self.canvas.clear();
        self.canvas.present();

        Ok(())
    }

    fn handle_event(&mut self, event: &RenderEvent) -> Result<(), Self::Error> {
        if let RenderEvent::Progress { done, total } = event {
            trace!("progress {}/{}", done, total);
        }

        self.handle_events();
        Ok(())
    }

    fn should_quit(&mut self) -> bool {
        self.should_quit
    }

    fn finalize(&mut self, scatter: &Scatter) -> Result<(), Self::Error> {
        if self.should_quit {
            return Ok(());
        }

        let texture_creator = self.canvas.texture_creator();
        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGBA32,
                self.frame_size.width as u32,
                self.frame_size.height as u32,
            )
            .map_err(|e| e.to_string())?;

        self.upload(&mut texture, scatter)?;
        self.present(&texture)?;

        debug!("Plot presented");

        self.wait(&texture)
    }
}
