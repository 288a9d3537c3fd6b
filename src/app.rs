use crate::cli::AppConfig;
use crate::plot::{PlotStyle, Scatter};
use crate::render::image_renderer::ImageRenderer;
use crate::render::{RenderEvent, Renderer};
use crate::walk::Walk;

#[cfg(feature = "visual")]
use crate::render::sdl_renderer::{SdlConfig, SdlRenderer};

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use rand::rngs::OsRng;
use rand::Rng;
use std::time::Duration;

/// Steps taken between progress updates.
const BATCH: usize = 10_000;

pub type BoxedRenderer = Box<dyn Renderer<Error = String>>;

pub struct WalkApp {
    config: AppConfig,
}

impl WalkApp {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let seed = self.config.seed.unwrap_or_else(|| OsRng.gen());

        info!("Using seed: {}", seed);

        let renderers = self.create_renderers()?;

        self.run_with(Walk::new(self.config.steps, seed), renderers)
    }

    /// Drives `walk` to completion and hands the plot to `renderers`.
    ///
    /// If a renderer asks to quit mid-walk, stepping stops and the partial
    /// walk is still finalized by every renderer that did not quit.
    pub fn run_with(
        &self,
        mut walk: Walk,
        mut renderers: Vec<BoxedRenderer>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        for renderer in &mut renderers {
            renderer.initialize(self.config.renderer.window_size)?;
        }

        let total = walk.steps();
        let progress = ProgressBar::new(total as u64);
        progress.enable_steady_tick(Duration::from_millis(200));
        progress.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>7}/{len} {per_sec:>12}",
                )?
                .progress_chars("#>-"),
        );

        for renderer in &mut renderers {
            renderer.handle_event(&RenderEvent::Started)?;
        }

        while !walk.done() {
            if renderers.iter_mut().any(|r| r.should_quit()) {
                break;
            }

            walk.step_batch(BATCH);

            let done = total - walk.remaining();
            progress.set_position(done as u64);

            let event = RenderEvent::Progress { done, total };

            for renderer in &mut renderers {
                renderer.handle_event(&event)?;
            }
        }

        if walk.done() {
            for renderer in &mut renderers {
                renderer.handle_event(&RenderEvent::Completed)?;
            }

            progress.finish();
            info!("Walk of {} steps ended at {}", total, walk.position());
        } else {
            progress.abandon();
            warn!(
                "Stopped after {} of {} steps at {}; plotting the partial walk",
                walk.path().len(),
                total,
                walk.position()
            );
        }

        let path = walk.into_path();
        let style = PlotStyle::default().with_colormap(self.config.renderer.colormap);
        let scatter = Scatter::from_path(&path, &style);

        debug!("{} markers to draw", scatter.markers().count());

        for renderer in &mut renderers {
            if !renderer.should_quit() {
                renderer.finalize(&scatter)?;
            }
        }

        info!("Done");
        Ok(())
    }

    fn create_renderers(&self) -> Result<Vec<BoxedRenderer>, Box<dyn std::error::Error>> {
        let mut renderers: Vec<BoxedRenderer> = Vec::new();

        if let Some(output_path) = &self.config.output_path {
            renderers.push(Box::new(ImageRenderer::new(output_path.clone())));
        }

        #[cfg(feature = "visual")]
        if self.config.renderer.visual {
            let sdl_config = SdlConfig {
                window_size: self.config.renderer.window_size,
                vsync: self.config.renderer.vsync,
                hold: self.config.renderer.hold,
            };

            renderers.push(Box::new(SdlRenderer::new(&sdl_config)?));
        }

        Ok(renderers)
    }
}
