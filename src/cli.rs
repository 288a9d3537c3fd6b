use crate::color::Colormap;
use crate::geometry::Size;
use crate::walk::NUM_STEPS;
use std::path::PathBuf;
use std::time::Duration;
use structopt::clap::Shell;
use structopt::StructOpt;
use structopt_flags::QuietVerbose;

#[derive(Debug)]
pub struct RendererConfig {
    #[cfg(feature = "visual")]
    pub visual: bool,
    #[cfg(feature = "visual")]
    pub vsync: bool,
    #[cfg(feature = "visual")]
    pub hold: Option<Duration>,
    pub window_size: Size,
    pub colormap: Colormap,
}

#[derive(Debug)]
pub struct AppConfig {
    pub steps: usize,
    pub seed: Option<u64>,
    pub output_path: Option<PathBuf>,
    pub renderer: RendererConfig,
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "Random Walk",
    about = "Simulate a 2D random walk and plot the path it took"
)]
pub struct Opt {
    #[structopt(flatten)]
    pub verbose: QuietVerbose,

    #[structopt(parse(from_os_str), help = "Also save the plot to this PNG file")]
    output: Option<PathBuf>,

    #[structopt(parse(try_from_str), short, long, help = "Random seed")]
    seed: Option<u64>,

    #[structopt(
        parse(try_from_str),
        short,
        long,
        default_value = "800x600",
        help = "Plot size in pixels"
    )]
    window_size: Size,

    #[structopt(
        parse(try_from_str),
        short,
        long,
        default_value = "YlGnBu",
        help = "Colour map grading the path from first to last step"
    )]
    colormap: Colormap,

    #[cfg(feature = "visual")]
    #[structopt(long, help = "Do not open a window")]
    no_window: bool,

    #[cfg(feature = "visual")]
    #[structopt(long, help = "Turns on vsync")]
    vsync: bool,

    #[cfg(feature = "visual")]
    #[structopt(long, help = "Close the window after n seconds")]
    hold: Option<f32>,

    #[structopt(long, possible_values = &Shell::variants(), case_insensitive = true, help = "Generate shell completions and exit")]
    pub completions: Option<Shell>,
}

impl Opt {
    pub fn to_app_config(self) -> Result<AppConfig, &'static str> {
        #[cfg(feature = "visual")]
        let has_surface = !self.no_window || self.output.is_some();

        #[cfg(not(feature = "visual"))]
        let has_surface = self.output.is_some();

        if !has_surface {
            return Err("Nothing to show: enable the window or give an output file");
        }

        #[cfg(feature = "visual")]
        let hold = match self.hold {
            Some(secs) => Some(
                Duration::try_from_secs_f32(secs)
                    .map_err(|_| "Hold must be a finite, non-negative number of seconds")?,
            ),
            None => None,
        };

        Ok(AppConfig {
            steps: NUM_STEPS,
            seed: self.seed,
            output_path: self.output,
            renderer: RendererConfig {
                #[cfg(feature = "visual")]
                visual: !self.no_window,
                #[cfg(feature = "visual")]
                vsync: self.vsync,
                #[cfg(feature = "visual")]
                hold,
                window_size: self.window_size,
                colormap: self.colormap,
            },
        })
    }
}
