#![cfg(feature = "cli")]

use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use structopt::StructOpt;

use random_walk::{
    app::{BoxedRenderer, WalkApp},
    cli::{AppConfig, Opt},
    geometry::Size,
    plot::Scatter,
    render::image_renderer::ImageRenderer,
    render::{RenderEvent, Renderer},
    walk::{Walk, NUM_STEPS},
};

// Fixed seed for deterministic tests
const TEST_SEED: u64 = 42;

fn temp_png(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("random-walk-{}-{}.png", name, std::process::id()))
}

fn headless_args(output: &Path, extra: &[&str]) -> Vec<String> {
    let mut args = vec!["random-walk".to_string(), output.display().to_string()];

    if cfg!(feature = "visual") {
        args.push("--no-window".to_string());
    }

    args.extend(extra.iter().map(|s| s.to_string()));
    args
}

fn headless_config(output: &Path, extra: &[&str]) -> AppConfig {
    Opt::from_iter(headless_args(output, extra))
        .to_app_config()
        .unwrap()
}

/// Asks to quit as soon as the first progress event arrives.
struct QuitOnProgress {
    quit: bool,
    finalized: Rc<Cell<usize>>,
}

impl Renderer for QuitOnProgress {
    type Error = String;

    fn initialize(&mut self, _frame_size: Size) -> Result<(), Self::Error> {
        Ok(())
    }

    fn handle_event(&mut self, event: &RenderEvent) -> Result<(), Self::Error> {
        if let RenderEvent::Progress { .. } = event {
            self.quit = true;
        }

        Ok(())
    }

    fn should_quit(&mut self) -> bool {
        self.quit
    }

    fn finalize(&mut self, _scatter: &Scatter) -> Result<(), Self::Error> {
        self.finalized.set(self.finalized.get() + 1);
        Ok(())
    }
}

#[cfg(feature = "visual")]
#[test]
fn test_config_requires_a_surface() {
    let result = Opt::from_iter(["random-walk", "--no-window"]).to_app_config();

    assert!(result.is_err());
}

#[test]
fn test_headless_config() {
    let output = temp_png("config");
    let config = headless_config(&output, &["--seed", "7", "--window-size", "64x48"]);

    assert_eq!(config.steps, NUM_STEPS);
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.output_path, Some(output));
    assert_eq!(config.renderer.window_size, Size::new(64, 48));

    #[cfg(feature = "visual")]
    assert!(!config.renderer.visual);
}

#[cfg(feature = "visual")]
#[test]
fn test_hold_must_be_a_valid_duration() {
    let output = temp_png("hold");

    for hold in ["--hold=-1", "--hold=nan", "--hold=inf", "--hold=1e30"] {
        let result = Opt::from_iter(headless_args(&output, &[hold])).to_app_config();
        assert!(result.is_err(), "{} accepted", hold);
    }

    let config = headless_config(&output, &["--hold=1.5"]);
    assert_eq!(config.renderer.hold, Some(std::time::Duration::from_millis(1500)));
}

#[test]
fn test_headless_run_writes_png() {
    let output = temp_png("run");
    let config = headless_config(&output, &["--seed", "7", "--window-size", "64x48"]);

    WalkApp::new(config).run().unwrap();

    let saved = image::open(&output).unwrap();
    assert_eq!((saved.width(), saved.height()), (64, 48));

    std::fs::remove_file(&output).unwrap();
}

#[test]
fn test_quit_mid_walk_still_saves_png() {
    let output = temp_png("quit");
    let config = headless_config(&output, &["--window-size", "64x48"]);
    let finalized = Rc::new(Cell::new(0));

    let renderers: Vec<BoxedRenderer> = vec![
        Box::new(ImageRenderer::new(output.clone())),
        Box::new(QuitOnProgress {
            quit: false,
            finalized: finalized.clone(),
        }),
    ];

    WalkApp::new(config)
        .run_with(Walk::new(NUM_STEPS, TEST_SEED), renderers)
        .unwrap();

    // the renderer that quit is not asked to draw
    assert_eq!(finalized.get(), 0);

    let saved = image::open(&output).unwrap();
    assert_eq!((saved.width(), saved.height()), (64, 48));

    std::fs::remove_file(&output).unwrap();
}
