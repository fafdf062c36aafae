//! Hand gesture mouse: move the cursor with your index finger, pinch to click.

use anyhow::Result;
use clap::Parser;
use hand_gesture_mouse::{
    app::{run_image_mode, run_webcam_mode, Mode, SessionOptions},
    capture::CameraSource,
    config::{Config, EXAMPLE_CONFIG},
    controller::GestureController,
    cursor_control::{resolve_screen_size, CursorController},
    display::HighguiWindow,
    landmark_detection::OnnxHandDetector,
    prompt::ask,
};
use log::{info, warn};
use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<PathBuf>,

    /// Camera index to use (overrides the config file)
    #[arg(long)]
    cam: Option<i32>,

    /// Hand landmark ONNX model (overrides the config file)
    #[arg(long)]
    model: Option<PathBuf>,

    /// Print an example configuration file and exit
    #[arg(long)]
    print_config: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    if args.print_config {
        print!("{EXAMPLE_CONFIG}");
        return Ok(());
    }

    let config = load_config(&args);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let choice = ask(&mut input, &mut output, "Choose mode: (1) Webcam  (2) Image => ")?;
    match Mode::from_choice(&choice) {
        Some(Mode::Webcam) => webcam_mode(&config)?,
        Some(Mode::Image) => {
            let path = ask(&mut input, &mut output, "Enter image path: ")?;
            image_mode(&config, Path::new(&path))?;
        }
        None => println!("Invalid choice."),
    }

    Ok(())
}

/// Build the configuration from defaults, the optional file and CLI overrides
fn load_config(args: &Args) -> Config {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            match Config::from_file(path).and_then(|cfg| cfg.validate().map(|()| cfg)) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warn!("Failed to load config file: {}. Using defaults.", e);
                    Config::default()
                }
            }
        }
        None => Config::default(),
    };

    if let Some(cam) = args.cam {
        config.camera.index = cam;
    }
    if let Some(model) = &args.model {
        config.detector.model.clone_from(model);
    }
    config
}

fn webcam_mode(config: &Config) -> Result<()> {
    let detector = OnnxHandDetector::new(
        &config.detector.model,
        config.detector.max_hands,
        config.detector.presence_threshold,
    )?
    .with_input_size(config.detector.input_size);

    let cursor = match CursorController::new() {
        Ok(c) => {
            info!("X11 cursor control initialized");
            Some(c)
        }
        Err(e) => {
            warn!("Cursor control unavailable, running preview only: {}", e);
            None
        }
    };
    let fallback = (
        u32::try_from(config.camera.width).unwrap_or_default(),
        u32::try_from(config.camera.height).unwrap_or_default(),
    );
    let screen = resolve_screen_size(cursor.as_ref(), fallback);
    info!("Mapping gestures onto a {}x{} screen", screen.0, screen.1);

    let controller = GestureController::new(config.gesture.clone(), screen, cursor)?;
    let options = SessionOptions {
        show_fps: config.display.show_fps,
    };

    run_webcam_mode(
        || CameraSource::open(config.camera.index, config.camera.width, config.camera.height),
        detector,
        || HighguiWindow::open(&config.display.webcam_window, config.display.always_on_top),
        controller,
        options,
    )?;
    Ok(())
}

fn image_mode(config: &Config, path: &Path) -> Result<()> {
    let mut detector = OnnxHandDetector::new(
        &config.detector.model,
        config.detector.image_max_hands,
        config.detector.presence_threshold,
    )?
    .with_input_size(config.detector.input_size);
    run_image_mode(path, &mut detector, || {
        HighguiWindow::open(&config.display.image_window, false)
    })?;
    io::stdout().flush()?;
    Ok(())
}
