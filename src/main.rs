//! Webcam virtual keyboard driven by hand-landmark detection.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::info;
use std::path::PathBuf;
use virtual_keyboard::app::{AppConfig, AppMode, VideoSource, VirtualKeyboardApp};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Show detected hand landmarks with handedness labels
    Landmarks,
    /// Virtual keyboard with debounced key presses
    Keyboard,
    /// Keyboard plus a post-session key frequency chart
    Stats,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Camera index to use
    #[arg(long, default_value = "0")]
    cam: i32,

    /// Video file to process instead of a camera
    #[arg(short, long)]
    video: Option<String>,

    /// Interaction mode
    #[arg(short, long, value_enum, default_value = "keyboard")]
    mode: Mode,

    /// Disable the selfie-view horizontal mirror
    #[arg(long)]
    no_mirror: bool,

    /// Run without a display window
    #[arg(long)]
    headless: bool,

    /// Output path for the frequency chart (stats mode)
    #[arg(long)]
    plot_out: Option<PathBuf>,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

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

    info!("Virtual Keyboard - hand landmark edition");

    // Load configuration if provided
    let file_config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {config_path}");
        match virtual_keyboard::config::Config::from_file(config_path) {
            Ok(cfg) => {
                cfg.validate()?;
                cfg
            }
            Err(e) => {
                log::warn!("Failed to load config file: {e}. Using defaults.");
                virtual_keyboard::config::Config::default()
            }
        }
    } else {
        virtual_keyboard::config::Config::default()
    };

    let video_source = if let Some(video_path) = args.video {
        VideoSource::File(video_path)
    } else {
        VideoSource::Camera(args.cam)
    };

    let mode = match args.mode {
        Mode::Landmarks => AppMode::Landmarks,
        Mode::Keyboard => AppMode::Keyboard,
        Mode::Stats => AppMode::Stats,
    };

    let mut config = AppConfig::from_config(&file_config, video_source, mode);
    config.headless = args.headless;
    if args.no_mirror {
        config.mirror = false;
    }
    if let Some(path) = args.plot_out {
        config.plot_path = path;
    }

    let mut app = VirtualKeyboardApp::new(config)?;
    app.run()?;

    Ok(())
}
