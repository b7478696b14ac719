//! Main application module for the hand-landmark virtual keyboard.

use crate::{
    config::Config,
    constants::{INDEX_FINGER_TIP, MIDDLE_FINGER_TIP},
    debounce::{Debouncer, KeyPress},
    error::Result,
    hand_detection::{HandDetection, HandDetector},
    hit_test::hit_test,
    layout::{KeyId, KeyLayout},
    plot::render_tally_chart,
    render,
    tally::PressTally,
    text_buffer::TextBuffer,
};
use log::{info, warn};
use opencv::{
    core::Mat,
    highgui::{self, WINDOW_NORMAL},
    prelude::*,
    videoio::{self, VideoCapture, CAP_PROP_BUFFERSIZE, CAP_PROP_FRAME_HEIGHT, CAP_PROP_FRAME_WIDTH},
};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Window title for the main display
const WINDOW_NAME: &str = "Virtual Keyboard";

/// Video source type
#[derive(Debug, Clone)]
pub enum VideoSource {
    /// Webcam index
    Camera(i32),
    /// Video file path
    File(String),
}

/// Interaction mode, one per original demo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Landmark display with handedness labels only
    Landmarks,
    /// Virtual keyboard with debounced key presses
    Keyboard,
    /// Keyboard plus a post-session frequency chart
    Stats,
}

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Camera index or video file path
    pub video_source: VideoSource,
    /// Interaction mode
    pub mode: AppMode,
    /// Mirror the image horizontally for selfie view
    pub mirror: bool,
    /// Run without a display window (video file processing)
    pub headless: bool,
    /// Path to the hand landmark ONNX model
    pub model_path: PathBuf,
    /// Hand presence confidence threshold
    pub confidence_threshold: f32,
    /// Requested capture width
    pub frame_width: i32,
    /// Requested capture height
    pub frame_height: i32,
    /// Double-tap-to-delete window
    pub double_tap_window: Duration,
    /// Output path for the frequency chart (stats mode)
    pub plot_path: PathBuf,
    /// Show the FPS counter
    pub show_fps: bool,
}

impl AppConfig {
    /// Build an application configuration from a parsed config file
    #[must_use]
    pub fn from_config(config: &Config, video_source: VideoSource, mode: AppMode) -> Self {
        Self {
            video_source,
            mode,
            mirror: config.display.mirror,
            headless: false,
            model_path: config.models.hand_landmarks.clone(),
            confidence_threshold: config.detection.confidence_threshold,
            frame_width: config.display.frame_width,
            frame_height: config.display.frame_height,
            double_tap_window: Duration::from_secs_f64(config.keyboard.double_tap_window_secs),
            plot_path: config.plot.output_path.clone(),
            show_fps: config.display.show_fps,
        }
    }
}

/// Result of processing a single frame
struct FrameResult {
    detections: Vec<HandDetection>,
    committed: Option<KeyId>,
}

/// Main application struct
pub struct VirtualKeyboardApp {
    config: AppConfig,
    detector: HandDetector,
    layout: KeyLayout,
    debouncer: Debouncer,
    text_buffer: TextBuffer,
    tally: PressTally,
    video_capture: VideoCapture,
}

impl VirtualKeyboardApp {
    /// Create a new virtual keyboard application
    pub fn new(config: AppConfig) -> Result<Self> {
        info!("Initializing virtual keyboard application");

        let mut video_capture = match &config.video_source {
            VideoSource::Camera(index) => {
                info!("Opening camera {index}");
                let mut cap = VideoCapture::new(*index, videoio::CAP_ANY)?;

                cap.set(CAP_PROP_FRAME_WIDTH, f64::from(config.frame_width))?;
                cap.set(CAP_PROP_FRAME_HEIGHT, f64::from(config.frame_height))?;

                // Reduce buffer size for lower latency (webcam only)
                cap.set(CAP_PROP_BUFFERSIZE, 1.0)?;

                cap
            }
            VideoSource::File(path) => {
                info!("Opening video file: {path}");
                VideoCapture::from_file(path, videoio::CAP_ANY)?
            }
        };

        if !video_capture.is_opened()? {
            return Err(crate::Error::InvalidInput(
                "Failed to open video source".to_string(),
            ));
        }

        let detector = HandDetector::new(&config.model_path, config.confidence_threshold)?;

        if !config.headless {
            highgui::named_window(WINDOW_NAME, WINDOW_NORMAL)?;
        }

        let debouncer = Debouncer::with_window(config.double_tap_window);

        Ok(Self {
            config,
            detector,
            layout: KeyLayout::qwerty(),
            debouncer,
            text_buffer: TextBuffer::new(),
            tally: PressTally::new(),
            video_capture,
        })
    }

    /// Run the main frame loop until exit or end of input
    pub fn run(&mut self) -> Result<()> {
        info!("Entering main loop in {:?} mode", self.config.mode);

        let mut frame_count = 0u64;
        let start_time = Instant::now();
        let mut fps = 0.0;

        loop {
            let mut frame = Mat::default();
            if !self.video_capture.read(&mut frame)? || frame.empty() {
                if matches!(self.config.video_source, VideoSource::File(_)) {
                    info!("End of video file reached");
                    break;
                }
                warn!("Failed to read frame, retrying...");
                continue;
            }

            if self.config.mirror {
                let temp = frame.clone();
                opencv::core::flip(&temp, &mut frame, 1)?;
            }

            let result = self.process_frame(&frame)?;

            frame_count += 1;
            let elapsed = start_time.elapsed().as_secs_f64();
            if elapsed > 0.0 {
                fps = frame_count as f64 / elapsed;
            }

            if !self.config.headless {
                self.display_results(&mut frame, &result, fps)?;

                let key = highgui::wait_key(1)?;
                if key == 27 || key == i32::from(b'q') {
                    info!("Exit requested by user");
                    break;
                }
            }
        }

        self.shutdown()
    }

    /// Process a single frame: detect, hit-test, debounce, mutate state
    fn process_frame(&mut self, frame: &Mat) -> Result<FrameResult> {
        let detections = self.detector.detect(frame)?;

        if self.config.mode == AppMode::Landmarks {
            return Ok(FrameResult {
                detections,
                committed: None,
            });
        }

        let touched = detections.first().and_then(|hand| {
            let points = hand.pixel_points(
                &[INDEX_FINGER_TIP, MIDDLE_FINGER_TIP],
                frame.cols(),
                frame.rows(),
            );
            hit_test(&points, &self.layout)
        });

        let press = self.debouncer.update(touched);
        if let Some(press) = press {
            self.text_buffer.apply(press);
            if let KeyPress::Append(c) = press {
                self.tally.record(KeyId::Char(c));
            }
            info!("Committed {press:?}, buffer: {:?}", self.text_buffer.as_str());
        }

        Ok(FrameResult {
            detections,
            committed: press.and(touched),
        })
    }

    /// Draw overlays and show the frame
    fn display_results(&self, frame: &mut Mat, result: &FrameResult, fps: f64) -> Result<()> {
        match self.config.mode {
            AppMode::Landmarks => {
                for (i, hand) in result.detections.iter().enumerate() {
                    render::draw_landmarks(frame, hand)?;
                    render::draw_handedness_label(frame, hand, i)?;
                }
            }
            AppMode::Keyboard | AppMode::Stats => {
                render::draw_keyboard(frame, &self.layout, self.debouncer.held_key())?;
                for hand in &result.detections {
                    render::draw_landmarks(frame, hand)?;
                }
                if let Some(key) = result.committed {
                    render::draw_selected_key(frame, key)?;
                }
                render::draw_text_buffer(frame, self.text_buffer.as_str())?;
            }
        }

        if self.config.show_fps {
            render::draw_fps(frame, fps)?;
        }

        highgui::imshow(WINDOW_NAME, frame)?;

        Ok(())
    }

    /// Release resources and emit the frequency chart in stats mode
    fn shutdown(&mut self) -> Result<()> {
        info!("Application shutting down");

        if self.config.mode == AppMode::Stats {
            render_tally_chart(&self.tally, &self.config.plot_path)?;
        }

        self.video_capture.release()?;
        if !self.config.headless {
            highgui::destroy_all_windows()?;
        }

        Ok(())
    }

    /// Accumulated text for the session
    #[must_use]
    pub fn text(&self) -> &str {
        self.text_buffer.as_str()
    }

    /// Per-key press counts for the session
    #[must_use]
    pub fn tally(&self) -> &PressTally {
        &self.tally
    }
}
