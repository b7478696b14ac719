//! Hand-landmark virtual keyboard library.
//!
//! This library drives a webcam virtual keyboard using:
//! - ONNX Runtime for hand landmark inference
//! - `OpenCV` for video capture, drawing and window management
//! - `plotters` for the post-session key-press frequency chart
//!
//! The per-frame pipeline consists of:
//! 1. Hand detection returning 21 normalized landmarks per hand
//! 2. Hit testing the index and middle fingertips against the key layout
//! 3. Debouncing the touch signal into discrete key-press commits
//! 4. Applying commits to the text buffer and press tally
//!
//! # Examples
//!
//! ## Pure core, no camera required
//!
//! ```
//! use virtual_keyboard::{
//!     debounce::Debouncer,
//!     hit_test::hit_test,
//!     layout::{KeyLayout, PixelPoint},
//!     text_buffer::TextBuffer,
//! };
//! use std::time::Instant;
//!
//! let layout = KeyLayout::qwerty();
//! let mut debouncer = Debouncer::new();
//! let mut buffer = TextBuffer::new();
//!
//! // Both fingertips dwell inside the Q key
//! let fingertips = [PixelPoint::new(80, 130), PixelPoint::new(85, 140)];
//! let touched = hit_test(&fingertips, &layout);
//!
//! if let Some(press) = debouncer.update_at(touched, Instant::now()) {
//!     buffer.apply(press);
//! }
//! assert_eq!(buffer.as_str(), "Q");
//! ```
//!
//! ## Full application
//!
//! ```no_run
//! use virtual_keyboard::app::{AppConfig, AppMode, VideoSource, VirtualKeyboardApp};
//! use virtual_keyboard::config::Config;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = AppConfig::from_config(
//!     &Config::default(),
//!     VideoSource::Camera(0),
//!     AppMode::Stats,
//! );
//!
//! let mut app = VirtualKeyboardApp::new(config)?;
//! app.run()?;
//! # Ok(())
//! # }
//! ```

/// Hand landmark detection module
pub mod hand_detection;

/// Virtual keyboard layout
pub mod layout;


/// Key-press debouncing state machine
pub mod debounce;

/// Session text buffer
pub mod text_buffer;

/// Key-press frequency tally
pub mod tally;

/// Frame drawing helpers
pub mod render;

/// Post-session frequency chart
pub mod plot;

/// Utility functions for coordinate transformations
pub mod utils;

/// Error types and result handling
pub mod error;

/// Main application module
pub mod app;

/// Constants used throughout the application
pub mod constants;

/// Configuration management
pub mod config;

pub use error::{Error, Result};
