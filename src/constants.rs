//! Constants used throughout the application

/// Number of landmarks in the 21-point hand model
pub const NUM_HAND_LANDMARKS: usize = 21;

/// Landmark index of the index fingertip
pub const INDEX_FINGER_TIP: usize = 8;

/// Landmark index of the middle fingertip
pub const MIDDLE_FINGER_TIP: usize = 12;

/// Edge length of a keyboard key in pixels (keys are square)
pub const KEY_SIZE: i32 = 70;

/// Time window for the double-tap-to-delete gesture, in seconds
pub const DOUBLE_TAP_WINDOW_SECS: f64 = 1.0;

/// Default capture resolution
pub const DEFAULT_FRAME_WIDTH: i32 = 1280;
pub const DEFAULT_FRAME_HEIGHT: i32 = 720;

/// Default detection confidence threshold for hand landmarks
pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.5;

/// Default hand landmark model input size
pub const DEFAULT_HAND_INPUT_SIZE: i32 = 224;

/// Pixel value scale for normalizing model input to [0, 1]
pub const IMAGE_NORMALIZATION_SCALE: f32 = 255.0;

/// Default output path for the key-press frequency chart
pub const DEFAULT_PLOT_PATH: &str = "key_frequency.png";
