use crate::constants::{DEFAULT_HAND_INPUT_SIZE, IMAGE_NORMALIZATION_SCALE, NUM_HAND_LANDMARKS};
use crate::layout::PixelPoint;
use crate::utils::{normalized_to_pixel, safe_cast::usize_to_i32};
use crate::Result;
use ndarray::{Array1, Array4, CowArray};
use opencv::core::{Mat, Size, CV_32F};
use opencv::imgproc::{self, InterpolationFlags};
use opencv::prelude::*;
use ort::{Environment, Session, Value};
use std::path::Path;
use std::sync::Arc;

/// Landmark indices of the 21-point hand model
#[allow(dead_code)]
pub mod landmark_index {
    pub const WRIST: usize = 0;
    pub const THUMB_CMC: usize = 1;
    pub const THUMB_MCP: usize = 2;
    pub const THUMB_IP: usize = 3;
    pub const THUMB_TIP: usize = 4;
    pub const INDEX_FINGER_MCP: usize = 5;
    pub const INDEX_FINGER_PIP: usize = 6;
    pub const INDEX_FINGER_DIP: usize = 7;
    pub const INDEX_FINGER_TIP: usize = 8;
    pub const MIDDLE_FINGER_MCP: usize = 9;
    pub const MIDDLE_FINGER_PIP: usize = 10;
    pub const MIDDLE_FINGER_DIP: usize = 11;
    pub const MIDDLE_FINGER_TIP: usize = 12;
    pub const RING_FINGER_MCP: usize = 13;
    pub const RING_FINGER_PIP: usize = 14;
    pub const RING_FINGER_DIP: usize = 15;
    pub const RING_FINGER_TIP: usize = 16;
    pub const PINKY_MCP: usize = 17;
    pub const PINKY_PIP: usize = 18;
    pub const PINKY_DIP: usize = 19;
    pub const PINKY_TIP: usize = 20;
}

/// Skeleton connections between landmarks, for drawing
pub const HAND_CONNECTIONS: [(usize, usize); 21] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 4),
    (0, 5),
    (5, 6),
    (6, 7),
    (7, 8),
    (5, 9),
    (9, 10),
    (10, 11),
    (11, 12),
    (9, 13),
    (13, 14),
    (14, 15),
    (15, 16),
    (13, 17),
    (0, 17),
    (17, 18),
    (18, 19),
    (19, 20),
];

/// Which hand a detection belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handedness {
    Left,
    Right,
}

impl Handedness {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Handedness::Left => "Left Hand",
            Handedness::Right => "Right Hand",
        }
    }
}

/// A single normalized hand landmark, x and y in [0, 1]
#[derive(Debug, Clone, Copy, Default)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
}

impl Landmark {
    /// Convert to pixel coordinates for a frame of the given size
    #[must_use]
    pub fn to_pixel(self, frame_width: i32, frame_height: i32) -> PixelPoint {
        normalized_to_pixel(self.x, self.y, frame_width, frame_height)
    }
}

/// One detected hand: 21 landmarks, handedness label and confidence
#[derive(Debug, Clone)]
pub struct HandDetection {
    pub landmarks: Vec<Landmark>,
    pub handedness: Handedness,
    pub score: f32,
}

impl HandDetection {
    /// Landmarks converted to pixel coordinates.
    ///
    /// Returns an empty vector when the indices exceed the detected
    /// landmark count, so a partially detected hand touches nothing.
    #[must_use]
    pub fn pixel_points(&self, indices: &[usize], frame_width: i32, frame_height: i32) -> Vec<PixelPoint> {
        if indices.iter().any(|&i| i >= self.landmarks.len()) {
            return Vec::new();
        }
        indices
            .iter()
            .map(|&i| self.landmarks[i].to_pixel(frame_width, frame_height))
            .collect()
    }
}

/// Hand landmark detector using `ONNX` Runtime
pub struct HandDetector {
    session: Session,
    #[allow(dead_code)] // Reserved for future named tensor support
    input_name: String,
    input_size: i32,
    confidence_threshold: f32,
}

impl HandDetector {
    /// Create a new hand detector from an `ONNX` model file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The ONNX model file cannot be loaded
    /// - The model has an unexpected structure
    /// - The ONNX runtime environment cannot be created
    pub fn new<P: AsRef<Path>>(model_path: P, confidence_threshold: f32) -> Result<Self> {
        log::info!(
            "Initializing HandDetector with model: {}",
            model_path.as_ref().display()
        );
        let environment = Arc::new(
            Environment::builder()
                .with_name("hand_detector")
                .with_log_level(ort::LoggingLevel::Warning)
                .build()?,
        );

        let session = ort::SessionBuilder::new(&environment)?
            .with_optimization_level(ort::GraphOptimizationLevel::Level3)?
            .with_model_from_file(model_path)?;

        let input_name = session
            .inputs
            .first()
            .ok_or_else(|| crate::error::Error::ModelInputError("Model has no inputs".to_string()))?
            .name
            .clone();

        Ok(Self {
            session,
            input_name,
            input_size: DEFAULT_HAND_INPUT_SIZE,
            confidence_threshold,
        })
    }

    /// Detect hands in a full BGR frame.
    ///
    /// Returns zero or one detections; detections whose presence score is
    /// below the confidence threshold are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Image preprocessing fails
    /// - The ONNX model inference fails
    /// - An output tensor has an unexpected shape
    pub fn detect(&self, frame: &Mat) -> Result<Vec<HandDetection>> {
        let input = self.preprocess(frame)?;
        let (landmarks, score, handedness) = self.forward(input)?;
        Ok(self.postprocess(&landmarks, score, handedness))
    }

    /// Resize, convert BGR to RGB and normalize to a NHWC f32 tensor
    #[allow(clippy::cast_sign_loss)] // OpenCV dimensions are positive
    fn preprocess(&self, frame: &Mat) -> Result<Array4<f32>> {
        let size = self.input_size as usize;
        let channels = 3;

        let mut resized = Mat::default();
        imgproc::resize(
            frame,
            &mut resized,
            Size::new(self.input_size, self.input_size),
            0.0,
            0.0,
            InterpolationFlags::INTER_LINEAR as i32,
        )?;

        let mut rgb_image = Mat::default();
        imgproc::cvt_color(&resized, &mut rgb_image, imgproc::COLOR_BGR2RGB, 0)?;

        let mut float_image = Mat::default();
        rgb_image.convert_to(&mut float_image, CV_32F, f64::from(1.0 / IMAGE_NORMALIZATION_SCALE), 0.0)?;

        let mut data = vec![0.0f32; size * size * channels];
        for row in 0..size {
            for col in 0..size {
                for ch in 0..channels {
                    let pixel =
                        float_image.at_2d::<opencv::core::Vec3f>(usize_to_i32(row)?, usize_to_i32(col)?)?[ch];
                    data[(row * size + col) * channels + ch] = pixel;
                }
            }
        }

        Array4::from_shape_vec((1, size, size, channels), data)
            .map_err(|e| crate::error::Error::ModelDataFormatError(format!("Failed to create array: {e}")))
    }

    /// Run forward pass through the model.
    ///
    /// The model produces three outputs: 63 landmark values (x, y, z per
    /// landmark, in input-size coordinates), a hand presence score and a
    /// handedness score.
    fn forward(&self, input: Array4<f32>) -> Result<(Array1<f32>, f32, f32)> {
        let cow_array = CowArray::from(input.into_dyn());
        let input_tensor = Value::from_array(self.session.allocator(), &cow_array)?;

        let outputs = self.session.run(vec![input_tensor])?;
        let mut outputs = outputs.into_iter();

        let landmarks_output = outputs
            .next()
            .ok_or_else(|| crate::error::Error::ModelOutputError("No landmark output from model".to_string()))?;
        let landmarks_tensor = landmarks_output.try_extract::<f32>()?;
        let landmarks_view = landmarks_tensor.view();
        let landmarks_data = landmarks_view
            .as_slice()
            .ok_or_else(|| crate::error::Error::ModelOutputError("Failed to get landmark data".to_string()))?;
        let landmarks = Array1::from(landmarks_data.to_vec());

        let mut scalars = [0.0f32; 2];
        for (slot, name) in scalars.iter_mut().zip(["presence score", "handedness score"]) {
            let value = outputs
                .next()
                .ok_or_else(|| crate::error::Error::ModelOutputError(format!("No {name} output from model")))?;
            let tensor = value.try_extract::<f32>()?;
            let view = tensor.view();
            *slot = view
                .iter()
                .next()
                .copied()
                .ok_or_else(|| crate::error::Error::ModelOutputError(format!("Empty {name} output")))?;
        }

        Ok((landmarks, scalars[0], scalars[1]))
    }

    /// Convert model output to normalized landmark detections
    #[allow(clippy::cast_precision_loss)] // Precision loss acceptable for coordinates
    fn postprocess(&self, landmarks: &Array1<f32>, score: f32, handedness: f32) -> Vec<HandDetection> {
        if score < self.confidence_threshold {
            log::debug!("Dropping detection below threshold: {score:.3}");
            return Vec::new();
        }

        let n_coords = 3; // x, y, z
        let input_size = self.input_size as f32;
        let mut points = Vec::with_capacity(NUM_HAND_LANDMARKS);

        for i in 0..NUM_HAND_LANDMARKS {
            let idx = i * n_coords;
            if idx + 1 >= landmarks.len() {
                break;
            }
            // Landmarks arrive in input-size coordinates, normalize to [0, 1]
            points.push(Landmark {
                x: landmarks[idx] / input_size,
                y: landmarks[idx + 1] / input_size,
            });
        }

        let handedness = if handedness > 0.5 {
            Handedness::Right
        } else {
            Handedness::Left
        };

        vec![HandDetection {
            landmarks: points,
            handedness,
            score,
        }]
    }
}
