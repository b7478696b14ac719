//! Frame drawing: keyboard, landmarks, text buffer and status overlays.

use crate::error::Result;
use crate::hand_detection::{HandDetection, HAND_CONNECTIONS};
use crate::layout::{KeyId, KeyLayout};
use opencv::{
    core::{Mat, Point, Rect, Scalar},
    imgproc::{self, FONT_HERSHEY_PLAIN, FONT_HERSHEY_SIMPLEX, LINE_8},
    prelude::*,
};

/// Draw the keyboard; the held key is rendered highlighted
pub fn draw_keyboard(frame: &mut Mat, layout: &KeyLayout, held_key: Option<KeyId>) -> Result<()> {
    for key in layout.keys() {
        let rect = Rect::new(key.rect.x, key.rect.y, key.rect.size, key.rect.size);
        let label_origin = Point::new(key.rect.x + 15, key.rect.y + 45);
        let label = match key.id {
            KeyId::Char(c) => c.to_string(),
            KeyId::Backspace => "<".to_string(),
        };

        if held_key == Some(key.id) {
            imgproc::rectangle(
                frame,
                rect,
                Scalar::new(255.0, 255.0, 255.0, 0.0),
                imgproc::FILLED,
                LINE_8,
                0,
            )?;
            imgproc::put_text(
                frame,
                &label,
                label_origin,
                FONT_HERSHEY_PLAIN,
                2.0,
                Scalar::new(0.0, 0.0, 0.0, 0.0),
                2,
                LINE_8,
                false,
            )?;
        } else {
            imgproc::rectangle(
                frame,
                rect,
                Scalar::new(0.0, 0.0, 0.0, 0.0),
                imgproc::FILLED,
                LINE_8,
                0,
            )?;
            imgproc::rectangle(
                frame,
                rect,
                Scalar::new(255.0, 0.0, 0.0, 0.0),
                2,
                LINE_8,
                0,
            )?;
            imgproc::put_text(
                frame,
                &label,
                label_origin,
                FONT_HERSHEY_PLAIN,
                2.0,
                Scalar::new(255.0, 0.0, 0.0, 0.0),
                2,
                LINE_8,
                false,
            )?;
        }
    }

    Ok(())
}

/// Draw hand landmarks and skeleton connections
pub fn draw_landmarks(frame: &mut Mat, detection: &HandDetection) -> Result<()> {
    let width = frame.cols();
    let height = frame.rows();

    let points: Vec<Point> = detection
        .landmarks
        .iter()
        .map(|lm| {
            let p = lm.to_pixel(width, height);
            Point::new(p.x, p.y)
        })
        .collect();

    for &(a, b) in &HAND_CONNECTIONS {
        if a < points.len() && b < points.len() {
            imgproc::line(
                frame,
                points[a],
                points[b],
                Scalar::new(0.0, 255.0, 0.0, 0.0),
                2,
                LINE_8,
                0,
            )?;
        }
    }

    for point in &points {
        imgproc::circle(
            frame,
            *point,
            4,
            Scalar::new(0.0, 0.0, 255.0, 0.0),
            -1,
            LINE_8,
            0,
        )?;
    }

    Ok(())
}

/// Draw the handedness label for a detected hand.
///
/// The first hand's label goes to the top-left corner, later hands to the
/// right half of the frame.
pub fn draw_handedness_label(frame: &mut Mat, detection: &HandDetection, hand_index: usize) -> Result<()> {
    let origin = if hand_index == 0 {
        Point::new(10, 50)
    } else {
        Point::new(frame.cols() / 2 + 10, 50)
    };

    imgproc::put_text(
        frame,
        detection.handedness.label(),
        origin,
        FONT_HERSHEY_SIMPLEX,
        1.0,
        Scalar::new(255.0, 0.0, 0.0, 0.0),
        2,
        LINE_8,
        false,
    )?;

    Ok(())
}

/// Draw the accumulated text buffer
pub fn draw_text_buffer(frame: &mut Mat, text: &str) -> Result<()> {
    imgproc::put_text(
        frame,
        text,
        Point::new(50, 450),
        FONT_HERSHEY_PLAIN,
        3.0,
        Scalar::new(0.0, 255.0, 0.0, 0.0),
        3,
        LINE_8,
        false,
    )?;

    Ok(())
}

/// Draw the most recent committed key
pub fn draw_selected_key(frame: &mut Mat, key: KeyId) -> Result<()> {
    let text = format!("Selected Key: {key}");
    imgproc::put_text(
        frame,
        &text,
        Point::new(50, 50),
        FONT_HERSHEY_PLAIN,
        2.0,
        Scalar::new(0.0, 255.0, 0.0, 0.0),
        2,
        LINE_8,
        false,
    )?;

    Ok(())
}

/// Draw the FPS counter
pub fn draw_fps(frame: &mut Mat, fps: f64) -> Result<()> {
    let text = format!("FPS: {fps:.1}");
    imgproc::put_text(
        frame,
        &text,
        Point::new(10, 30),
        FONT_HERSHEY_SIMPLEX,
        1.0,
        Scalar::new(0.0, 255.0, 0.0, 0.0),
        2,
        LINE_8,
        false,
    )?;

    Ok(())
}
