//! Error handling tests across modules

use virtual_keyboard::{
    config::Config,
    error::AppError,
    hit_test::hit_test,
    layout::{KeyId, KeyLayout, PixelPoint},
    text_buffer::TextBuffer,
    utils::safe_cast::{f32_to_i32, usize_to_i32},
};

#[test]
fn test_config_from_missing_file() {
    let result = Config::from_file("/nonexistent/path/config.yaml");
    assert!(result.is_err());
    match result {
        Err(AppError::IoError(_)) => {}
        _ => panic!("Expected IoError"),
    }
}

#[test]
fn test_config_from_malformed_yaml() {
    let path = std::env::temp_dir().join("vk_malformed_config.yaml");
    std::fs::write(&path, "keyboard: [not, a, mapping]").unwrap();

    let result = Config::from_file(&path);
    assert!(result.is_err());
    match result {
        Err(AppError::ConfigError(msg)) => assert!(msg.contains("parse")),
        _ => panic!("Expected ConfigError"),
    }

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_config_roundtrip() {
    let path = std::env::temp_dir().join("vk_roundtrip_config.yaml");

    let config = Config::default();
    config.to_file(&path).unwrap();

    let loaded = Config::from_file(&path).unwrap();
    assert!(loaded.validate().is_ok());
    assert_eq!(loaded.keyboard.key_size, config.keyboard.key_size);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_validate_error_messages() {
    let mut config = Config::default();
    config.display.frame_width = 0;

    match config.validate() {
        Err(AppError::ConfigError(msg)) => assert!(msg.contains("Frame dimensions")),
        other => panic!("Expected ConfigError, got {other:?}"),
    }
}

#[test]
fn test_hit_tester_is_total() {
    // The hit tester never errors, whatever the input
    let layout = KeyLayout::qwerty();

    let inputs: Vec<Vec<PixelPoint>> = vec![
        vec![],
        vec![PixelPoint::new(i32::MIN, i32::MIN)],
        vec![PixelPoint::new(i32::MAX, i32::MAX)],
        vec![PixelPoint::new(-1, -1), PixelPoint::new(0, 0)],
        vec![PixelPoint::new(80, 130); 50],
    ];

    for points in inputs {
        let _ = hit_test(&points, &layout);
    }
}

#[test]
fn test_buffer_delete_never_errors() {
    let mut buffer = TextBuffer::new();
    for _ in 0..1000 {
        buffer.delete_last();
    }
    assert!(buffer.is_empty());
}

#[test]
fn test_safe_cast_errors() {
    assert!(f32_to_i32(f32::NAN).is_err());
    assert!(f32_to_i32(f32::INFINITY).is_err());

    if std::mem::size_of::<usize>() > 4 {
        let result = usize_to_i32(usize::MAX);
        assert!(result.is_err());
        match result {
            Err(AppError::InvalidInput(msg)) => assert!(msg.contains("too large")),
            _ => panic!("Expected InvalidInput"),
        }
    }
}

#[test]
fn test_error_display() {
    let err = AppError::ModelError("missing output".to_string());
    assert_eq!(err.to_string(), "Model error: missing output");

    let err = AppError::PlotError("cannot write".to_string());
    assert_eq!(err.to_string(), "Plot error: cannot write");
}

#[test]
fn test_key_id_ordering_for_tally_keys() {
    // Backspace sorts after characters so chart ordering is stable
    let mut keys = vec![KeyId::Backspace, KeyId::Char('B'), KeyId::Char('A')];
    keys.sort();
    assert_eq!(keys, vec![KeyId::Char('A'), KeyId::Char('B'), KeyId::Backspace]);
}
