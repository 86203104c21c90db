//! Config file to running session

use std::io::Write;

use tui_blockfall::core::{ConfigError, EngineConfig, GameState};

#[test]
fn test_loaded_config_shapes_the_session() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "width": 8, "height": 12, "spawn_x": 2, "base_drop_ms": 500, "seed": 99 }}"#
    )
    .unwrap();

    let config = EngineConfig::load(file.path()).unwrap();
    let game = GameState::new(config.clone());

    assert_eq!((game.grid().width(), game.grid().height()), (8, 12));
    assert_eq!(game.drop_interval_ms(), 500);
    assert_eq!(game.active().unwrap().x, 2);

    // The seed fixes the piece stream.
    let again = GameState::new(config);
    assert_eq!(game.snapshot(), again.snapshot());
}

#[test]
fn test_invalid_file_reports_field() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "min_drop_ms": 900 }}"#).unwrap();

    let err = EngineConfig::load(file.path()).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Invalid {
            field: "base_drop_ms",
            ..
        }
    ));
    assert!(err.to_string().contains("base_drop_ms"));
}

#[test]
fn test_io_error_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");
    let err = EngineConfig::load(&path).unwrap_err();
    assert!(err.to_string().contains("nope.json"));
}
