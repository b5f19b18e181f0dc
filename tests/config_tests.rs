use previous_edit::config::{Config, MINIMUM_BACKWARD};
use tempfile::TempDir;

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.max_backward, 10);
    assert_eq!(MINIMUM_BACKWARD, 10);
    assert!(config.coalesce_same_line);
    assert_eq!(config.effective_max_backward(), 10);
}

#[test]
fn test_effective_max_backward_enforces_minimum() {
    let config = Config {
        max_backward: 2,
        ..Default::default()
    };
    assert_eq!(config.effective_max_backward(), MINIMUM_BACKWARD);
}

#[test]
fn test_config_path_ends_with_app_dir() {
    if let Some(path) = Config::config_path() {
        assert!(path.ends_with(".config/previous-edit/config.toml"));
    }
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let config = Config {
        max_backward: 40,
        coalesce_same_line: false,
    };
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_partial_config_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "coalesce_same_line = false\n").unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.max_backward, MINIMUM_BACKWARD);
    assert!(!loaded.coalesce_same_line);
}

#[test]
fn test_load_raises_small_depth_to_minimum() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "max_backward = 3\n").unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.max_backward, MINIMUM_BACKWARD);
}

#[test]
fn test_malformed_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "max_backward = \"lots\"\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse"));
}

#[test]
fn test_missing_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = Config::load_from(&dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read"));
}
