//! End-to-end checks on the tack-config surface: files on disk in,
//! validated [`Config`] values out.

use std::fs;
use std::path::PathBuf;

use tack_config::{Config, ConfigError, Theme};
use tempfile::TempDir;

/// Drops `contents` into a fresh `tack.json5` and hands back both the
/// directory guard and the file path.
fn config_file(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tack.json5");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn a_json5_file_loads_with_comments_and_trailing_commas() {
    let (_dir, path) = config_file(
        r##"
        {
            theme: "light",
            // Purple, the good kind
            accent: "#8b5cf6",
            data_file: "/tmp/tack/board.json",
        }
        "##,
    );

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.theme, Theme::Light);
    assert_eq!(config.accent.as_deref(), Some("#8b5cf6"));
    assert_eq!(config.data_file, Some(PathBuf::from("/tmp/tack/board.json")));
}

#[test]
fn a_saved_config_loads_back_equal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");

    let original = Config {
        theme: Theme::Light,
        accent: Some("#10b981".to_string()),
        data_file: Some(PathBuf::from("/tmp/tack/board.json")),
    };

    original.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), original);
}

#[test]
fn an_explicitly_named_missing_file_is_an_error() {
    // Config::load() falls back to defaults when nothing is found;
    // naming a path that does not exist gets no such grace.
    let err = Config::load_from("/no/such/tack.json5").unwrap_err();

    assert!(matches!(err, ConfigError::ReadFile { .. }));
}

#[test]
fn a_malformed_accent_fails_the_load() {
    let (_dir, path) = config_file(r#"{ accent: "periwinkle" }"#);

    let result = Config::load_from(&path);
    assert!(matches!(result, Err(ConfigError::InvalidAccent { .. })));
}

#[test]
fn an_unknown_theme_fails_the_load() {
    let (_dir, path) = config_file(r#"{ theme: "solarized" }"#);

    assert!(Config::load_from(&path).is_err());
}

#[test]
fn an_empty_document_is_the_default_config() {
    let (_dir, path) = config_file("{}");

    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn themes_serialize_lowercase() {
    let json = serde_json::to_string(&Theme::Light).unwrap();
    assert_eq!(json, r#""light""#);

    let parsed: Theme = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, Theme::Light);
}

#[test]
fn unset_options_stay_out_of_the_saved_file() {
    let json = serde_json::to_string(&Config::default()).unwrap();

    assert!(!json.contains("accent"));
    assert!(!json.contains("data_file"));
}

#[test]
fn the_data_file_option_points_the_snapshot_elsewhere() {
    use tack_store::{load_store, sample_store, save_store};

    let dir = TempDir::new().unwrap();
    let snapshot_path = dir.path().join("boards").join("tack.json");
    let (_config_dir, config_path) = config_file(&format!(
        r#"{{ data_file: "{}" }}"#,
        snapshot_path.display()
    ));

    let config = Config::load_from(&config_path).unwrap();
    let data_path = config.data_file.unwrap();

    // The same dance main() does: seed, save, and reload from the
    // configured location.
    save_store(&sample_store(), &data_path).unwrap();
    assert!(snapshot_path.exists());

    let reloaded = load_store(&data_path).unwrap();
    assert_eq!(reloaded.tasks().len(), sample_store().tasks().len());
}
