use duration_picker::config::{PickerConfig, load_from_path, save_to_path};
use duration_picker::picker::unit::{Unit, UnitsStyle};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file
}

#[test]
fn test_load_config_valid() {
    let temp_file = write_config(
        r#"
        units = ["days", "hours", "minutes"]
        loops = true
        units_style = "short"

        [rows]
        days = 30
        hours = 100

        [font]
        family = "Helvetica"
        size = 15
        "#,
    );

    let config = load_from_path(temp_file.path()).expect("Failed to load valid config");

    assert_eq!(config.units, vec![Unit::Days, Unit::Hours, Unit::Minutes]);
    assert!(config.loops);
    assert_eq!(config.units_style, UnitsStyle::Short);
    assert_eq!(config.rows.get(&Unit::Days), Some(&30));
    assert_eq!(config.font.family, "Helvetica");
    assert_eq!(config.font.size, 15.0);

    let picker = config.build().unwrap();
    assert_eq!(picker.row_count(Unit::Hours), 100);
    assert_eq!(picker.labels(), &["days", "hrs", "mins"]);
}

#[test]
fn test_load_config_defaults() {
    let temp_file = write_config("");

    let config = load_from_path(temp_file.path()).expect("Empty config should use defaults");

    assert_eq!(config.units, vec![Unit::Hours, Unit::Minutes, Unit::Seconds]);
    assert!(!config.loops);
    assert_eq!(config.font.size, 17.0);
}

#[test]
fn test_load_config_duplicate_units() {
    let temp_file = write_config(r#"units = ["hours", "minutes", "hours"]"#);

    let result = load_from_path(temp_file.path());
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("listed more than once")
    );
}

#[test]
fn test_load_config_negative_rows() {
    let temp_file = write_config(
        r#"
        [rows]
        minutes = -5
        "#,
    );

    let result = load_from_path(temp_file.path());
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("invalid row count"));
}

#[test]
fn test_load_config_zero_font_size() {
    let temp_file = write_config(
        r#"
        [font]
        size = 0
        "#,
    );

    assert!(load_from_path(temp_file.path()).is_err());
}

#[test]
fn test_load_config_string_overrides() {
    let temp_file = write_config(
        r#"
        [strings]
        "seconds-full-plural" = "Sekunden"
        "#,
    );

    let config = load_from_path(temp_file.path()).unwrap();
    let picker = config.build().unwrap();
    assert_eq!(picker.labels()[2], "Sekunden");
}

#[test]
fn test_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = PickerConfig::default();
    config.units = vec![Unit::Weeks, Unit::Days];
    config.rows.insert(Unit::Weeks, 10);
    config.units_style = UnitsStyle::Abbreviated;
    save_to_path(&config, &path).unwrap();

    let loaded = load_from_path(&path).unwrap();
    assert_eq!(loaded.units, vec![Unit::Weeks, Unit::Days]);
    assert_eq!(loaded.rows.get(&Unit::Weeks), Some(&10));
    assert_eq!(loaded.units_style, UnitsStyle::Abbreviated);
}
