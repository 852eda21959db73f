use std::io::Write;

use veneer_config::{ConfigError, ENV_LOG_LEVEL, LogOutput, Platform, load_with_env};

#[test]
fn loads_file_then_applies_environment() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(
        file,
        r#"{{
            "root_id": "shell",
            "logging": {{ "level": "warn", "format": "json" }},
            "onsen": {{ "platform": "ios", "animations": false }}
        }}"#
    )?;

    let config = load_with_env(Some(file.path()), |key| {
        (key == ENV_LOG_LEVEL).then(|| "trace".to_string())
    })?;

    assert_eq!(config.root_id, "shell");
    assert_eq!(config.logging.level, "trace");
    assert_eq!(config.logging.format, LogOutput::Json);
    assert_eq!(config.onsen.platform, Some(Platform::Ios));
    assert!(!config.onsen.animations);
    assert!(config.onsen.auto_styling);
    Ok(())
}

#[test]
fn missing_file_reports_path() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("absent.json");
    match load_with_env(Some(&path), |_| None) {
        Err(ConfigError::Io {
            path: reported, ..
        }) => assert_eq!(reported, path),
        other => panic!("expected io error, got {other:?}"),
    }
    Ok(())
}

#[test]
fn invalid_level_in_file_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, r#"{{ "logging": {{ "level": "chatty" }} }}"#)?;
    assert!(matches!(
        load_with_env(Some(file.path()), |_| None),
        Err(ConfigError::InvalidField { field, .. }) if field == "level"
    ));
    Ok(())
}
