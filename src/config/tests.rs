use super::*;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_routebench_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("ROUTEBENCH_OUT_DIR");
        env::remove_var("ROUTEBENCH_EMBED_MODEL_DIR");
        env::remove_var("ROUTEBENCH_FAQ_THRESHOLD");
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.out_dir, PathBuf::from("solution"));
    assert!(config.embed_model_dir.is_none());
    assert_eq!(config.faq_threshold, DEFAULT_FAQ_THRESHOLD);
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_routebench_env();

    let config = Config::from_env().expect("should parse with defaults");

    assert_eq!(config.out_dir, PathBuf::from("solution"));
    assert!(config.embed_model_dir.is_none());
    assert_eq!(config.faq_threshold, 0.2);
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_routebench_env();

    let config = with_env_vars(
        &[
            ("ROUTEBENCH_OUT_DIR", "/tmp/routebench-out"),
            ("ROUTEBENCH_EMBED_MODEL_DIR", "/models/minilm"),
            ("ROUTEBENCH_FAQ_THRESHOLD", "0.35"),
        ],
        || Config::from_env().expect("should parse overrides"),
    );

    assert_eq!(config.out_dir, PathBuf::from("/tmp/routebench-out"));
    assert_eq!(config.embed_model_dir, Some(PathBuf::from("/models/minilm")));
    assert_eq!(config.faq_threshold, 0.35);
}

#[test]
#[serial]
fn test_from_env_blank_model_dir_is_none() {
    clear_routebench_env();

    let config = with_env_vars(&[("ROUTEBENCH_EMBED_MODEL_DIR", "   ")], || {
        Config::from_env().expect("blank model dir should be ignored")
    });

    assert!(config.embed_model_dir.is_none());
}

#[test]
#[serial]
fn test_from_env_invalid_threshold_rejected() {
    clear_routebench_env();

    let result = with_env_vars(&[("ROUTEBENCH_FAQ_THRESHOLD", "not-a-float")], || {
        Config::from_env()
    });

    assert!(matches!(
        result,
        Err(ConfigError::ThresholdParseError { .. })
    ));
}

#[test]
#[serial]
fn test_from_env_out_of_range_threshold_rejected() {
    clear_routebench_env();

    let result = with_env_vars(&[("ROUTEBENCH_FAQ_THRESHOLD", "1.5")], || Config::from_env());

    assert!(matches!(result, Err(ConfigError::InvalidThreshold { .. })));
}

#[test]
fn test_validate_missing_model_dir() {
    let config = Config {
        embed_model_dir: Some(PathBuf::from("/nonexistent/routebench-model")),
        ..Default::default()
    };

    assert!(matches!(
        config.validate(),
        Err(ConfigError::PathNotFound { .. })
    ));
}

#[test]
fn test_validate_model_dir_must_be_directory() {
    let file = tempfile::NamedTempFile::new().expect("temp file");
    let config = Config {
        embed_model_dir: Some(file.path().to_path_buf()),
        ..Default::default()
    };

    assert!(matches!(
        config.validate(),
        Err(ConfigError::NotADirectory { .. })
    ));
}

#[test]
fn test_validate_default_ok() {
    let config = Config::default();
    assert!(config.validate().is_ok());
}
