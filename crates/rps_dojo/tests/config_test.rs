//! Tests for configuration loading.

use rps_dojo::GameConfig;

#[test]
fn test_defaults_match_the_observed_system() {
    let config = GameConfig::default();
    assert_eq!(*config.training_limit(), 10);
    assert_eq!(*config.battle_win_threshold(), 3);
    assert!(config.bearer_token().is_none());
}

#[test]
fn test_full_file_overrides_everything() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rps_dojo.toml");
    std::fs::write(
        &path,
        r#"
training_limit = 5
battle_win_threshold = 2
resolver_url = "http://resolver.test:9000"
bearer_token = "opaque-credential"
"#,
    )
    .unwrap();

    let config = GameConfig::from_file(&path).unwrap();
    assert_eq!(*config.training_limit(), 5);
    assert_eq!(*config.battle_win_threshold(), 2);
    assert_eq!(config.resolver_url(), "http://resolver.test:9000");
    assert_eq!(config.bearer_token().as_deref(), Some("opaque-credential"));

    let session = config.session();
    assert_eq!(session.training_limit, 5);
    assert_eq!(session.battle_win_threshold, 2);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rps_dojo.toml");
    std::fs::write(&path, "training_limit = 4\n").unwrap();

    let config = GameConfig::from_file(&path).unwrap();
    assert_eq!(*config.training_limit(), 4);
    assert_eq!(*config.battle_win_threshold(), 3);
}

#[test]
fn test_missing_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig::load(dir.path().join("absent.toml")).unwrap();
    assert_eq!(*config.training_limit(), 10);
}

#[test]
fn test_malformed_file_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rps_dojo.toml");
    std::fs::write(&path, "training_limit = \"ten\"\n").unwrap();

    let err = GameConfig::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("failed to parse config"));
}
