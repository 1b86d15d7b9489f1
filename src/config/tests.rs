//! Tests for config functionality.

use crate::config::Config;
use crate::exit_codes;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.default_template, "rebalance");
    assert_eq!(config.sender, "notice@localhost");
    assert_eq!(config.outbox_dir, "outbox");
    assert!(config.subject_prefix.is_empty());
    assert!(config.default_recipients.is_empty());
    config.validate().unwrap();
}

#[test]
fn test_parse_empty_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
sender: ops@example.com
subject_prefix: "[TEST] "
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.sender, "ops@example.com");
    assert_eq!(config.subject_prefix, "[TEST] ");
    assert_eq!(config.default_template, "rebalance");
}

#[test]
fn test_unknown_fields_ignored() {
    let yaml = "sender: a@b.c\nfuture_option: 42\n";
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.sender, "a@b.c");
}

#[test]
fn test_invalid_sender_rejected() {
    let err = Config::from_yaml("sender: nobody\n").unwrap_err();
    assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
    assert!(err.to_string().contains("sender"));
}

#[test]
fn test_invalid_recipient_rejected() {
    let yaml = "default_recipients:\n  - a@b.c\n  - broken\n";
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("broken"));
}

#[test]
fn test_empty_default_template_rejected() {
    let err = Config::from_yaml("default_template: ''\n").unwrap_err();
    assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
}

#[test]
fn test_malformed_yaml_is_user_error() {
    let err = Config::from_yaml("sender: [unclosed\n").unwrap_err();
    assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
}

#[test]
fn test_yaml_roundtrip_preserves_values() {
    let config = Config {
        default_recipients: vec!["pm@example.com".to_string()],
        subject_prefix: "[预览] ".to_string(),
        ..Default::default()
    };

    let parsed = Config::from_yaml(&config.to_yaml().unwrap()).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_load_or_default_missing_file() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_or_default(dir.path().join("config.yaml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "outbox_dir: sent\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.outbox_dir, "sent");
}
