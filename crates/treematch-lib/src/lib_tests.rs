use std::io::Write;

use crate::{Error, NameCheck, load_config, read_file};

#[test]
fn load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"name_check": "root", "equivalent_rules": [{{"candidate": "A", "reference": "B"}}]}}"#
    )
    .unwrap();

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.name_check(), NameCheck::Root);
    assert!(config.rules_equivalent("A", "B"));
}

#[test]
fn load_config_rejects_bad_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();

    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert!(err.to_string().starts_with("invalid configuration:"));
}

#[test]
fn missing_file_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Missing.txt");

    let err = read_file(&path).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("Missing.txt"));
}
