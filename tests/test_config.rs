use skill_validate::config::Config;
use skill_validate::output::OutputFormat;

#[test]
fn no_path_yields_defaults() {
    let config = Config::load(None).unwrap();
    assert_eq!(config.output.format, OutputFormat::Pretty);
    assert!(!config.collection.include_hidden);
    assert!(config.collection.exclude.is_empty());
}

#[test]
fn loads_all_sections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("skill-validate.toml");
    std::fs::write(
        &path,
        "[output]\nformat = \"sarif\"\n\n[collection]\ninclude_hidden = true\nexclude = [\"drafts\"]\n",
    )
    .unwrap();

    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.output.format, OutputFormat::Sarif);
    assert!(config.collection.include_hidden);
    assert_eq!(config.collection.exclude, vec!["drafts"]);
}

#[test]
fn partial_file_keeps_other_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cfg.toml");
    std::fs::write(&path, "[output]\nformat = \"json\"\n").unwrap();

    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.output.format, OutputFormat::Json);
    assert!(!config.collection.include_hidden);
}

#[test]
fn missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
    assert!(err.contains("Config file not found"), "{err}");
}

#[test]
fn unknown_key_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cfg.toml");
    std::fs::write(&path, "[output]\ncolour = true\n").unwrap();

    let err = Config::load(Some(&path)).unwrap_err();
    assert!(err.contains("Failed to parse config"), "{err}");
}

#[test]
fn invalid_format_value_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cfg.toml");
    std::fs::write(&path, "[output]\nformat = \"xml\"\n").unwrap();

    assert!(Config::load(Some(&path)).is_err());
}
