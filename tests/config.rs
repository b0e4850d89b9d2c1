//! Configuration system tests
//!
//! Tests for config paths and site config loading.

mod common;

use std::path::PathBuf;

use brewbook::cli::{BuildOverrides, CliArgs, StartupMode};
use brewbook::config::SiteConfig;
use brewbook::config_paths;
use brewbook::Error;
use clap::Parser;
use common::write_files;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_returns_some() {
    assert!(config_paths::config_dir().is_some());
}

#[test]
fn test_config_dir_contains_brewbook() {
    let dir = config_paths::config_dir().unwrap();
    assert!(dir.to_string_lossy().contains("brewbook"));
}

#[test]
fn test_user_files_live_under_config_dir() {
    let dir = config_paths::config_dir().unwrap();
    assert!(config_paths::themes_dir().unwrap().starts_with(&dir));
    assert!(config_paths::logs_dir().unwrap().starts_with(&dir));
    assert!(config_paths::config_file()
        .unwrap()
        .to_string_lossy()
        .ends_with("config.yaml"));
}

#[test]
fn test_project_config_file() {
    assert_eq!(
        config_paths::project_config_file(std::path::Path::new("/work")),
        PathBuf::from("/work/brewbook.yaml")
    );
}

// ========================================================================
// Site Config Loading Tests
// ========================================================================

#[test]
fn test_project_config_is_found() {
    let dir = tempfile::tempdir().unwrap();
    write_files(
        dir.path(),
        &[(
            "brewbook.yaml",
            "title: Course Site\nextra_keywords: [var, record]\n",
        )],
    );

    let config = SiteConfig::load(None, dir.path()).unwrap();
    assert_eq!(config.title, "Course Site");
    assert_eq!(config.extra_keywords, vec!["var", "record"]);
}

#[test]
fn test_explicit_config_wins() {
    let dir = tempfile::tempdir().unwrap();
    write_files(
        dir.path(),
        &[
            ("brewbook.yaml", "title: Project\n"),
            ("custom.yaml", "title: Custom\n"),
        ],
    );

    let custom = dir.path().join("custom.yaml");
    let config = SiteConfig::load(Some(custom.as_path()), dir.path()).unwrap();
    assert_eq!(config.title, "Custom");
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.yaml");
    let err = SiteConfig::load(Some(missing.as_path()), dir.path()).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert!(err.to_string().contains("nope.yaml"));
}

#[test]
fn test_malformed_explicit_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    write_files(dir.path(), &[("bad.yaml", "title: [unclosed\n")]);
    let bad = dir.path().join("bad.yaml");
    let result = SiteConfig::load(Some(bad.as_path()), dir.path());
    assert!(matches!(result, Err(Error::Yaml(_))));
}

#[test]
fn test_unknown_fields_are_ignored() {
    let config = SiteConfig::from_yaml("title: X\nfuture_option: true\n").unwrap();
    assert_eq!(config.title, "X");
}

#[test]
fn test_yaml_output_loads_back() {
    let config = SiteConfig {
        title: "Round".to_string(),
        extra_keywords: vec!["var".to_string()],
        ..SiteConfig::default()
    };
    let yaml = config.to_yaml().unwrap();
    assert_eq!(SiteConfig::from_yaml(&yaml).unwrap(), config);
}

// ========================================================================
// Command Line Overrides
// ========================================================================

#[test]
fn test_cli_overrides_then_resolve() {
    let dir = tempfile::tempdir().unwrap();
    write_files(dir.path(), &[("brewbook.yaml", "output_dir: public\n")]);

    let args = CliArgs::try_parse_from(["brewbook", "build", "--notes", "/shared/notes"]).unwrap();
    let StartupMode::Build(overrides) = args.into_config().unwrap().mode else {
        panic!("Expected Build mode");
    };

    let config = overrides
        .apply(SiteConfig::load(None, dir.path()).unwrap())
        .resolve_paths(dir.path());
    assert_eq!(config.output_dir, dir.path().join("public"));
    assert_eq!(config.notes_dir, PathBuf::from("/shared/notes"));
    assert_eq!(config.programs_dir, dir.path().join("programs"));
}

#[test]
fn test_empty_overrides_change_nothing() {
    let config = SiteConfig::default();
    assert_eq!(BuildOverrides::default().apply(config.clone()), config);
}
