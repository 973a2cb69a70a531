use clap::Parser;
use packstrap::cli::{Args, Command};
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("packstrap")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_create_basic_args() {
    let parsed = Args::try_parse_from(make_args(&["create", "demo"])).unwrap();

    match parsed.command {
        Command::Create(create) => {
            assert_eq!(create.name, "demo");
            assert_eq!(create.dir, PathBuf::from("."));
            assert!(!create.force);
            assert!(create.config.plugins.is_empty());
            assert!(create.config.version.is_none());
        }
        other => panic!("Expected create, got {other:?}"),
    }
    assert!(!parsed.verbose);
}

#[test]
fn test_create_all_flags() {
    let args = make_args(&[
        "--verbose",
        "create",
        "demo",
        "./out",
        "-a",
        "Jane",
        "-e",
        "jane@example.com",
        "-v",
        "1.0.0",
        "-s",
        "lib",
        "-p",
        "docs",
        "--plugin",
        "ci",
        "-y",
        "2020",
        "--force",
        "--modname",
        "demo_mod",
        "--description",
        "A demo",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();
    assert!(parsed.verbose);

    let Command::Create(create) = parsed.command else {
        panic!("Expected create");
    };
    assert_eq!(create.dir, PathBuf::from("./out"));
    assert_eq!(create.config.author.as_deref(), Some("Jane"));
    assert_eq!(create.config.author_email.as_deref(), Some("jane@example.com"));
    assert_eq!(create.config.version.as_deref(), Some("1.0.0"));
    assert_eq!(create.config.skeleton.as_deref(), Some("lib"));
    assert_eq!(create.config.plugins, vec!["docs", "ci"]);
    assert_eq!(create.copyright_year, Some(2020));
    assert!(create.force);
    assert_eq!(create.modname.as_deref(), Some("demo_mod"));
    assert_eq!(create.description.as_deref(), Some("A demo"));
}

#[test]
fn test_defaults_supplied_options() {
    let args = make_args(&["defaults", "--author", "Jane", "-p", "docs"]);
    let parsed = Args::try_parse_from(args).unwrap();

    let Command::Defaults(config) = parsed.command else {
        panic!("Expected defaults");
    };
    let supplied = config.supplied();
    assert_eq!(supplied.len(), 2);
    assert_eq!(supplied.get("author"), Some(&serde_json::json!("Jane")));
    assert_eq!(supplied.get("plugins"), Some(&serde_json::json!(["docs"])));
}

#[test]
fn test_defaults_ignores_empty_values() {
    let args = make_args(&["defaults", "-a", "", "-e", "jane@example.com", "-p", ""]);
    let parsed = Args::try_parse_from(args).unwrap();

    let Command::Defaults(config) = parsed.command else {
        panic!("Expected defaults");
    };
    let supplied = config.supplied();
    assert_eq!(supplied.len(), 1);
    assert_eq!(
        supplied.get("author_email"),
        Some(&serde_json::json!("jane@example.com"))
    );
    assert!(!supplied.contains_key("author"));
    assert!(!supplied.contains_key("plugins"));
}

#[test]
fn test_directories_option() {
    let args = make_args(&["plugins", "--plugins-dir", "/opt/plugins"]);
    let parsed = Args::try_parse_from(args).unwrap();
    assert!(matches!(parsed.command, Command::Plugins));
    assert_eq!(parsed.plugins_dir, Some(PathBuf::from("/opt/plugins")));
}

#[test]
fn test_missing_name() {
    assert!(Args::try_parse_from(make_args(&["create"])).is_err());
}

#[test]
fn test_too_many_args() {
    assert!(Args::try_parse_from(make_args(&["create", "demo", "./out", "extra"])).is_err());
}
