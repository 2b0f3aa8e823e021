use routeway::{ConfigError, Method, RouterConfig, Router, ValidationError, load_config};
use std::io::Write;
use tempfile::NamedTempFile;

const CONFIG: &str = r#"
allowed_methods = ["GET", "POST", "PUT", "cli"]
default_action = "handle"
namespace_separator = "::"
strip_segments = ["app"]

[placeholders]
"(year)" = "^[0-9]{4}$"

[[routes]]
method = "GET"
pattern = "/"
destination = "home::Index"
name = "home"

[[routes]]
method = "GET"
pattern = "/archive/(year)"
destination = { controller = "ArchiveController", method = "year" }
name = "archive"

[[routes]]
method = "cli"
pattern = "/cache/clear"
destination = ["CacheController", "clear"]
"#;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_router_from_file() {
    let file = write_config(CONFIG);
    let router = Router::load(file.path()).unwrap();

    assert_eq!(router.routes().len(), 3);
    assert_eq!(router.url("archive", &["2024"]).unwrap(), "/archive/2024");

    let index = router.resolve("GET", "/app/").unwrap().into_route().unwrap();
    assert_eq!(index.controller(), "home::Index");
    assert_eq!(index.action(), "handle");
    assert_eq!(index.namespace(), Some("home"));

    let archive = router
        .resolve("GET", "/app/archive/1999")
        .unwrap()
        .into_route()
        .unwrap();
    assert_eq!(archive.action(), "year");
    assert_eq!(archive.params(), ["1999"]);

    let clear = router
        .resolve("CLI", "/cache/clear")
        .unwrap()
        .into_route()
        .unwrap();
    assert_eq!((clear.controller(), clear.action()), ("CacheController", "clear"));
    assert!(router.allowed_methods().contains(&Method::from("cli")));
    assert!(!router.allowed_methods().contains(&Method::Delete));
}

#[test]
fn test_load_config_then_build() {
    let file = write_config(CONFIG);
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.routes.len(), 3);

    let router = Router::from_config(&config).unwrap();
    assert_eq!(router.url("home", &[] as &[&str]).unwrap(), "/");
}

#[test]
fn test_invalid_file_reports_every_problem() {
    let file = write_config(
        r#"
        namespace_separator = "."

        [[routes]]
        method = "HEAD"
        pattern = "/x"
        destination = "X"
        "#,
    );

    match Router::load(file.path()).unwrap_err() {
        ConfigError::Validation(errors) => {
            assert_eq!(errors.len(), 2);
            assert!(errors.contains(&ValidationError::InvalidSeparator(".".to_string())));
            assert!(errors.contains(&ValidationError::MethodNotAllowed {
                index: 0,
                method: "HEAD".to_string(),
            }));
        }
        other => panic!("expected validation errors, got {other}"),
    }
}

#[test]
fn test_hand_built_config_is_validated() {
    let config = RouterConfig {
        default_action: String::new(),
        ..RouterConfig::default()
    };
    assert!(matches!(
        Router::from_config(&config),
        Err(ConfigError::Validation(_))
    ));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Router::load(dir.path().join("routes.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
