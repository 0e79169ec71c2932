use serial_test::serial;
use societe_common::BrowserKind;
use societe_common::observability::LogFormat;
use societe_config::SocieteConfigLoader;
use std::{fs, path::PathBuf};
use tempfile::TempDir;

/// Helper to write a YAML file in a temp dir and return its path.
fn write_yaml(tmp: &TempDir, name: &str, yaml: &str) -> PathBuf {
    let p = tmp.path().join(name);
    fs::write(&p, yaml).expect("write yaml");
    p
}

const FILE_YAML: &str = r#"
browser:
  kind: firefox
  headless: true
extraction:
  field_timeout_ms: 2500
output:
  directory: "${SOCIETE_EXPORT_ROOT}/xlsx"
logging:
  format: json
urls:
  - "https://www.societe.com/societe/orange-380129866.html"
  - "https://www.societe.com/societe/free-421938861.html"
"#;

#[test]
#[serial]
fn loads_file_and_expands_placeholders() {
    let tmp = TempDir::new().unwrap();
    let p = write_yaml(&tmp, "societe.yaml", FILE_YAML);

    let config = temp_env::with_var("SOCIETE_EXPORT_ROOT", Some("/data"), || {
        SocieteConfigLoader::new()
            .with_file(&p)
            .load()
            .expect("load config")
    });

    assert_eq!(config.extraction.field_timeout_ms, 2500);
    assert_eq!(config.output.directory, PathBuf::from("/data/xlsx"));
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.urls.len(), 2);
    assert_eq!(config.output.sheet_prefix, "Output");
}

#[test]
#[serial]
fn environment_overrides_file() {
    let tmp = TempDir::new().unwrap();
    let p = write_yaml(&tmp, "societe.yaml", FILE_YAML);

    let config = temp_env::with_vars(
        [
            ("SOCIETE_EXPORT_ROOT", Some("/data")),
            ("SOCIETE__BROWSER__KIND", Some("chrome")),
            ("SOCIETE__BROWSER__HEADLESS", Some("false")),
            ("SOCIETE__EXTRACTION__FIELD_TIMEOUT_MS", Some("4000")),
        ],
        || {
            SocieteConfigLoader::new()
                .with_file(&p)
                .load()
                .expect("load config")
        },
    );

    assert_eq!(config.browser.kind, BrowserKind::Chrome);
    assert!(!config.browser.headless);
    assert_eq!(config.extraction.field_timeout_ms, 4000);
    assert_eq!(config.browser.endpoint(), "http://localhost:9515");
}

#[test]
#[serial]
fn missing_optional_file_falls_back_to_defaults() {
    let tmp = TempDir::new().unwrap();
    let config = SocieteConfigLoader::new()
        .with_optional_file(tmp.path().join("absent.yaml"))
        .load()
        .expect("defaults");

    assert_eq!(config.browser.kind, BrowserKind::Firefox);
    assert!(config.browser.headless);
    assert_eq!(config.browser.endpoint(), "http://localhost:4444");
    assert_eq!(config.extraction.field_timeout_ms, 1000);
}

#[test]
#[serial]
fn missing_required_file_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let result = SocieteConfigLoader::new()
        .with_file(tmp.path().join("absent.yaml"))
        .load();
    assert!(result.is_err());
}

#[test]
#[serial]
fn unknown_browser_name_from_environment_is_rejected() {
    let result = temp_env::with_var("SOCIETE__BROWSER__KIND", Some("chromium"), || {
        SocieteConfigLoader::new().load()
    });
    assert!(result.is_err());
}
