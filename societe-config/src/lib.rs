//! Loader for scraper configuration with YAML + environment overlays.
//!
//! Sources are merged in the order they are attached, then
//! `SOCIETE__`-prefixed environment variables are applied on top
//! (`SOCIETE__BROWSER__KIND=chrome` sets `browser.kind`). String values may
//! reference other variables as `${VAR}`; expansion runs after the merge.
//! Every key has a default, so an empty configuration is valid.
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use serde_json::Value;
use societe_common::BrowserKind;
use societe_common::observability::LogFormat;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

const MAXIMUM_ENV_EXPANSION_DEPTH: usize = 8;
const ENV_PREFIX: &str = "SOCIETE";
/// Excel caps sheet names at 31 characters; the timestamp suffix takes 17.
const MAX_SHEET_PREFIX_LEN: usize = 14;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("configuration source error: {0}")]
    Source(#[from] ConfigError),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SocieteConfig {
    pub browser: BrowserSettings,
    pub extraction: ExtractionSettings,
    pub output: OutputSettings,
    pub logging: LoggingSettings,
    /// Profile URLs to scrape when none are given on the command line.
    pub urls: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BrowserSettings {
    pub kind: BrowserKind,
    /// WebDriver endpoint; falls back to the usual port for `kind`.
    pub webdriver_url: Option<String>,
    pub headless: bool,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            kind: BrowserKind::Firefox,
            webdriver_url: None,
            headless: true,
        }
    }
}

impl BrowserSettings {
    pub fn endpoint(&self) -> &str {
        self.webdriver_url
            .as_deref()
            .unwrap_or_else(|| self.kind.default_webdriver_url())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractionSettings {
    /// Upper bound on the wait for a single field's element.
    pub field_timeout_ms: u64,
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            field_timeout_ms: 1000,
        }
    }
}

impl ExtractionSettings {
    pub fn field_timeout(&self) -> Duration {
        Duration::from_millis(self.field_timeout_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub directory: PathBuf,
    pub sheet_prefix: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            sheet_prefix: "Output".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub format: LogFormat,
    pub emit_stderr: bool,
    pub directory: Option<PathBuf>,
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            emit_stderr: true,
            directory: None,
            filter: "info".to_string(),
        }
    }
}

impl SocieteConfig {
    fn validate(mut self) -> Result<Self, SettingsError> {
        if self.extraction.field_timeout_ms == 0 {
            return Err(SettingsError::Invalid(
                "extraction.field_timeout_ms must be greater than zero".into(),
            ));
        }
        let prefix = self.output.sheet_prefix.trim();
        if prefix.is_empty() || prefix.chars().count() > MAX_SHEET_PREFIX_LEN {
            return Err(SettingsError::Invalid(format!(
                "output.sheet_prefix must be 1..={MAX_SHEET_PREFIX_LEN} characters, got {:?}",
                self.output.sheet_prefix
            )));
        }
        self.output.sheet_prefix = prefix.to_string();
        Ok(self)
    }
}

/// Per-user configuration file, e.g. `~/.config/societe/societe.yaml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("societe").join("societe.yaml"))
}

fn expand_env_in_value(v: &mut Value) {
    match v {
        Value::String(s) if s.contains('$') => {
            let mut cur = std::mem::take(s);
            for _ in 0..MAXIMUM_ENV_EXPANSION_DEPTH {
                let expanded = shellexpand::env(&cur)
                    .map(|cow| cow.into_owned())
                    .unwrap_or_else(|_| cur.clone());
                if expanded == cur {
                    break;
                }
                cur = expanded;
            }
            *s = cur;
        }
        Value::Array(arr) => arr.iter_mut().for_each(expand_env_in_value),
        Value::Object(obj) => obj.values_mut().for_each(expand_env_in_value),
        _ => {}
    }
}

/// Builder hiding the `config` crate wiring.
pub struct SocieteConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
}

impl Default for SocieteConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SocieteConfigLoader {
    /// Start from defaults only; environment overrides are applied in [`load`](Self::load).
    ///
    /// ```
    /// use societe_config::SocieteConfigLoader;
    ///
    /// let config = SocieteConfigLoader::new().load().expect("defaults are valid");
    /// assert_eq!(config.extraction.field_timeout_ms, 1000);
    /// assert!(config.urls.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            builder: Config::builder(),
        }
    }

    /// Attach a file that must exist; the format is inferred from its suffix.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).required(true));
        self
    }

    /// Attach a file that is skipped when missing.
    pub fn with_optional_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).required(false));
        self
    }

    /// Merge an inline YAML snippet.
    ///
    /// ```
    /// use societe_common::BrowserKind;
    /// use societe_config::SocieteConfigLoader;
    ///
    /// let cfg = SocieteConfigLoader::new()
    ///     .with_yaml_str(
    ///         r#"
    /// browser:
    ///   kind: chrome
    ///   headless: false
    /// urls:
    ///   - "https://www.societe.com/societe/orange-380129866.html"
    /// "#,
    ///     )
    ///     .load()
    ///     .unwrap();
    ///
    /// assert_eq!(cfg.browser.kind, BrowserKind::Chrome);
    /// assert_eq!(cfg.browser.endpoint(), "http://localhost:9515");
    /// assert_eq!(cfg.urls.len(), 1);
    /// ```
    pub fn with_yaml_str(mut self, yaml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(yaml, FileFormat::Yaml));
        self
    }

    /// Merge the attached sources with `SOCIETE__` environment overrides,
    /// expand `${VAR}` placeholders and validate the result.
    pub fn load(self) -> Result<SocieteConfig, SettingsError> {
        let cfg = self
            .builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut v: Value = cfg.try_deserialize()?;
        expand_env_in_value(&mut v);

        let typed: SocieteConfig = serde_json::from_value(v)
            .map_err(|e| ConfigError::Message(e.to_string()))?;

        typed.validate()
    }
}
