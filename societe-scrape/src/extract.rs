use crate::record::Required;
use crate::schema::{FieldSpec, Locate};
use regex::Regex;
use societe_drivers::societe_browser::{LookupError, PageHandle};
use std::sync::LazyLock;
use std::time::Duration;
use tracing::{debug, warn};

static DATE_CREATED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{2}-[0-9]{2}-[0-9]{4})").expect("valid date pattern"));

/// Reads field values from a loaded page.
///
/// Each read waits at most [`wait`](Self::wait) for its element and never
/// fails: a required field that is missing becomes [`Required::NotFound`],
/// an optional one becomes `None`.
#[derive(Debug, Clone, Copy)]
pub struct FieldExtractor {
    wait: Duration,
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WAIT)
    }
}

impl FieldExtractor {
    pub const DEFAULT_WAIT: Duration = Duration::from_millis(1000);

    pub fn new(wait: Duration) -> Self {
        Self { wait }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Trimmed text at `locator`, or the reason it could not be read.
    async fn lookup(&self, page: &dyn PageHandle, locator: &str) -> Result<String, LookupError> {
        match page.text_content(locator, self.wait).await {
            Ok(text) => Ok(text.trim().to_string()),
            Err(err) => {
                match &err {
                    LookupError::Driver { .. } => {
                        warn!(target: "societe.extract", error = %err, "field lookup failed")
                    }
                    _ => debug!(target: "societe.extract", error = %err, "field not found"),
                }
                Err(err)
            }
        }
    }

    pub async fn extract_required(&self, page: &dyn PageHandle, locator: &str) -> Required {
        match self.lookup(page, locator).await {
            Ok(text) => Required::Found(text),
            Err(_) => Required::not_found(locator),
        }
    }

    pub async fn extract_optional(&self, page: &dyn PageHandle, locator: &str) -> Option<String> {
        self.lookup(page, locator).await.ok()
    }

    /// First `DD-MM-YYYY` date in the text at `locator`.
    pub async fn extract_date_created(&self, page: &dyn PageHandle, locator: &str) -> Required {
        let Ok(text) = self.lookup(page, locator).await else {
            return Required::not_found(locator);
        };
        match DATE_CREATED.find(&text) {
            Some(date) => Required::Found(date.as_str().to_string()),
            None => {
                debug!(target: "societe.extract", %locator, %text, "no date in creation text");
                Required::not_found(locator)
            }
        }
    }

    /// Optional value from the first locator of `chain` that has one.
    pub async fn extract_first_of(&self, page: &dyn PageHandle, chain: &[&str]) -> Option<String> {
        for locator in chain {
            if let Some(text) = self.extract_optional(page, locator).await {
                return Some(text);
            }
        }
        None
    }

    /// Read a required table field; a miss reports the field's primary locator.
    pub async fn required(&self, page: &dyn PageHandle, spec: &FieldSpec) -> Required {
        match spec.locate {
            Locate::Text(locator) => self.extract_required(page, locator).await,
            Locate::DatePattern(locator) => self.extract_date_created(page, locator).await,
            Locate::FirstOf(chain) => match self.extract_first_of(page, chain).await {
                Some(text) => Required::Found(text),
                None => Required::not_found(spec.locate.primary()),
            },
        }
    }

    /// Read an optional table field.
    pub async fn optional(&self, page: &dyn PageHandle, spec: &FieldSpec) -> Option<String> {
        match spec.locate {
            Locate::Text(locator) => self.extract_optional(page, locator).await,
            Locate::FirstOf(chain) => self.extract_first_of(page, chain).await,
            Locate::DatePattern(locator) => {
                self.extract_date_created(page, locator).await.into_found()
            }
        }
    }
}
