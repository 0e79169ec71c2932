//! Common types and utilities shared across the societe crates.
//!
//! This crate defines the shared error type, the browser selection enum and
//! the logging initializer. It stays dependency-light so every crate in the
//! workspace can depend on it.
//!
//! # Overview
//!
//! - [`SocieteError`] and [`Result`]: run-level error handling
//! - [`BrowserKind`]: which WebDriver-backed browser drives a session
//! - [`observability`]: centralised tracing/logging initialisation
//!
//! # Examples
//!
//! ```rust
//! use societe_common::BrowserKind;
//!
//! assert_eq!(BrowserKind::default(), BrowserKind::Firefox);
//! assert_eq!(BrowserKind::Chrome.default_webdriver_url(), "http://localhost:9515");
//! ```
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod observability;

/// Browser used for an isolated scraping session.
///
/// Firefox is the default; it is driven through geckodriver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowserKind {
    #[default]
    Firefox,
    Chrome,
}

impl BrowserKind {
    /// Endpoint of the WebDriver service usually paired with this browser.
    pub fn default_webdriver_url(&self) -> &'static str {
        match self {
            BrowserKind::Firefox => "http://localhost:4444",
            BrowserKind::Chrome => "http://localhost:9515",
        }
    }
}

impl fmt::Display for BrowserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrowserKind::Firefox => f.write_str("firefox"),
            BrowserKind::Chrome => f.write_str("chrome"),
        }
    }
}

/// Error types that end a run or a URL.
///
/// Field-level lookup failures never surface here; they are folded into the
/// record by the extractor.
#[derive(thiserror::Error, Debug)]
pub enum SocieteError {
    /// A browsing session could not be started.
    #[error("Browser launch failed: {0}")]
    Launch(String),

    /// The page for a profile URL could not be loaded.
    #[error("Navigation to {url} failed: {reason}")]
    Navigation { url: String, reason: String },
}

/// Convenient alias for results that use [`SocieteError`].
pub type Result<T> = std::result::Result<T, SocieteError>;
