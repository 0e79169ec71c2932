//! Driver layer for browser automation.
//!
//! This crate is the only place that talks WebDriver. The scraping crate
//! depends on the traits in [`societe_browser::session`] and never on
//! `fantoccini` directly.
//!
//! - [`societe_browser::driver::SocieteDriver`]: WebDriver session for one profile page
//! - [`societe_browser::driver::FantocciniLauncher`]: opens a fresh session per call
//! - [`societe_browser::page::SocietePage`]: bounded text lookups by CSS or XPath
//! - [`societe_browser::locator::Selector`]: CSS/XPath detection for locating expressions
pub mod societe_browser;
