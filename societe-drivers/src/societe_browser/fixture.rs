//! In-memory stand-ins for the browser, for tests that must not need a
//! running WebDriver.
//!
//! ```
//! use societe_drivers::societe_browser::fixture::StaticPage;
//! use societe_drivers::societe_browser::{LookupError, PageHandle};
//! use std::time::Duration;
//!
//! # tokio_test_block_on(async {
//! let page = StaticPage::new().with_text("#siret_number", " 380 129 866 00031 ");
//! let wait = Duration::from_millis(10);
//! assert_eq!(page.text_content("#siret_number", wait).await.unwrap(), " 380 129 866 00031 ");
//! assert!(matches!(
//!     page.text_content("#tva_number", wait).await,
//!     Err(LookupError::Timeout { .. })
//! ));
//! # });
//! # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```
use crate::societe_browser::{
    page::LookupError,
    session::{BrowserSession, PageHandle, SessionLauncher},
};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// A page with fixed answers. Unknown expressions time out.
#[derive(Debug, Clone, Default)]
pub struct StaticPage {
    texts: HashMap<String, String>,
    failures: HashMap<String, LookupError>,
}

impl StaticPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, expression: impl Into<String>, text: impl Into<String>) -> Self {
        self.texts.insert(expression.into(), text.into());
        self
    }

    pub fn with_failure(mut self, expression: impl Into<String>, error: LookupError) -> Self {
        self.failures.insert(expression.into(), error);
        self
    }
}

#[async_trait]
impl PageHandle for StaticPage {
    async fn text_content(
        &self,
        expression: &str,
        wait: Duration,
    ) -> Result<String, LookupError> {
        if let Some(text) = self.texts.get(expression) {
            return Ok(text.clone());
        }
        if let Some(err) = self.failures.get(expression) {
            return Err(err.clone());
        }
        Err(LookupError::Timeout {
            locator: expression.to_string(),
            waited_ms: wait.as_millis() as u64,
        })
    }
}

/// Counters shared between a [`StaticLauncher`] and the sessions it opens.
#[derive(Debug, Clone, Default)]
pub struct SessionStats {
    launched: Arc<AtomicUsize>,
    closed: Arc<AtomicUsize>,
    visited: Arc<std::sync::Mutex<Vec<String>>>,
}

impl SessionStats {
    pub fn launched(&self) -> usize {
        self.launched.load(Ordering::SeqCst)
    }

    pub fn closed(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }

    /// URLs navigated to, in order.
    pub fn visited(&self) -> Vec<String> {
        self.visited
            .lock()
            .map(|v| v.clone())
            .unwrap_or_default()
    }
}

/// Serves a [`StaticPage`] per URL. Navigating to an unknown URL fails.
#[derive(Debug, Clone, Default)]
pub struct StaticLauncher {
    pages: HashMap<String, StaticPage>,
    refuse_launch: bool,
    stats: SessionStats,
}

impl StaticLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: impl Into<String>, page: StaticPage) -> Self {
        self.pages.insert(url.into(), page);
        self
    }

    /// Make every launch fail, as when no WebDriver is listening.
    pub fn refusing(mut self) -> Self {
        self.refuse_launch = true;
        self
    }

    pub fn stats(&self) -> SessionStats {
        self.stats.clone()
    }
}

#[async_trait]
impl SessionLauncher for StaticLauncher {
    async fn launch(&self) -> Result<Box<dyn BrowserSession>> {
        if self.refuse_launch {
            return Err(anyhow!("connection refused"));
        }
        self.stats.launched.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(StaticSession {
            pages: self.pages.clone(),
            current: StaticPage::default(),
            stats: self.stats.clone(),
        }))
    }
}

struct StaticSession {
    pages: HashMap<String, StaticPage>,
    current: StaticPage,
    stats: SessionStats,
}

#[async_trait]
impl BrowserSession for StaticSession {
    async fn goto(&mut self, url: &str) -> Result<()> {
        if let Ok(mut visited) = self.stats.visited.lock() {
            visited.push(url.to_string());
        }
        self.current = self
            .pages
            .get(url)
            .cloned()
            .ok_or_else(|| anyhow!("net::ERR_NAME_NOT_RESOLVED at {url}"))?;
        Ok(())
    }

    fn page(&self) -> &dyn PageHandle {
        &self.current
    }

    async fn close(self: Box<Self>) -> Result<()> {
        self.stats.closed.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
